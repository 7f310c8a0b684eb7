// crates/mh_setrun/src/scenario/lake_3088.rs

//! 3088 堰塞湖溃决算例
//!
//! 经纬度坐标，计算域 93.0–95.6 E × 28.0–30.0 N，最粗网格 255×222，6 层 AMR。
//! 坝址附近用 13 个区域限定加密层级，沿河道布置 622 个横断面测站。

use std::path::PathBuf;

use super::gauge_table::CROSS_SECTION_GAUGES;
use crate::amr::{AmrDiagnostics, AmrHierarchy, RefinementRatios, RefinementTrigger, RegridPolicy};
use crate::codes::{
    AuxType, BoundaryCondition, CoordinateSystem, DimensionalSplit, Limiter, Order, OutputFormat,
    SourceSplit, TransverseWaves,
};
use crate::config::{RunConfig, RunConfigBuilder};
use crate::domain::{Domain, EquationSystem};
use crate::error::SetrunResult;
use crate::gauge::Gauge;
use crate::geo::{Friction, GeoPhysics, RefinementData};
use crate::region::{Region, RegionRow};
use crate::schedule::{
    CheckpointStyle, ComponentMask, OutputControls, OutputStyle, Restart, TimeSchedule, TimeStepping,
};
use crate::scheme::{BoundaryConditions, DomainScheme, NumericalScheme};
use crate::sources::{FgmaxSource, TopoSource};

/// 模拟总时长 [s]（63 小时）
pub const T_FINAL: f64 = 226_800.0;

/// 下游出口区域放宽加密的时刻 [s]
const OUTLET_SWITCH: f64 = 184_400.0;

/// 测站采样间隔 [s]
const GAUGE_INTERVAL: f64 = 660.0;

/// 加密区域，自坝址向下游排列
pub const LAKE_3088_REGIONS: [RegionRow; 13] = [
    (5, 5, 0.0, 1e10, 94.84, 94.96, 29.54, 29.64),
    (4, 5, 0.0, 1e10, 94.79, 94.92, 29.44, 29.54),
    (3, 5, 0.0, 1e10, 94.65, 94.79, 29.41, 29.51),
    (3, 5, 0.0, 1e10, 94.49, 94.65, 29.41, 29.53),
    (3, 5, 0.0, 1e10, 94.34, 94.49, 29.41, 29.55),
    (3, 4, 0.0, 1e10, 94.38, 94.49, 29.29, 29.41),
    (3, 4, 0.0, 1e10, 94.27, 94.38, 29.20, 29.36),
    (1, 4, 0.0, 1e10, 93.37, 94.27, 29.04, 29.33),
    (1, 3, 0.0, 1e10, 92.96, 93.37, 28.96, 29.19),
    (1, 3, 0.0, 1e10, 94.29, 94.52, 29.55, 29.75),
    (1, 3, 0.0, 1e10, 94.03, 94.29, 29.71, 29.77),
    (1, 4, 0.0, OUTLET_SWITCH, 95.19, 95.6, 28.0, 28.18),
    (1, 3, OUTLET_SWITCH, 1e10, 95.19, 95.6, 28.0, 28.18),
];

fn domain_scheme() -> SetrunResult<DomainScheme> {
    let domain = Domain::new(CoordinateSystem::LatLong, [93.0, 28.0], [95.6, 30.0], [255, 222])?;
    let equations = EquationSystem {
        num_eqn: 3,
        num_aux: 3,
        capacity_index: Some(1),
        aux_types: vec![AuxType::Center, AuxType::Capacity, AuxType::YLeft],
    };
    let scheme = NumericalScheme {
        order: Order::Second,
        transverse_waves: TransverseWaves::All,
        dimensional_split: DimensionalSplit::Unsplit,
        num_waves: 3,
        limiters: vec![Limiter::Mc; 3],
        use_fwaves: true,
        source_split: SourceSplit::Godunov,
        num_ghost: 2,
        boundaries: BoundaryConditions::uniform(BoundaryCondition::Extrap),
    };
    DomainScheme::new(domain, equations, scheme)
}

fn schedule(domain_scheme: &DomainScheme) -> SetrunResult<TimeSchedule> {
    TimeSchedule::builder(0.0)
        .with_output(OutputStyle::EquallySpaced {
            num_output_times: 2,
            t_final: T_FINAL,
            output_t0: true,
        })
        .with_checkpoint(CheckpointStyle::Times {
            times: vec![183_600.0],
        })
        .with_stepping(TimeStepping {
            dt_variable: true,
            dt_initial: 0.016,
            dt_max: 1e99,
            cfl_desired: 0.7,
            cfl_max: 1.0,
            steps_max: 50_000_000,
        })
        .with_restart(Restart::Fresh)
        .with_controls(OutputControls {
            format: OutputFormat::Ascii,
            q_components: ComponentMask::All,
            aux_components: ComponentMask::None,
            aux_only_once: true,
            verbosity: 1,
        })
        .build(domain_scheme)
}

fn hierarchy() -> SetrunResult<AmrHierarchy> {
    AmrHierarchy::new(
        6,
        RefinementRatios::uniform(vec![4, 2, 2, 2, 2]),
        RefinementTrigger::FlagToRefine,
        RegridPolicy {
            regrid_interval: 3,
            buffer_width: 3,
            clustering_cutoff: 0.7,
            verbosity: 0,
        },
        AmrDiagnostics::default(),
    )
}

/// 计算域、格式、时间计划、AMR、地球物理参数与外部文件，不含区域和测站
pub fn lake_3088_base() -> SetrunResult<RunConfigBuilder> {
    let domain_scheme = domain_scheme()?;
    let schedule = schedule(&domain_scheme)?;
    let amr = hierarchy()?;

    let geo = GeoPhysics {
        gravity: 9.81,
        earth_radius: 6367.5e3,
        coriolis_forcing: false,
        sea_level: 0.0,
        dry_tolerance: 1e-3,
        friction: Friction::Manning {
            coefficient: 0.04,
            depth: 20.0,
        },
    };
    let refinement = RefinementData {
        wave_tolerance: 1e-2,
        deep_depth: 1e2,
        max_level_deep: 3,
        variable_dt_refinement_ratios: true,
    };

    let mut builder = RunConfig::builder(domain_scheme, schedule, amr)
        .with_geo(geo)
        .with_refinement(refinement);
    builder.add_topo(TopoSource {
        topo_type: 3,
        min_level: 1,
        max_level: 5,
        t_start: 0.0,
        t_end: 1e10,
        path: PathBuf::from("mega_fill.txt"),
    })?;
    builder.set_num_fgmax_val(5)?;
    builder.add_fgmax(FgmaxSource {
        min_level: 1,
        max_level: 6,
        path: PathBuf::from("fgmax_mega_20190611.txt"),
    })?;
    Ok(builder)
}

/// 横断面测站，全程按固定间隔采样
pub fn cross_section_gauges() -> impl Iterator<Item = Gauge> {
    CROSS_SECTION_GAUGES.iter().map(|&(id, x, y)| Gauge {
        id,
        x,
        y,
        t_start: 0.0,
        t_end: T_FINAL,
        min_sample_interval: GAUGE_INTERVAL,
    })
}

/// 完整算例
pub fn lake_3088() -> SetrunResult<RunConfig> {
    let mut builder = lake_3088_base()?;
    builder.add_regions(LAKE_3088_REGIONS.iter().copied().map(Region::from))?;
    builder.add_gauges(cross_section_gauges())?;
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_lengths_match_levels() {
        let amr = hierarchy().unwrap();
        assert_eq!(amr.max_levels() - 1, 5);
        assert_eq!(amr.ratios().x.len(), 5);
        assert_eq!(amr.ratios().t.len(), 5);
    }

    #[test]
    fn test_gauge_ids_are_consecutive() {
        let ids: Vec<u32> = CROSS_SECTION_GAUGES.iter().map(|g| g.0).collect();
        assert_eq!(ids, (0..622).collect::<Vec<_>>());
    }

    #[test]
    fn test_outlet_windows_resolve_by_time() {
        let config = lake_3088().unwrap();
        assert_eq!(config.resolve_levels(1000.0, 95.3, 28.1).max_level, 4);
        assert_eq!(config.resolve_levels(200_000.0, 95.3, 28.1).max_level, 3);
        // 切换时刻两个窗口都覆盖，取更严格的
        assert_eq!(config.resolve_levels(OUTLET_SWITCH, 95.3, 28.1).max_level, 3);
    }
}
