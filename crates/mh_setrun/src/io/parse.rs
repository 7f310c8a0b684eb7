// crates/mh_setrun/src/io/parse.rs

//! 各 `.data` 文件的读取，与 [`emit`](super::emit) 的字段顺序一一对应

use std::path::PathBuf;

use super::data::DataFile;
use crate::amr::{AmrDiagnostics, RefinementRatios, RefinementTrigger, RegridPolicy};
use crate::codes::{
    AuxType, BoundaryCondition, CoordinateSystem, DimensionalSplit, Limiter, Order, OutputFormat,
    PerturbationKind, SourceSplit, TransverseWaves,
};
use crate::error::{ConfigResult, SetrunResult};
use crate::gauge::{Gauge, GaugeRow};
use crate::geo::{Friction, GeoPhysics, RefinementData};
use crate::region::{Region, RegionRow};
use crate::schedule::{
    CheckpointStyle, ComponentMask, OutputControls, OutputStyle, Restart, TimeStepping,
};
use crate::scheme::{BoundaryConditions, NumericalScheme};
use crate::sources::{DtopoSource, FgmaxSource, FixedGrid, PerturbationSource, TopoSource};

fn coded<E>(file: &mut DataFile, name: &str, from_code: fn(i64) -> ConfigResult<E>) -> SetrunResult<E> {
    let code: i64 = file.value(name)?;
    from_code(code).map_err(|e| file.error(e.to_string()))
}

fn coded_list<E>(file: &mut DataFile, name: &str, from_code: fn(i64) -> ConfigResult<E>) -> SetrunResult<Vec<E>> {
    let codes: Vec<i64> = file.values(name)?;
    codes
        .into_iter()
        .map(|c| from_code(c).map_err(|e| file.error(e.to_string())))
        .collect()
}

fn count(file: &mut DataFile, name: &str) -> SetrunResult<usize> {
    file.value(name)
}

fn path_row(file: &mut DataFile) -> SetrunResult<PathBuf> {
    file.row(1)?.get(0)
}

/// `claw.data` 的内容
#[derive(Debug, Clone)]
pub(super) struct ClawParts {
    pub lower: [f64; 2],
    pub upper: [f64; 2],
    pub num_cells: [u32; 2],
    pub num_eqn: u32,
    pub num_aux: u32,
    pub capacity_index: Option<u32>,
    pub t0: f64,
    pub output: OutputStyle,
    pub controls: OutputControls,
    pub stepping: TimeStepping,
    pub scheme: NumericalScheme,
    pub restart: Restart,
    pub checkpoint: CheckpointStyle,
}

pub(super) fn claw(f: &mut DataFile) -> SetrunResult<ClawParts> {
    let num_dim: u32 = f.value("num_dim")?;
    if num_dim != 2 {
        return Err(f.error(format!("只支持二维, num_dim = {num_dim}")));
    }
    let lower = f.array("lower")?;
    let upper = f.array("upper")?;
    let num_cells = f.array("num_cells")?;
    let num_eqn: u32 = f.value("num_eqn")?;
    let num_aux: u32 = f.value("num_aux")?;
    let capacity_index = match f.value::<u32>("capacity_index")? {
        0 => None,
        i => Some(i - 1),
    };
    let t0 = f.value("t0")?;

    let output = match f.value::<u8>("output_style")? {
        1 => OutputStyle::EquallySpaced {
            num_output_times: f.value("num_output_times")?,
            t_final: f.value("tfinal")?,
            output_t0: f.value("output_t0")?,
        },
        2 => {
            let n = count(f, "num_output_times")?;
            let times: Vec<f64> = f.values("output_times")?;
            if times.len() != n {
                return Err(f.error(format!("output_times 期望 {} 个, 实际 {}", n, times.len())));
            }
            OutputStyle::Times { times }
        }
        3 => OutputStyle::StepInterval {
            step_interval: f.value("output_step_interval")?,
            total_steps: f.value("total_steps")?,
            output_t0: f.value("output_t0")?,
        },
        other => return Err(f.error(format!("未知的 output_style {other}"))),
    };

    let format = coded(f, "output_format", OutputFormat::from_code)?;
    let q_components = ComponentMask::from_flags(f.values("output_q_components")?);
    let aux_components = ComponentMask::from_flags(f.values("output_aux_components")?);
    let aux_only_once = f.value("output_aux_onlyonce")?;

    let dt_initial = f.value("dt_initial")?;
    let dt_max = f.value("dt_max")?;
    let cfl_max = f.value("cfl_max")?;
    let cfl_desired = f.value("cfl_desired")?;
    let steps_max = f.value("steps_max")?;
    let dt_variable = f.value("dt_variable")?;
    let stepping = TimeStepping {
        dt_variable,
        dt_initial,
        dt_max,
        cfl_desired,
        cfl_max,
        steps_max,
    };

    let order = coded(f, "order", Order::from_code)?;
    let transverse_waves = coded(f, "transverse_waves", TransverseWaves::from_code)?;
    let dimensional_split = coded(f, "dimensional_split", DimensionalSplit::from_code)?;
    let verbosity = f.value("verbosity")?;
    let source_split = coded(f, "source_split", SourceSplit::from_code)?;
    let num_waves = f.value("num_waves")?;
    let limiters = coded_list(f, "limiter", Limiter::from_code)?;
    let use_fwaves = f.value("use_fwaves")?;
    let num_ghost = f.value("num_ghost")?;
    let lower_bc = coded_list(f, "bc_lower", BoundaryCondition::from_code)?;
    let upper_bc = coded_list(f, "bc_upper", BoundaryCondition::from_code)?;
    let (Ok(lower_bc), Ok(upper_bc)) = (
        <[BoundaryCondition; 2]>::try_from(lower_bc),
        <[BoundaryCondition; 2]>::try_from(upper_bc),
    ) else {
        return Err(f.error("bc_lower / bc_upper 各需要 2 个值"));
    };

    let restart = if f.value::<bool>("restart")? {
        Restart::FromCheckpoint {
            file: f.value("restart_file")?,
        }
    } else {
        f.value::<String>("restart_file")?;
        Restart::Fresh
    };

    let checkpoint = match f.value::<u8>("checkpt_style")? {
        0 => CheckpointStyle::None,
        1 => CheckpointStyle::FinalTime,
        2 => {
            let n = count(f, "num_checkpt_times")?;
            let times: Vec<f64> = f.values("checkpt_times")?;
            if times.len() != n {
                return Err(f.error(format!("checkpt_times 期望 {} 个, 实际 {}", n, times.len())));
            }
            CheckpointStyle::Times { times }
        }
        3 => CheckpointStyle::StepInterval {
            interval: f.value("checkpt_interval")?,
        },
        other => return Err(f.error(format!("未知的 checkpt_style {other}"))),
    };
    f.finish()?;

    Ok(ClawParts {
        lower,
        upper,
        num_cells,
        num_eqn,
        num_aux,
        capacity_index,
        t0,
        output,
        controls: OutputControls {
            format,
            q_components,
            aux_components,
            aux_only_once,
            verbosity,
        },
        stepping,
        scheme: NumericalScheme {
            order,
            transverse_waves,
            dimensional_split,
            num_waves,
            limiters,
            use_fwaves,
            source_split,
            num_ghost,
            boundaries: BoundaryConditions {
                lower: lower_bc,
                upper: upper_bc,
            },
        },
        restart,
        checkpoint,
    })
}

/// `amr.data` 的内容
#[derive(Debug, Clone)]
pub(super) struct AmrParts {
    pub max_levels: u32,
    pub ratios: RefinementRatios,
    pub aux_types: Vec<AuxType>,
    pub trigger: RefinementTrigger,
    pub regrid: RegridPolicy,
    pub diagnostics: AmrDiagnostics,
}

pub(super) fn amr(f: &mut DataFile) -> SetrunResult<AmrParts> {
    let max_levels = f.value("amr_levels_max")?;
    let ratios = RefinementRatios {
        x: f.values("refinement_ratios_x")?,
        y: f.values("refinement_ratios_y")?,
        t: f.values("refinement_ratios_t")?,
    };
    let aux_types = f
        .values::<String>("aux_type")?
        .iter()
        .map(|name| name.parse::<AuxType>().map_err(|e| f.error(e.to_string())))
        .collect::<SetrunResult<Vec<_>>>()?;

    let richardson: bool = f.value("flag_richardson")?;
    let tolerance: f64 = f.value("flag_richardson_tol")?;
    let flag2refine: bool = f.value("flag2refine")?;
    let trigger = match (richardson, flag2refine) {
        (true, false) => RefinementTrigger::Richardson { tolerance },
        (false, true) => RefinementTrigger::FlagToRefine,
        _ => return Err(f.error("flag_richardson 与 flag2refine 必须恰好一个为 T")),
    };

    let regrid = RegridPolicy {
        regrid_interval: f.value("regrid_interval")?,
        buffer_width: f.value("regrid_buffer_width")?,
        clustering_cutoff: f.value("clustering_cutoff")?,
        verbosity: f.value("verbosity_regrid")?,
    };

    let mut flags = [false; 10];
    for (slot, (name, _)) in flags.iter_mut().zip(AmrDiagnostics::default().flags()) {
        *slot = f.value(name)?;
    }
    f.finish()?;

    Ok(AmrParts {
        max_levels,
        ratios,
        aux_types,
        trigger,
        regrid,
        diagnostics: AmrDiagnostics::from_flags(flags),
    })
}

pub(super) fn geoclaw(f: &mut DataFile) -> SetrunResult<(CoordinateSystem, GeoPhysics)> {
    let gravity = f.value("gravity")?;
    let coordinate_system = coded(f, "coordinate_system", CoordinateSystem::from_code)?;
    let earth_radius = f.value("earth_radius")?;
    let coriolis_forcing = f.value("coriolis_forcing")?;
    let sea_level = f.value("sea_level")?;
    let friction_forcing: bool = f.value("friction_forcing")?;
    let coefficient = f.value("manning_coefficient")?;
    let depth = f.value("friction_depth")?;
    let dry_tolerance = f.value("dry_tolerance")?;
    f.finish()?;

    let friction = if friction_forcing {
        Friction::Manning { coefficient, depth }
    } else {
        Friction::Off
    };
    Ok((
        coordinate_system,
        GeoPhysics {
            gravity,
            earth_radius,
            coriolis_forcing,
            sea_level,
            dry_tolerance,
            friction,
        },
    ))
}

pub(super) fn refinement(f: &mut DataFile) -> SetrunResult<RefinementData> {
    let data = RefinementData {
        wave_tolerance: f.value("wave_tolerance")?,
        deep_depth: f.value("deep_depth")?,
        max_level_deep: f.value("max_level_deep")?,
        variable_dt_refinement_ratios: f.value("variable_dt_refinement_ratios")?,
    };
    f.finish()?;
    Ok(data)
}

pub(super) fn regions(f: &mut DataFile) -> SetrunResult<Vec<Region>> {
    let n = count(f, "num_regions")?;
    let mut regions = Vec::with_capacity(n.min(f.remaining()));
    for _ in 0..n {
        let row = f.row(8)?;
        let entry: RegionRow = (
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
            row.get(6)?,
            row.get(7)?,
        );
        regions.push(Region::from(entry));
    }
    f.finish()?;
    Ok(regions)
}

pub(super) fn gauges(f: &mut DataFile) -> SetrunResult<Vec<Gauge>> {
    let n = count(f, "num_gauges")?;
    let mut gauges = Vec::with_capacity(n.min(f.remaining()));
    for _ in 0..n {
        let row = f.row(6)?;
        let entry: GaugeRow = (
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        );
        gauges.push(Gauge::from(entry));
    }
    f.finish()?;
    Ok(gauges)
}

pub(super) fn topo(f: &mut DataFile) -> SetrunResult<Vec<TopoSource>> {
    let n = count(f, "num_topo_files")?;
    let mut topo = Vec::with_capacity(n.min(f.remaining()));
    for _ in 0..n {
        let path = path_row(f)?;
        let row = f.row(5)?;
        topo.push(TopoSource {
            topo_type: row.get(0)?,
            min_level: row.get(1)?,
            max_level: row.get(2)?,
            t_start: row.get(3)?,
            t_end: row.get(4)?,
            path,
        });
    }
    f.finish()?;
    Ok(topo)
}

pub(super) fn dtopo(f: &mut DataFile) -> SetrunResult<(Vec<DtopoSource>, f64)> {
    let n = count(f, "num_dtopo_files")?;
    let mut dtopo = Vec::with_capacity(n.min(f.remaining()));
    for _ in 0..n {
        let path = path_row(f)?;
        let row = f.row(3)?;
        dtopo.push(DtopoSource {
            dtopo_type: row.get(0)?,
            min_level: row.get(1)?,
            max_level: row.get(2)?,
            path,
        });
    }
    let dt_max = f.value("dt_max_dtopo")?;
    f.finish()?;
    Ok((dtopo, dt_max))
}

pub(super) fn qinit(f: &mut DataFile) -> SetrunResult<Option<PerturbationSource>> {
    let code: i64 = f.value("qinit_type")?;
    let source = if code == 0 {
        None
    } else {
        let kind = PerturbationKind::from_code(code).map_err(|e| f.error(e.to_string()))?;
        let path = path_row(f)?;
        let row = f.row(2)?;
        Some(PerturbationSource {
            kind,
            min_level: row.get(0)?,
            max_level: row.get(1)?,
            path,
        })
    };
    f.finish()?;
    Ok(source)
}

pub(super) fn fixed_grids(f: &mut DataFile) -> SetrunResult<Vec<FixedGrid>> {
    let n = count(f, "num_fixed_grids")?;
    let mut grids = Vec::with_capacity(n.min(f.remaining()));
    for _ in 0..n {
        let row = f.row(11)?;
        grids.push(FixedGrid {
            t_start: row.get(0)?,
            t_end: row.get(1)?,
            num_output: row.get(2)?,
            x_lo: row.get(3)?,
            x_hi: row.get(4)?,
            y_lo: row.get(5)?,
            y_hi: row.get(6)?,
            nx_points: row.get(7)?,
            ny_points: row.get(8)?,
            arrival_times: row.get(9)?,
            surface_max: row.get(10)?,
        });
    }
    f.finish()?;
    Ok(grids)
}

pub(super) fn fgmax(f: &mut DataFile) -> SetrunResult<(u32, Vec<FgmaxSource>)> {
    let num_fgmax_val = f.value("num_fgmax_val")?;
    let n = count(f, "num_fgmax_grids")?;
    let mut fgmax = Vec::with_capacity(n.min(f.remaining()));
    for _ in 0..n {
        let path = path_row(f)?;
        let row = f.row(2)?;
        fgmax.push(FgmaxSource {
            min_level: row.get(0)?,
            max_level: row.get(1)?,
            path,
        });
    }
    f.finish()?;
    Ok((num_fgmax_val, fgmax))
}
