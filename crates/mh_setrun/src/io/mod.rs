// crates/mh_setrun/src/io/mod.rs

//! 求解器 `.data` 文件的写出与读回
//!
//! 每个子模型一个文件。读回时重新走一遍全部构建器，
//! 因此读回的配置同样是经过验证的。
//!
//! # 示例
//!
//! ```no_run
//! use mh_setrun::{scenario, RunConfig};
//!
//! let config = scenario::lake_3088()?;
//! let written = config.write_dir("_output".as_ref())?;
//! assert_eq!(written.len(), 11);
//! let back = RunConfig::read_dir("_output".as_ref())?;
//! assert_eq!(back, config);
//! # Ok::<(), mh_setrun::SetrunError>(())
//! ```

mod data;
mod emit;
mod parse;

pub use data::{format_real, DataFile, DataLine, DataValue, DataWriter, FromToken};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::amr::AmrHierarchy;
use crate::config::RunConfig;
use crate::domain::{Domain, EquationSystem};
use crate::error::{SetrunError, SetrunResult};
use crate::schedule::TimeSchedule;
use crate::scheme::DomainScheme;

/// 文件名
pub mod names {
    /// 计算域、格式与时间计划
    pub const CLAW: &str = "claw.data";
    /// AMR 层级
    pub const AMR: &str = "amr.data";
    /// 地球物理参数
    pub const GEOCLAW: &str = "geoclaw.data";
    /// 按水深的加密控制
    pub const REFINEMENT: &str = "refinement.data";
    /// 加密区域
    pub const REGIONS: &str = "regions.data";
    /// 测站
    pub const GAUGES: &str = "gauges.data";
    /// 地形文件
    pub const TOPO: &str = "topo.data";
    /// 动态地形文件
    pub const DTOPO: &str = "dtopo.data";
    /// 初始扰动
    pub const QINIT: &str = "qinit.data";
    /// 固定输出网格
    pub const FIXED_GRIDS: &str = "fixed_grids.data";
    /// fgmax
    pub const FGMAX: &str = "fgmax.data";

    /// 全部文件，按写出顺序
    pub const ALL: [&str; 11] = [
        CLAW, AMR, GEOCLAW, REFINEMENT, REGIONS, GAUGES, TOPO, DTOPO, QINIT, FIXED_GRIDS, FGMAX,
    ];
}

impl RunConfig {
    /// 生成全部文件内容 `(文件名, 内容)`
    pub fn render(&self) -> Vec<(&'static str, String)> {
        vec![
            (names::CLAW, emit::claw(self)),
            (names::AMR, emit::amr(self)),
            (names::GEOCLAW, emit::geoclaw(self)),
            (names::REFINEMENT, emit::refinement(self)),
            (names::REGIONS, emit::regions(self)),
            (names::GAUGES, emit::gauges(self)),
            (names::TOPO, emit::topo(self)),
            (names::DTOPO, emit::dtopo(self)),
            (names::QINIT, emit::qinit(self)),
            (names::FIXED_GRIDS, emit::fixed_grids(self)),
            (names::FGMAX, emit::fgmax(self)),
        ]
    }

    /// 写出到目录（不存在时创建），返回写出的文件路径
    pub fn write_dir(&self, dir: &Path) -> SetrunResult<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|source| SetrunError::Serialization {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(names::ALL.len());
        for (name, content) in self.render() {
            let path = dir.join(name);
            fs::write(&path, content).map_err(|source| SetrunError::Serialization {
                path: path.clone(),
                source,
            })?;
            info!("写出 {}", path.display());
            written.push(path);
        }
        Ok(written)
    }

    /// 从目录读回并重新验证
    pub fn read_dir(dir: &Path) -> SetrunResult<RunConfig> {
        let open = |name: &str| DataFile::open(&dir.join(name));

        let amr = parse::amr(&mut open(names::AMR)?)?;
        let (coordinate_system, geo) = parse::geoclaw(&mut open(names::GEOCLAW)?)?;
        let claw = parse::claw(&mut open(names::CLAW)?)?;
        debug!("读回 {}: {} 层, 坐标系 {}", dir.display(), amr.max_levels, coordinate_system);

        let domain = Domain::new(coordinate_system, claw.lower, claw.upper, claw.num_cells)?;
        let equations = EquationSystem {
            num_eqn: claw.num_eqn,
            num_aux: claw.num_aux,
            capacity_index: claw.capacity_index,
            aux_types: amr.aux_types,
        };
        let domain_scheme = DomainScheme::new(domain, equations, claw.scheme)?;
        let schedule = TimeSchedule::builder(claw.t0)
            .with_output(claw.output)
            .with_checkpoint(claw.checkpoint)
            .with_stepping(claw.stepping)
            .with_restart(claw.restart)
            .with_controls(claw.controls)
            .build(&domain_scheme)?;
        let hierarchy = AmrHierarchy::new(amr.max_levels, amr.ratios, amr.trigger, amr.regrid, amr.diagnostics)?;

        let refinement = parse::refinement(&mut open(names::REFINEMENT)?)?;
        let mut builder = RunConfig::builder(domain_scheme, schedule, hierarchy)
            .with_geo(geo)
            .with_refinement(refinement);

        builder.add_regions(parse::regions(&mut open(names::REGIONS)?)?)?;
        builder.add_gauges(parse::gauges(&mut open(names::GAUGES)?)?)?;
        for topo in parse::topo(&mut open(names::TOPO)?)? {
            builder.add_topo(topo)?;
        }
        let (dtopo, dt_max_dtopo) = parse::dtopo(&mut open(names::DTOPO)?)?;
        for d in dtopo {
            builder.add_dtopo(d)?;
        }
        builder.set_dt_max_dtopo(dt_max_dtopo)?;
        if let Some(q) = parse::qinit(&mut open(names::QINIT)?)? {
            builder.add_perturbation(q)?;
        }
        for grid in parse::fixed_grids(&mut open(names::FIXED_GRIDS)?)? {
            builder.add_fixed_grid(grid)?;
        }
        let (num_fgmax_val, fgmax) = parse::fgmax(&mut open(names::FGMAX)?)?;
        builder.set_num_fgmax_val(num_fgmax_val)?;
        for f in fgmax {
            builder.add_fgmax(f)?;
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario;

    #[test]
    fn test_render_all_files() {
        let config = scenario::lake_3088().unwrap();
        let files = config.render();
        let rendered: Vec<&str> = files.iter().map(|(name, _)| *name).collect();
        assert_eq!(rendered, names::ALL.to_vec());
    }

    #[test]
    fn test_claw_data_fields() {
        let config = scenario::lake_3088().unwrap();
        let claw = emit::claw(&config);
        assert!(claw.contains("93.0 28.0            =: lower\n"));
        assert!(claw.contains("255 222              =: num_cells\n"));
        assert!(claw.contains("2                    =: capacity_index\n"));
        assert!(claw.contains("4 4 4                =: limiter\n"));
        assert!(claw.contains("183600.0             =: checkpt_times\n"));
    }

    #[test]
    fn test_region_and_gauge_rows() {
        let config = scenario::lake_3088().unwrap();
        let regions = emit::regions(&config);
        assert!(regions.contains("13                   =: num_regions\n"));
        assert!(regions.contains("\n5 5 0.0 10000000000.0 94.84 94.96 29.54 29.64\n"));

        let gauges = emit::gauges(&config);
        assert!(gauges.contains("\n0 94.092882 29.203368 0.0 226800.0 660.0\n"));
    }

    #[test]
    fn test_parse_claw_round_trip() {
        let config = scenario::lake_3088().unwrap();
        let mut file = DataFile::parse(names::CLAW, &emit::claw(&config)).unwrap();
        let parts = parse::claw(&mut file).unwrap();
        assert_eq!(parts.capacity_index, Some(1));
        assert_eq!(&parts.scheme, config.domain_scheme().scheme());
        assert_eq!(&parts.checkpoint, config.schedule().checkpoint());
    }
}
