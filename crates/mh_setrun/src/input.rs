// crates/mh_setrun/src/input.rs

//! JSON 输入文档
//!
//! [`RunSpec`] 是运行配置的声明式描述，内容与内置算例相同。
//! 它也是枚举取值的解析边界：`"mc"` 与 `4` 在这里都归一化为 [`Limiter::Mc`](crate::codes::Limiter)，
//! 之后的验证与写出只看到封闭枚举。
//!
//! ```json
//! {
//!   "domain": { "coordinate_system": "latlong", "lower": [93.0, 28.0], "upper": [95.6, 30.0], "num_cells": [255, 222] },
//!   "equations": { "num_eqn": 3, "num_aux": 3, "capacity_index": 1, "aux_types": ["center", "capacity", "yleft"] },
//!   "scheme": { "order": 2, "transverse_waves": 2, "num_waves": 3, "limiters": ["mc", "mc", 4], "source_split": "godunov" },
//!   "time": { "output": { "style": "equally_spaced", "num_output_times": 2, "t_final": 226800.0 } },
//!   "amr": { "max_levels": 6, "ratios": [4, 2, 2, 2, 2], "trigger": { "method": "flag_to_refine" } },
//!   "regions": [[5, 5, 0.0, 1e10, 94.84, 94.96, 29.54, 29.64]],
//!   "gauges": [[0, 94.092882, 29.203368, 0.0, 226800.0, 660.0]]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::amr::{AmrDiagnostics, AmrHierarchy, RefinementRatios, RefinementTrigger, RegridPolicy};
use crate::codes::CoordinateSystem;
use crate::config::RunConfig;
use crate::domain::{Domain, EquationSystem};
use crate::env::Environment;
use crate::error::{SetrunError, SetrunResult};
use crate::gauge::Gauge;
use crate::geo::{GeoPhysics, RefinementData};
use crate::region::Region;
use crate::schedule::{CheckpointStyle, OutputControls, OutputStyle, Restart, TimeSchedule, TimeStepping};
use crate::scheme::{DomainScheme, NumericalScheme};
use crate::sources::{DtopoSource, FgmaxSource, FixedGrid, PerturbationSource, TopoSource};
use crate::validation::ValidationReport;

/// 计算域
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSpec {
    /// 坐标系
    pub coordinate_system: CoordinateSystem,
    /// `[xlower, ylower]`
    pub lower: [f64; 2],
    /// `[xupper, yupper]`
    pub upper: [f64; 2],
    /// `[nx, ny]`
    pub num_cells: [u32; 2],
}

/// 时间与输出计划
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSpec {
    /// 初始时间
    #[serde(default)]
    pub t0: f64,
    /// 输出方式
    pub output: OutputStyle,
    /// 检查点方式
    #[serde(default)]
    pub checkpoint: CheckpointStyle,
    /// 时间步长控制
    #[serde(default)]
    pub stepping: TimeStepping,
    /// 重启策略
    #[serde(default)]
    pub restart: Restart,
    /// 输出控制
    #[serde(default)]
    pub controls: OutputControls,
}

/// 加密比：三个方向共用一个序列，或分别给出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatioSpec {
    /// 三个方向相同
    Uniform(Vec<u32>),
    /// 分别给出 x / y / t
    PerAxis(RefinementRatios),
}

impl From<RatioSpec> for RefinementRatios {
    fn from(spec: RatioSpec) -> Self {
        match spec {
            RatioSpec::Uniform(ratios) => RefinementRatios::uniform(ratios),
            RatioSpec::PerAxis(ratios) => ratios,
        }
    }
}

/// AMR 层级
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmrSpec {
    /// 最大层数
    pub max_levels: u32,
    /// 加密比
    pub ratios: RatioSpec,
    /// 加密触发方式
    pub trigger: RefinementTrigger,
    /// 重划分策略
    #[serde(default)]
    pub regrid: RegridPolicy,
    /// 调试打印开关
    #[serde(default)]
    pub diagnostics: AmrDiagnostics,
}

/// 外部文件来源
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesSpec {
    /// 地形与动态地形的相对路径是否相对于 scratch 目录
    pub scratch_relative: bool,
    /// 地形文件
    pub topo: Vec<TopoSource>,
    /// 动态地形文件（至多一个）
    pub dtopo: Vec<DtopoSource>,
    /// 动态地形的最大时间步
    pub dt_max_dtopo: Option<f64>,
    /// 初始扰动文件（至多一个）
    pub qinit: Vec<PerturbationSource>,
    /// 固定输出网格
    pub fixed_grids: Vec<FixedGrid>,
    /// fgmax 点集文件
    pub fgmax: Vec<FgmaxSource>,
    /// fgmax 每点记录的量的个数
    pub num_fgmax_val: Option<u32>,
}

/// 运行配置输入文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    /// 计算域
    pub domain: DomainSpec,
    /// 方程组规模
    pub equations: EquationSystem,
    /// 数值格式
    pub scheme: NumericalScheme,
    /// 时间计划
    pub time: TimeSpec,
    /// AMR 层级
    pub amr: AmrSpec,
    /// 地球物理参数
    #[serde(default)]
    pub geo: GeoPhysics,
    /// 按水深的加密控制
    #[serde(default)]
    pub refinement: RefinementData,
    /// 加密区域（8 元行）
    #[serde(default)]
    pub regions: Vec<Region>,
    /// 测站（6 元行）
    #[serde(default)]
    pub gauges: Vec<Gauge>,
    /// 外部文件来源
    #[serde(default)]
    pub sources: SourcesSpec,
}

impl RunSpec {
    /// 从 JSON 字符串解析
    pub fn from_json_str(text: &str) -> SetrunResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// 从 JSON 文件读取
    pub fn from_file(path: &Path) -> SetrunResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| SetrunError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("读取输入文档 {}", path.display());
        Self::from_json_str(&text)
    }

    /// 序列化为 JSON
    pub fn to_json_string(&self) -> SetrunResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 由已验证的配置生成等价的输入文档
    pub fn from_config(config: &RunConfig) -> Self {
        let domain = config.domain();
        let schedule = config.schedule();
        let amr = config.amr();
        let sources = config.sources();
        Self {
            domain: DomainSpec {
                coordinate_system: domain.coordinate_system(),
                lower: domain.lower(),
                upper: domain.upper(),
                num_cells: domain.num_cells(),
            },
            equations: config.domain_scheme().equations().clone(),
            scheme: config.domain_scheme().scheme().clone(),
            time: TimeSpec {
                t0: schedule.t0(),
                output: schedule.output().clone(),
                checkpoint: schedule.checkpoint().clone(),
                stepping: schedule.stepping().clone(),
                restart: schedule.restart().clone(),
                controls: schedule.controls().clone(),
            },
            amr: AmrSpec {
                max_levels: amr.max_levels(),
                ratios: RatioSpec::PerAxis(amr.ratios().clone()),
                trigger: amr.trigger(),
                regrid: *amr.regrid(),
                diagnostics: *amr.diagnostics(),
            },
            geo: *config.geo(),
            refinement: *config.refinement(),
            regions: config.regions().as_slice().to_vec(),
            gauges: config.gauges().as_slice().to_vec(),
            sources: SourcesSpec {
                scratch_relative: false,
                topo: sources.topo().to_vec(),
                dtopo: sources.dtopo().into_iter().cloned().collect(),
                dt_max_dtopo: Some(sources.dt_max_dtopo()),
                qinit: sources.perturbation().into_iter().cloned().collect(),
                fixed_grids: sources.fixed_grids().to_vec(),
                fgmax: sources.fgmax().to_vec(),
                num_fgmax_val: Some(sources.num_fgmax_val()),
            },
        }
    }

    /// 装配并验证
    ///
    /// 计算域、时间计划与 AMR 层级依次构建，任一失败即返回；
    /// 区域、测站与外部来源的错误汇总到同一份报告。
    pub fn assemble(self, env: &Environment) -> SetrunResult<RunConfig> {
        let RunSpec {
            domain,
            equations,
            scheme,
            time,
            amr,
            geo,
            refinement,
            regions,
            gauges,
            sources,
        } = self;

        let domain = Domain::new(domain.coordinate_system, domain.lower, domain.upper, domain.num_cells)?;
        let domain_scheme = DomainScheme::new(domain, equations, scheme)?;
        let schedule = TimeSchedule::builder(time.t0)
            .with_output(time.output)
            .with_checkpoint(time.checkpoint)
            .with_stepping(time.stepping)
            .with_restart(time.restart)
            .with_controls(time.controls)
            .build(&domain_scheme)?;
        let hierarchy = AmrHierarchy::new(
            amr.max_levels,
            amr.ratios.into(),
            amr.trigger,
            amr.regrid,
            amr.diagnostics,
        )?;

        let mut builder = RunConfig::builder(domain_scheme, schedule, hierarchy)
            .with_geo(geo)
            .with_refinement(refinement);
        let mut report = ValidationReport::new();

        if let Err(r) = builder.add_regions(regions) {
            report.merge(r);
        }
        if let Err(r) = builder.add_gauges(gauges) {
            report.merge(r);
        }

        let locate = |path: std::path::PathBuf| {
            if sources.scratch_relative {
                env.in_scratch(&path)
            } else {
                path
            }
        };
        for mut topo in sources.topo {
            topo.path = locate(topo.path);
            report.record(builder.add_topo(topo));
        }
        for mut dtopo in sources.dtopo {
            dtopo.path = locate(dtopo.path);
            report.record(builder.add_dtopo(dtopo));
        }
        if let Some(dt) = sources.dt_max_dtopo {
            report.record(builder.set_dt_max_dtopo(dt));
        }
        for qinit in sources.qinit {
            report.record(builder.add_perturbation(qinit));
        }
        for grid in sources.fixed_grids {
            report.record(builder.add_fixed_grid(grid));
        }
        if let Some(n) = sources.num_fgmax_val {
            report.record(builder.set_num_fgmax_val(n));
        }
        for fgmax in sources.fgmax {
            report.record(builder.add_fgmax(fgmax));
        }

        if report.has_errors() {
            return Err(report.into());
        }
        builder.build()
    }
}
