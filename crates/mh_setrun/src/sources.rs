// crates/mh_setrun/src/sources.rs

//! 外部文件来源：地形、动态地形、初始扰动、固定网格与 fgmax
//!
//! 路径对配置层是不透明的：只检查非空，不检查文件是否存在或格式是否正确。
//! 每个来源都带有层级范围，汇总阶段统一对照 `[1, max_levels]` 复核。

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::amr::check_level_range;
use crate::codes::PerturbationKind;
use crate::domain::Domain;
use crate::error::{ConfigError, ConfigResult};
use crate::validation::{check_count, check_ordered, check_path, check_positive};

/// 带层级范围的来源
pub trait LevelScoped {
    /// 来源类别，用作错误键的前缀
    const KIND: &'static str;

    /// `(min_level, max_level)`
    fn level_range(&self) -> (u32, u32);

    /// 检查层级范围是否在 `[1, max_levels]` 内
    fn check_levels(&self, max_levels: u32) -> ConfigResult<()> {
        let (min_level, max_level) = self.level_range();
        check_level_range("levels", min_level, max_level, max_levels)
    }
}

/// 地形文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopoSource {
    /// 文件格式类型（1、2、3）
    pub topo_type: u8,
    /// 最低层级
    pub min_level: u32,
    /// 最高层级
    pub max_level: u32,
    /// 起始时间
    pub t_start: f64,
    /// 结束时间
    pub t_end: f64,
    /// 文件路径
    pub path: PathBuf,
}

impl TopoSource {
    fn validate(&self, max_levels: u32) -> ConfigResult<()> {
        check_topo_type("topo_type", self.topo_type)?;
        self.check_levels(max_levels)?;
        check_ordered("t", self.t_start, self.t_end)?;
        check_path("path", &self.path)
    }
}

impl LevelScoped for TopoSource {
    const KIND: &'static str = "topo";

    fn level_range(&self) -> (u32, u32) {
        (self.min_level, self.max_level)
    }
}

/// 动态地形（dtopo）文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DtopoSource {
    /// 文件格式类型（1、2、3）
    pub dtopo_type: u8,
    /// 最低层级
    pub min_level: u32,
    /// 最高层级
    pub max_level: u32,
    /// 文件路径
    pub path: PathBuf,
}

impl DtopoSource {
    fn validate(&self, max_levels: u32) -> ConfigResult<()> {
        check_topo_type("dtopo_type", self.dtopo_type)?;
        self.check_levels(max_levels)?;
        check_path("path", &self.path)
    }
}

impl LevelScoped for DtopoSource {
    const KIND: &'static str = "dtopo";

    fn level_range(&self) -> (u32, u32) {
        (self.min_level, self.max_level)
    }
}

/// 初始扰动（qinit）文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerturbationSource {
    /// 扰动的物理量
    pub kind: PerturbationKind,
    /// 最低层级
    pub min_level: u32,
    /// 最高层级
    pub max_level: u32,
    /// 文件路径
    pub path: PathBuf,
}

impl LevelScoped for PerturbationSource {
    const KIND: &'static str = "qinit";

    fn level_range(&self) -> (u32, u32) {
        (self.min_level, self.max_level)
    }
}

/// fgmax 点集文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FgmaxSource {
    /// 最低层级
    pub min_level: u32,
    /// 最高层级
    pub max_level: u32,
    /// 文件路径
    pub path: PathBuf,
}

impl LevelScoped for FgmaxSource {
    const KIND: &'static str = "fgmax";

    fn level_range(&self) -> (u32, u32) {
        (self.min_level, self.max_level)
    }
}

/// 固定输出网格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedGrid {
    /// 起始时间
    pub t_start: f64,
    /// 结束时间
    pub t_end: f64,
    /// 输出次数
    pub num_output: u32,
    /// 西边界
    pub x_lo: f64,
    /// 东边界
    pub x_hi: f64,
    /// 南边界
    pub y_lo: f64,
    /// 北边界
    pub y_hi: f64,
    /// x 方向点数
    pub nx_points: u32,
    /// y 方向点数
    pub ny_points: u32,
    /// 输出到达时间
    #[serde(default)]
    pub arrival_times: bool,
    /// 输出最大水面
    #[serde(default)]
    pub surface_max: bool,
}

impl FixedGrid {
    fn validate(&self, domain: &Domain) -> ConfigResult<()> {
        check_ordered("t", self.t_start, self.t_end)?;
        check_count("num_output", self.num_output as u64)?;
        check_ordered("x", self.x_lo, self.x_hi)?;
        check_ordered("y", self.y_lo, self.y_hi)?;
        domain.check_contains("lower", self.x_lo, self.y_lo)?;
        domain.check_contains("upper", self.x_hi, self.y_hi)?;
        check_count("nx_points", self.nx_points as u64)?;
        check_count("ny_points", self.ny_points as u64)
    }
}

fn check_topo_type(key: &str, value: u8) -> ConfigResult<()> {
    if (1..=3).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, value, "必须为 1、2 或 3"))
    }
}

/// fgmax 每点记录的量的个数，求解器只接受 1、2、5
pub const FGMAX_VAL_CHOICES: [u32; 3] = [1, 2, 5];

/// 全部外部来源
///
/// 每个 `add_*` 在插入时验证该条目，出错时返回带 `kind[i]` 前缀的键。
#[derive(Debug, Clone, PartialEq)]
pub struct Sources {
    topo: Vec<TopoSource>,
    dtopo: Vec<DtopoSource>,
    dt_max_dtopo: f64,
    qinit: Vec<PerturbationSource>,
    fixed_grids: Vec<FixedGrid>,
    fgmax: Vec<FgmaxSource>,
    num_fgmax_val: u32,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            topo: Vec::new(),
            dtopo: Vec::new(),
            dt_max_dtopo: 1e99,
            qinit: Vec::new(),
            fixed_grids: Vec::new(),
            fgmax: Vec::new(),
            num_fgmax_val: 1,
        }
    }
}

impl Sources {
    /// 添加地形文件
    pub fn add_topo(&mut self, source: TopoSource, max_levels: u32) -> ConfigResult<()> {
        let key = format!("topo[{}]", self.topo.len());
        source.validate(max_levels).map_err(|e| e.within(&key))?;
        self.topo.push(source);
        Ok(())
    }

    /// 添加动态地形文件，最多一个
    ///
    /// 多余的条目被拒绝而不是截断。
    pub fn add_dtopo(&mut self, source: DtopoSource, max_levels: u32) -> ConfigResult<()> {
        let key = format!("dtopo[{}]", self.dtopo.len());
        if !self.dtopo.is_empty() {
            return Err(ConfigError::invalid(
                key,
                source.path.display(),
                "求解器目前只支持一个动态地形文件",
            ));
        }
        source.validate(max_levels).map_err(|e| e.within(&key))?;
        self.dtopo.push(source);
        Ok(())
    }

    /// 添加初始扰动文件，最多一个
    pub fn add_perturbation(&mut self, source: PerturbationSource, max_levels: u32) -> ConfigResult<()> {
        let key = format!("qinit[{}]", self.qinit.len());
        if !self.qinit.is_empty() {
            return Err(ConfigError::invalid(
                key,
                source.path.display(),
                "求解器目前只支持一个初始扰动文件",
            ));
        }
        source
            .check_levels(max_levels)
            .and_then(|_| check_path("path", &source.path))
            .map_err(|e| e.within(&key))?;
        self.qinit.push(source);
        Ok(())
    }

    /// 添加固定输出网格
    pub fn add_fixed_grid(&mut self, grid: FixedGrid, domain: &Domain) -> ConfigResult<()> {
        let key = format!("fixed_grids[{}]", self.fixed_grids.len());
        grid.validate(domain).map_err(|e| e.within(&key))?;
        self.fixed_grids.push(grid);
        Ok(())
    }

    /// 添加 fgmax 点集文件
    pub fn add_fgmax(&mut self, source: FgmaxSource, max_levels: u32) -> ConfigResult<()> {
        let key = format!("fgmax[{}]", self.fgmax.len());
        source
            .check_levels(max_levels)
            .and_then(|_| check_path("path", &source.path))
            .map_err(|e| e.within(&key))?;
        self.fgmax.push(source);
        Ok(())
    }

    /// 设置动态地形的最大时间步
    pub fn set_dt_max_dtopo(&mut self, dt: f64) -> ConfigResult<()> {
        check_positive("dtopo.dt_max", dt)?;
        self.dt_max_dtopo = dt;
        Ok(())
    }

    /// 设置 fgmax 每点记录的量的个数
    pub fn set_num_fgmax_val(&mut self, n: u32) -> ConfigResult<()> {
        if !FGMAX_VAL_CHOICES.contains(&n) {
            return Err(ConfigError::invalid(
                "fgmax.num_fgmax_val",
                n,
                format!("必须为 {FGMAX_VAL_CHOICES:?} 之一"),
            ));
        }
        self.num_fgmax_val = n;
        Ok(())
    }

    /// 汇总阶段复核：所有来源的层级范围都在 `[1, max_levels]` 内，动态地形与初始扰动至多各一个
    pub fn check_against(&self, max_levels: u32) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        collect_level_errors(&self.topo, max_levels, &mut errors);
        collect_level_errors(&self.dtopo, max_levels, &mut errors);
        collect_level_errors(&self.qinit, max_levels, &mut errors);
        collect_level_errors(&self.fgmax, max_levels, &mut errors);
        for (kind, len) in [("dtopo", self.dtopo.len()), ("qinit", self.qinit.len())] {
            if len > 1 {
                errors.push(ConfigError::invalid(kind, len, "至多一个"));
            }
        }
        errors
    }

    /// 地形文件
    pub fn topo(&self) -> &[TopoSource] {
        &self.topo
    }

    /// 动态地形文件（至多一个）
    pub fn dtopo(&self) -> Option<&DtopoSource> {
        self.dtopo.first()
    }

    /// 动态地形的最大时间步
    pub fn dt_max_dtopo(&self) -> f64 {
        self.dt_max_dtopo
    }

    /// 初始扰动（至多一个）
    pub fn perturbation(&self) -> Option<&PerturbationSource> {
        self.qinit.first()
    }

    /// 固定输出网格
    pub fn fixed_grids(&self) -> &[FixedGrid] {
        &self.fixed_grids
    }

    /// fgmax 点集文件
    pub fn fgmax(&self) -> &[FgmaxSource] {
        &self.fgmax
    }

    /// fgmax 每点记录的量的个数
    pub fn num_fgmax_val(&self) -> u32 {
        self.num_fgmax_val
    }
}

fn collect_level_errors<S: LevelScoped>(sources: &[S], max_levels: u32, errors: &mut Vec<ConfigError>) {
    for (i, source) in sources.iter().enumerate() {
        if let Err(e) = source.check_levels(max_levels) {
            errors.push(e.within(&format!("{}[{}]", S::KIND, i)));
        }
    }
}
