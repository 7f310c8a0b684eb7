// crates/mh_setrun/src/amr.rs

//! AMR 层级结构
//!
//! `max_levels` 层网格，第 2..=max_levels 层各有 x / y / t 三个加密比；
//! 加密触发方式二选一（Richardson 误差估计或 flag2refine 特征标记）。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Domain;
use crate::error::{ConfigError, ConfigResult, SetrunResult};
use crate::region::LevelBounds;
use crate::validation::{check_positive, ValidationReport, ValidationWarning};

/// 各层加密比（长度均为 `max_levels - 1`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementRatios {
    /// x 方向
    pub x: Vec<u32>,
    /// y 方向
    pub y: Vec<u32>,
    /// 时间方向
    pub t: Vec<u32>,
}

impl RefinementRatios {
    /// 三个方向使用相同的加密比
    pub fn uniform(ratios: Vec<u32>) -> Self {
        Self {
            x: ratios.clone(),
            y: ratios.clone(),
            t: ratios,
        }
    }

    fn axes(&self) -> [(&'static str, &[u32]); 3] {
        [("x", self.x.as_slice()), ("y", self.y.as_slice()), ("t", self.t.as_slice())]
    }
}

/// 加密触发方式（恰好一种生效）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum RefinementTrigger {
    /// Richardson 外推误差估计
    Richardson {
        /// 误差容差
        tolerance: f64,
    },
    /// flag2refine 特征标记（GeoClaw 中按波高容差标记）
    FlagToRefine,
}

/// 重划分策略
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegridPolicy {
    /// 第 L 层每走多少步对 L+1 层重划分一次
    pub regrid_interval: u32,
    /// 标记点周围缓冲区宽度 [单元]
    pub buffer_width: u32,
    /// 聚类截断：标记点数 / 加密单元数
    pub clustering_cutoff: f64,
    /// 打印重划分信息的最高层级
    #[serde(default)]
    pub verbosity: u32,
}

impl Default for RegridPolicy {
    fn default() -> Self {
        Self {
            regrid_interval: 2,
            buffer_width: 2,
            clustering_cutoff: 0.7,
            verbosity: 0,
        }
    }
}

/// 开发者调试打印开关
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AmrDiagnostics {
    /// 打印域标记
    pub dprint: bool,
    /// 打印误差估计标记
    pub eprint: bool,
    /// 更多误差估计标记
    pub edebug: bool,
    /// 网格二分/聚类
    pub gprint: bool,
    /// 正确嵌套输出
    pub nprint: bool,
    /// 标记点投影
    pub pprint: bool,
    /// 重划分汇总
    pub rprint: bool,
    /// 空间/内存输出
    pub sprint: bool,
    /// 每层时间步报告
    pub tprint: bool,
    /// update/upbnd 报告
    pub uprint: bool,
}

impl AmrDiagnostics {
    /// 写出顺序的 `(名称, 值)` 列表
    pub fn flags(&self) -> [(&'static str, bool); 10] {
        [
            ("dprint", self.dprint),
            ("eprint", self.eprint),
            ("edebug", self.edebug),
            ("gprint", self.gprint),
            ("nprint", self.nprint),
            ("pprint", self.pprint),
            ("rprint", self.rprint),
            ("sprint", self.sprint),
            ("tprint", self.tprint),
            ("uprint", self.uprint),
        ]
    }

    /// 按 [`flags`](Self::flags) 的顺序还原
    pub fn from_flags(flags: [bool; 10]) -> Self {
        let [dprint, eprint, edebug, gprint, nprint, pprint, rprint, sprint, tprint, uprint] = flags;
        Self {
            dprint,
            eprint,
            edebug,
            gprint,
            nprint,
            pprint,
            rprint,
            sprint,
            tprint,
            uprint,
        }
    }
}

/// AMR 层级结构（已验证）
#[derive(Debug, Clone, PartialEq)]
pub struct AmrHierarchy {
    max_levels: u32,
    ratios: RefinementRatios,
    trigger: RefinementTrigger,
    regrid: RegridPolicy,
    diagnostics: AmrDiagnostics,
}

impl AmrHierarchy {
    /// 验证并构建
    ///
    /// 三个加密比序列的长度都必须等于 `max_levels - 1`，且每项至少为 1。
    pub fn new(
        max_levels: u32,
        ratios: RefinementRatios,
        trigger: RefinementTrigger,
        regrid: RegridPolicy,
        diagnostics: AmrDiagnostics,
    ) -> SetrunResult<Self> {
        let mut report = ValidationReport::new();

        if max_levels == 0 {
            report.add_error(ConfigError::invalid("amr.max_levels", 0, "至少需要 1 层"));
        }
        let expected = max_levels.saturating_sub(1) as usize;
        for (axis, seq) in ratios.axes() {
            report.record(check_ratio_sequence(axis, seq, expected));
        }

        if let RefinementTrigger::Richardson { tolerance } = trigger {
            report.record(check_positive("amr.trigger.tolerance", tolerance));
        }
        if !(regrid.clustering_cutoff > 0.0 && regrid.clustering_cutoff <= 1.0) {
            report.add_error(ConfigError::invalid(
                "amr.regrid.clustering_cutoff",
                regrid.clustering_cutoff,
                "必须在 (0, 1] 内",
            ));
        }
        if regrid.verbosity > max_levels {
            report.add_error(ConfigError::invalid(
                "amr.regrid.verbosity",
                regrid.verbosity,
                format!("不能超过 max_levels ({max_levels})"),
            ));
        }
        report.finish()?;

        debug!(
            "AMR: {} 层, ratios_x={:?}, trigger={:?}",
            max_levels, ratios.x, trigger
        );
        Ok(Self {
            max_levels,
            ratios,
            trigger,
            regrid,
            diagnostics,
        })
    }

    /// 最大层数
    pub fn max_levels(&self) -> u32 {
        self.max_levels
    }

    /// 加密比
    pub fn ratios(&self) -> &RefinementRatios {
        &self.ratios
    }

    /// 加密触发方式
    pub fn trigger(&self) -> RefinementTrigger {
        self.trigger
    }

    /// 重划分策略
    pub fn regrid(&self) -> &RegridPolicy {
        &self.regrid
    }

    /// 调试打印开关
    pub fn diagnostics(&self) -> &AmrDiagnostics {
        &self.diagnostics
    }

    /// 全局层级范围 `[1, max_levels]`
    pub fn level_bounds(&self) -> LevelBounds {
        LevelBounds::full(self.max_levels)
    }

    /// 检查 `[min_level, max_level]` 是否落在 `[1, max_levels]` 内
    pub fn check_level_range(&self, key: &str, min_level: u32, max_level: u32) -> ConfigResult<()> {
        check_level_range(key, min_level, max_level, self.max_levels)
    }

    /// 第 `level` 层相对第 1 层的累计空间加密比 `(rx, ry)`
    pub fn cumulative_ratio(&self, level: u32) -> (u64, u64) {
        let n = level.clamp(1, self.max_levels) as usize - 1;
        let product = |seq: &[u32]| seq[..n].iter().map(|&r| r as u64).product::<u64>();
        (product(&self.ratios.x[..]), product(&self.ratios.y[..]))
    }

    /// 最细层的单元尺寸
    pub fn finest_cell_size(&self, domain: &Domain) -> (f64, f64) {
        let (dx, dy) = domain.cell_size();
        let (rx, ry) = self.cumulative_ratio(self.max_levels);
        (dx / rx as f64, dy / ry as f64)
    }

    /// 设计提示：缓冲区宽度应不小于重划分间隔
    pub fn warnings(&self) -> Vec<ValidationWarning> {
        if self.regrid.buffer_width < self.regrid.regrid_interval {
            vec![ValidationWarning::NarrowBuffer {
                buffer_width: self.regrid.buffer_width,
                regrid_interval: self.regrid.regrid_interval,
            }]
        } else {
            Vec::new()
        }
    }
}

fn check_ratio_sequence(axis: &str, seq: &[u32], expected: usize) -> ConfigResult<()> {
    let key = format!("amr.ratios.{axis}");
    if seq.len() != expected {
        return Err(ConfigError::LengthMismatch {
            key,
            expected,
            actual: seq.len(),
        });
    }
    if let Some(i) = seq.iter().position(|&r| r == 0) {
        return Err(ConfigError::invalid(format!("{key}[{i}]"), 0, "加密比必须 >= 1"));
    }
    Ok(())
}

/// 检查 `1 <= min_level <= max_level <= max_levels`
pub fn check_level_range(key: &str, min_level: u32, max_level: u32, max_levels: u32) -> ConfigResult<()> {
    if min_level >= 1 && min_level <= max_level && max_level <= max_levels {
        Ok(())
    } else {
        Err(ConfigError::LevelRange {
            key: key.to_string(),
            min_level,
            max_level,
            max_levels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CoordinateSystem;

    fn lake_amr() -> SetrunResult<AmrHierarchy> {
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

    #[test]
    fn test_lake_hierarchy() {
        let amr = lake_amr().unwrap();
        assert_eq!(amr.max_levels() - 1, amr.ratios().x.len() as u32);
        assert_eq!(amr.ratios().t.len(), 5);
        assert_eq!(amr.cumulative_ratio(1), (1, 1));
        assert_eq!(amr.cumulative_ratio(6), (64, 64));
        assert!(amr.warnings().is_empty());
    }

    #[test]
    fn test_finest_cell_size() {
        let amr = lake_amr().unwrap();
        let domain = Domain::new(CoordinateSystem::Cartesian, [0.0, 0.0], [64.0, 128.0], [1, 2]).unwrap();
        assert_eq!(amr.finest_cell_size(&domain), (1.0, 1.0));
    }

    #[test]
    fn test_wrong_ratio_length() {
        let mut ratios = RefinementRatios::uniform(vec![4, 2, 2, 2, 2]);
        ratios.y.pop();
        let err = AmrHierarchy::new(
            6,
            ratios,
            RefinementTrigger::FlagToRefine,
            RegridPolicy::default(),
            AmrDiagnostics::default(),
        )
        .unwrap_err();
        let report = err.report().unwrap();
        assert_eq!(report.error_count(), 1);
        assert!(matches!(
            report.errors[0],
            ConfigError::LengthMismatch { expected: 5, actual: 4, .. }
        ));
    }

    #[test]
    fn test_zero_ratio_rejected() {
        let err = AmrHierarchy::new(
            3,
            RefinementRatios::uniform(vec![2, 0]),
            RefinementTrigger::FlagToRefine,
            RegridPolicy::default(),
            AmrDiagnostics::default(),
        )
        .unwrap_err();
        // x、y、t 三个序列各报一次
        assert_eq!(err.report().unwrap().error_count(), 3);
    }

    #[test]
    fn test_single_level() {
        let amr = AmrHierarchy::new(
            1,
            RefinementRatios::uniform(vec![]),
            RefinementTrigger::Richardson { tolerance: 0.002 },
            RegridPolicy::default(),
            AmrDiagnostics::default(),
        )
        .unwrap();
        assert_eq!(amr.cumulative_ratio(1), (1, 1));
    }

    #[test]
    fn test_richardson_tolerance_positive() {
        let err = AmrHierarchy::new(
            2,
            RefinementRatios::uniform(vec![2]),
            RefinementTrigger::Richardson { tolerance: 0.0 },
            RegridPolicy::default(),
            AmrDiagnostics::default(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_narrow_buffer_warning() {
        let amr = AmrHierarchy::new(
            2,
            RefinementRatios::uniform(vec![2]),
            RefinementTrigger::FlagToRefine,
            RegridPolicy {
                regrid_interval: 4,
                buffer_width: 2,
                ..RegridPolicy::default()
            },
            AmrDiagnostics::default(),
        )
        .unwrap();
        assert_eq!(amr.warnings().len(), 1);
    }

    #[test]
    fn test_check_level_range() {
        assert!(check_level_range("r", 1, 6, 6).is_ok());
        assert!(check_level_range("r", 0, 3, 6).is_err());
        assert!(check_level_range("r", 4, 3, 6).is_err());
        assert!(check_level_range("r", 1, 7, 6).is_err());
    }

    #[test]
    fn test_diagnostics_flags_round_trip() {
        let d = AmrDiagnostics {
            gprint: true,
            uprint: true,
            ..AmrDiagnostics::default()
        };
        let flags = d.flags().map(|(_, v)| v);
        assert_eq!(AmrDiagnostics::from_flags(flags), d);
    }
}
