// crates/mh_setrun/src/validation.rs

//! 验证报告与检查辅助函数
//!
//! 单个条目的检查是快速失败的（返回第一个 [`ConfigError`]），
//! 同一集合中互不相关的条目则汇总到一个 [`ValidationReport`]，
//! 避免反复"修改-重跑"。
//!
//! # 示例
//!
//! ```
//! use mh_setrun::validation::{check_positive, ValidationReport};
//!
//! let mut report = ValidationReport::new();
//! if let Err(e) = check_positive("dt_initial", -1.0) {
//!     report.add_error(e);
//! }
//! assert!(report.has_errors());
//! ```

use std::fmt;

use crate::error::{ConfigError, ConfigResult, SetrunError};

/// 验证报告
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// 错误列表
    pub errors: Vec<ConfigError>,
    /// 警告列表
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// 创建空的验证报告
    pub fn new() -> Self {
        Self::default()
    }

    /// 只含一条错误的报告
    pub fn from_error(error: ConfigError) -> Self {
        Self {
            errors: vec![error],
            warnings: Vec::new(),
        }
    }

    /// 添加错误
    pub fn add_error(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// 记录检查结果，失败时收集错误
    pub fn record<T>(&mut self, result: ConfigResult<T>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.add_error(e);
                None
            }
        }
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 是否有警告
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// 错误数量
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// 警告数量
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// 是否通过（无错误）
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// 合并另一个报告
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// 收尾：有错误则转换为 [`SetrunError::Configuration`]，否则返回警告
    pub fn finish(self) -> Result<Vec<ValidationWarning>, SetrunError> {
        if self.has_errors() {
            Err(SetrunError::Configuration(self))
        } else {
            Ok(self.warnings)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "验证报告:")?;
        writeln!(f, "  错误: {} 个", self.error_count())?;
        writeln!(f, "  警告: {} 个", self.warning_count())?;

        if self.has_errors() {
            writeln!(f, "\n错误详情:")?;
            for (i, err) in self.errors.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, err)?;
            }
        }

        if self.has_warnings() {
            writeln!(f, "\n警告详情:")?;
            for (i, warn) in self.warnings.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, warn)?;
            }
        }

        Ok(())
    }
}

/// 验证警告（不阻止配置生效）
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    /// 缓冲区宽度小于重划分间隔，加密特征可能在两次重划分之间逃出缓冲区
    NarrowBuffer {
        /// 缓冲区宽度 [单元]
        buffer_width: u32,
        /// 重划分间隔 [步]
        regrid_interval: u32,
    },
    /// 检查点时间晚于最终输出时间，求解器不会到达
    CheckpointAfterFinalTime {
        /// 检查点序号
        index: usize,
        /// 检查点时间
        time: f64,
        /// 最终时间
        t_final: f64,
    },
    /// 两个区域在时空上重叠但层级范围不相交
    ConflictingRegions {
        /// 第一个区域序号
        first: usize,
        /// 第二个区域序号
        second: usize,
    },
    /// 自定义警告
    Custom {
        /// 自定义消息
        message: String,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NarrowBuffer {
                buffer_width,
                regrid_interval,
            } => write!(
                f,
                "缓冲区宽度 {} 小于重划分间隔 {}，波可能逃出加密网格",
                buffer_width, regrid_interval
            ),
            Self::CheckpointAfterFinalTime { index, time, t_final } => write!(
                f,
                "检查点[{}] 时间 {} 晚于最终时间 {}，不会被写出",
                index, time, t_final
            ),
            Self::ConflictingRegions { first, second } => write!(
                f,
                "区域[{}] 与区域[{}] 重叠但层级范围不相交，重叠处取最高层级上限",
                first, second
            ),
            Self::Custom { message } => write!(f, "{}", message),
        }
    }
}

// ============================================================================
// 检查辅助函数
// ============================================================================

/// 检查值是否有限
pub fn check_finite(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, value, "必须为有限值"))
    }
}

/// 检查值严格为正
pub fn check_positive(key: &str, value: f64) -> ConfigResult<()> {
    check_finite(key, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, value, "必须为正"))
    }
}

/// 检查值非负
pub fn check_non_negative(key: &str, value: f64) -> ConfigResult<()> {
    check_finite(key, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, value, "不能为负"))
    }
}

/// 检查整数计数严格为正
pub fn check_count(key: &str, value: u64) -> ConfigResult<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, value, "必须大于 0"))
    }
}

/// 检查 `lo <= hi`
pub fn check_ordered(key: &str, lo: f64, hi: f64) -> ConfigResult<()> {
    check_finite(key, lo)?;
    check_finite(key, hi)?;
    if lo <= hi {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            key,
            format!("[{lo}, {hi}]"),
            "下界不能大于上界",
        ))
    }
}

/// 检查时间列表非空、非递减且不早于 `floor`
pub fn check_time_list(key: &str, times: &[f64], floor: f64) -> ConfigResult<()> {
    if times.is_empty() {
        return Err(ConfigError::invalid(key, "[]", "显式时间列表不能为空"));
    }
    for (i, &t) in times.iter().enumerate() {
        let entry = format!("{key}[{i}]");
        check_finite(&entry, t)?;
        if t < floor {
            return Err(ConfigError::invalid(entry, t, format!("早于初始时间 {floor}")));
        }
        if i > 0 && t < times[i - 1] {
            return Err(ConfigError::invalid(
                entry,
                t,
                format!("时间列表必须非递减（前一项为 {}）", times[i - 1]),
            ));
        }
    }
    Ok(())
}

/// 检查外部文件路径非空且不含换行等控制字符（`.data` 按行读取）
pub fn check_path(key: &str, path: &std::path::Path) -> ConfigResult<()> {
    let text = path.to_string_lossy();
    if text.is_empty() {
        Err(ConfigError::Missing(key.to_string()))
    } else if text.chars().any(char::is_control) {
        Err(ConfigError::invalid(key, text.escape_debug(), "路径不能包含控制字符"))
    } else {
        Ok(())
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
        assert!(report.is_valid());
    }

    #[test]
    fn test_validation_report_record() {
        let mut report = ValidationReport::new();
        assert_eq!(report.record(check_positive("a", 1.0)), Some(()));
        assert_eq!(report.record(check_positive("b", 0.0)), None);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors[0].key(), Some("b"));
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut report = ValidationReport::new();
        report.add_warning(ValidationWarning::NarrowBuffer {
            buffer_width: 2,
            regrid_interval: 3,
        });
        assert!(report.is_valid());
        let warnings = report.finish().unwrap();
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_finish_with_errors() {
        let mut report = ValidationReport::new();
        report.add_error(ConfigError::Missing("t0".into()));
        let err = report.finish().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_validation_report_merge() {
        let mut report1 = ValidationReport::from_error(ConfigError::Missing("a".into()));
        let report2 = ValidationReport::from_error(ConfigError::Missing("b".into()));
        report1.merge(report2);
        assert_eq!(report1.error_count(), 2);
    }

    #[test]
    fn test_check_time_list() {
        assert!(check_time_list("checkpoint.times", &[183600.0], 0.0).is_ok());
        assert!(check_time_list("checkpoint.times", &[0.0, 30.0, 30.0, 90.0], 0.0).is_ok());
        assert!(check_time_list("checkpoint.times", &[-5.0], 0.0).is_err());
        assert!(check_time_list("checkpoint.times", &[], 0.0).is_err());

        let err = check_time_list("output.times", &[0.0, 60.0, 30.0], 0.0).unwrap_err();
        assert_eq!(err.key(), Some("output.times[2]"));
    }

    #[test]
    fn test_check_ordered_rejects_nan() {
        assert!(check_ordered("t", 0.0, 1.0).is_ok());
        assert!(check_ordered("t", 1.0, 0.0).is_err());
        assert!(check_ordered("t", f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_check_path() {
        use std::path::Path;
        assert!(check_path("path", Path::new("o'brien.tt3")).is_ok());
        assert!(matches!(check_path("path", Path::new("")), Err(ConfigError::Missing(_))));
        assert!(check_path("path", Path::new("a\nb.tt3")).is_err());
        assert!(check_path("path", Path::new("a\rb.tt3")).is_err());
    }

    #[test]
    fn test_display_lists_errors() {
        let report = ValidationReport::from_error(ConfigError::invalid("nx", 0, "必须大于 0"));
        let text = report.to_string();
        assert!(text.contains("错误: 1 个"));
        assert!(text.contains("nx"));
    }
}
