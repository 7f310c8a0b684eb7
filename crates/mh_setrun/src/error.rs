// crates/mh_setrun/src/error.rs

//! 配置层错误类型
//!
//! - [`ConfigError`]: 单个字段或条目的违规，`key` 指明出错位置
//!   （例如 `regions[3].max_level`、`gauges[id=17].x`）
//! - [`SetrunError`]: 顶层错误分类，区分"输入有误"与"环境有误"

use std::path::PathBuf;

use crate::validation::ValidationReport;

/// 单条目验证结果
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 顶层结果类型
pub type SetrunResult<T> = Result<T, SetrunError>;

/// 配置错误（单个字段/条目）
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// 无效值
    #[error("无效值 '{key}': {value} - {reason}")]
    InvalidValue {
        /// 配置键
        key: String,
        /// 配置值
        value: String,
        /// 原因
        reason: String,
    },

    /// 缺失配置
    #[error("缺失配置: {0}")]
    Missing(String),

    /// 列表长度不匹配
    #[error("长度不匹配 '{key}': 期望 {expected}, 实际 {actual}")]
    LengthMismatch {
        /// 配置键
        key: String,
        /// 期望长度
        expected: usize,
        /// 实际长度
        actual: usize,
    },

    /// 编号重复
    #[error("编号重复 '{key}': {id}")]
    DuplicateId {
        /// 配置键
        key: String,
        /// 重复的编号
        id: u32,
    },

    /// 坐标不在计算域内
    #[error("坐标超出计算域 '{key}': ({x}, {y}) 不在 {domain} 内")]
    OutOfDomain {
        /// 配置键
        key: String,
        /// x 坐标
        x: f64,
        /// y 坐标
        y: f64,
        /// 计算域描述
        domain: String,
    },

    /// 层级范围无效
    #[error("层级范围无效 '{key}': [{min_level}, {max_level}], 允许范围 [1, {max_levels}]")]
    LevelRange {
        /// 配置键
        key: String,
        /// 最低层级
        min_level: u32,
        /// 最高层级
        max_level: u32,
        /// 允许的最大层数
        max_levels: u32,
    },

    /// 未知的枚举名称或代码
    #[error("未知的{kind}取值: '{value}'")]
    UnknownCode {
        /// 枚举类别
        kind: &'static str,
        /// 原始取值
        value: String,
    },
}

impl ConfigError {
    /// 构造无效值错误
    pub fn invalid(key: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// 出错字段的键（若有）
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { key, .. }
            | Self::LengthMismatch { key, .. }
            | Self::DuplicateId { key, .. }
            | Self::OutOfDomain { key, .. }
            | Self::LevelRange { key, .. } => Some(key),
            Self::Missing(key) => Some(key),
            Self::UnknownCode { .. } => None,
        }
    }

    /// 给键加上所属条目的前缀
    ///
    /// `max_level` 在 `regions[3]` 下变为 `regions[3].max_level`。
    pub fn within(self, prefix: &str) -> Self {
        let join = |key: String| {
            if key.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}.{key}")
            }
        };
        match self {
            Self::InvalidValue { key, value, reason } => Self::InvalidValue {
                key: join(key),
                value,
                reason,
            },
            Self::Missing(key) => Self::Missing(join(key)),
            Self::LengthMismatch { key, expected, actual } => Self::LengthMismatch {
                key: join(key),
                expected,
                actual,
            },
            Self::DuplicateId { key, id } => Self::DuplicateId { key: join(key), id },
            Self::OutOfDomain { key, x, y, domain } => Self::OutOfDomain {
                key: join(key),
                x,
                y,
                domain,
            },
            Self::LevelRange {
                key,
                min_level,
                max_level,
                max_levels,
            } => Self::LevelRange {
                key: join(key),
                min_level,
                max_level,
                max_levels,
            },
            Self::UnknownCode { kind, value } => Self::InvalidValue {
                key: prefix.to_string(),
                value,
                reason: format!("未知的{kind}"),
            },
        }
    }
}

/// 顶层错误
#[derive(Debug, thiserror::Error)]
pub enum SetrunError {
    /// 必需的环境变量未设置
    #[error("环境变量 {var} 未设置: 无法确定安装根目录")]
    Environment {
        /// 变量名
        var: &'static str,
    },

    /// 配置无效（可能聚合多条错误）
    #[error("配置无效\n{0}")]
    Configuration(ValidationReport),

    /// 写出 .data 文件失败
    #[error("写出失败 {}: {source}", path.display())]
    Serialization {
        /// 目标路径
        path: PathBuf,
        /// 底层 IO 错误
        #[source]
        source: std::io::Error,
    },

    /// 读取文件失败
    #[error("读取失败 {}: {source}", path.display())]
    Read {
        /// 源路径
        path: PathBuf,
        /// 底层 IO 错误
        #[source]
        source: std::io::Error,
    },

    /// .data 文件解析错误
    #[error("文件解析错误: {file}:{line} - {message}")]
    Parse {
        /// 文件名
        file: String,
        /// 行号（从 1 开始）
        line: usize,
        /// 错误信息
        message: String,
    },

    /// JSON 输入文档解析错误
    #[error("输入文档解析错误: {0}")]
    Input(#[from] serde_json::Error),
}

impl SetrunError {
    /// 是否为配置错误（输入有误）
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// 配置错误的报告（若是）
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Configuration(report) => Some(report),
            _ => None,
        }
    }
}

impl From<ConfigError> for SetrunError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(ValidationReport::from_error(err))
    }
}

impl From<ValidationReport> for SetrunError {
    fn from(report: ValidationReport) -> Self {
        Self::Configuration(report)
    }
}
