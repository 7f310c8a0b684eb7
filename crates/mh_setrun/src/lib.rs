// crates/mh_setrun/src/lib.rs

//! MariHydro Setrun
//!
//! GeoClaw AMR 浅水模拟的运行参数：构建、验证，并写出求解器读取的 `.data` 文件。
//!
//! # 模块概览
//!
//! - [`codes`]: 封闭枚举（名称或历史数字代码）
//! - [`domain`] / [`scheme`]: 计算域、方程组规模与数值格式
//! - [`schedule`]: 时间计划、输出与检查点
//! - [`amr`]: AMR 层级、加密比与重划分策略
//! - [`region`] / [`gauge`]: 加密区域（含层级解析）与测站
//! - [`sources`] / [`geo`]: 外部文件来源与地球物理参数
//! - [`config`]: 汇总为不可变的 [`RunConfig`]
//! - [`io`]: `.data` 文件写出与读回
//! - [`input`] / [`env`] / [`scenario`]: JSON 输入、安装环境与内置算例
//!
//! # 构建顺序
//!
//! ```text
//! DomainScheme ─> TimeSchedule ─> AmrHierarchy ─> RunConfigBuilder ─> RunConfig ─> *.data
//!                                                 (regions, gauges, sources)
//! ```
//!
//! 每一步都在构建时验证；验证失败返回 [`SetrunError::Configuration`]，
//! 其中的 [`ValidationReport`] 列出全部出错字段。
//!
//! # 示例
//!
//! ```
//! use mh_setrun::scenario;
//!
//! let config = scenario::lake_3088().unwrap();
//! assert_eq!(config.amr().max_levels(), 6);
//! assert_eq!(config.resolve_levels(0.0, 94.9, 29.6).max_level, 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod amr;
pub mod codes;
pub mod config;
pub mod domain;
pub mod env;
pub mod error;
pub mod gauge;
pub mod geo;
pub mod input;
pub mod io;
pub mod region;
pub mod scenario;
pub mod schedule;
pub mod scheme;
pub mod sources;
pub mod validation;

// 重导出常用类型
pub use config::{RunConfig, RunConfigBuilder};
pub use env::Environment;
pub use error::{ConfigError, ConfigResult, SetrunError, SetrunResult};
pub use input::RunSpec;
pub use region::{LevelBounds, Region};
pub use validation::{ValidationReport, ValidationWarning};
