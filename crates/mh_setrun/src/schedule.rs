// crates/mh_setrun/src/schedule.rs

//! 时间推进、输出与检查点计划
//!
//! 输出方式与检查点方式都是互斥的变体，用和类型表达，
//! 每个变体只携带自己需要的字段。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codes::OutputFormat;
use crate::error::{ConfigError, ConfigResult, SetrunResult};
use crate::scheme::DomainScheme;
use crate::validation::{
    check_count, check_finite, check_path, check_positive, check_time_list, ValidationReport,
    ValidationWarning,
};

fn default_true() -> bool {
    true
}

/// 输出方式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum OutputStyle {
    /// 到 `t_final` 为止等间隔输出 `num_output_times` 帧
    EquallySpaced {
        /// 输出帧数
        num_output_times: u32,
        /// 最终时间
        t_final: f64,
        /// 是否输出初始时刻
        #[serde(default = "default_true")]
        output_t0: bool,
    },
    /// 显式输出时间列表
    Times {
        /// 非递减且不早于 t0 的时间
        times: Vec<f64>,
    },
    /// 每 `step_interval` 步输出一次，共 `total_steps` 步
    StepInterval {
        /// 输出间隔 [步]
        step_interval: u32,
        /// 总步数
        total_steps: u32,
        /// 是否输出初始时刻
        #[serde(default = "default_true")]
        output_t0: bool,
    },
}

impl OutputStyle {
    /// 求解器使用的 output_style 代码
    pub fn code(&self) -> u8 {
        match self {
            Self::EquallySpaced { .. } => 1,
            Self::Times { .. } => 2,
            Self::StepInterval { .. } => 3,
        }
    }

    /// 模拟的最终时间（按步数输出时未知）
    pub fn final_time(&self) -> Option<f64> {
        match self {
            Self::EquallySpaced { t_final, .. } => Some(*t_final),
            Self::Times { times } => times.last().copied(),
            Self::StepInterval { .. } => None,
        }
    }

    fn validate(&self, t0: f64) -> ConfigResult<()> {
        match self {
            Self::EquallySpaced {
                num_output_times,
                t_final,
                ..
            } => {
                check_count("time.output.num_output_times", *num_output_times as u64)?;
                check_finite("time.output.t_final", *t_final)?;
                if *t_final <= t0 {
                    return Err(ConfigError::invalid(
                        "time.output.t_final",
                        t_final,
                        format!("必须大于初始时间 {t0}"),
                    ));
                }
                Ok(())
            }
            Self::Times { times } => check_time_list("time.output.times", times, t0),
            Self::StepInterval {
                step_interval,
                total_steps,
                ..
            } => {
                check_count("time.output.step_interval", *step_interval as u64)?;
                check_count("time.output.total_steps", *total_steps as u64)
            }
        }
    }
}

/// 检查点方式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum CheckpointStyle {
    /// 不写检查点
    #[default]
    None,
    /// 只在最终时间写
    FinalTime,
    /// 显式检查点时间列表
    Times {
        /// 非递减且不早于 t0 的时间
        times: Vec<f64>,
    },
    /// 每 `interval` 个粗网格步写一次，最终时间也写
    StepInterval {
        /// 间隔 [步]
        interval: u32,
    },
}

impl CheckpointStyle {
    /// 求解器使用的 checkpt_style 代码
    pub fn code(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::FinalTime => 1,
            Self::Times { .. } => 2,
            Self::StepInterval { .. } => 3,
        }
    }

    fn validate(&self, t0: f64) -> ConfigResult<()> {
        match self {
            Self::None | Self::FinalTime => Ok(()),
            Self::Times { times } => check_time_list("time.checkpoint.times", times, t0),
            Self::StepInterval { interval } => {
                check_count("time.checkpoint.interval", *interval as u64)
            }
        }
    }
}

/// 时间步长控制
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeStepping {
    /// 是否按 CFL 使用可变时间步
    pub dt_variable: bool,
    /// 初始时间步（固定步长时即为步长）
    pub dt_initial: f64,
    /// 允许的最大时间步
    pub dt_max: f64,
    /// 期望 Courant 数
    pub cfl_desired: f64,
    /// 不重算时允许的最大 Courant 数
    pub cfl_max: f64,
    /// 两次输出之间允许的最大步数
    pub steps_max: u64,
}

impl Default for TimeStepping {
    fn default() -> Self {
        Self {
            dt_variable: true,
            dt_initial: 1e-5,
            dt_max: 1e99,
            cfl_desired: 0.9,
            cfl_max: 1.0,
            steps_max: 50_000,
        }
    }
}

impl TimeStepping {
    fn validate(&self) -> ConfigResult<()> {
        check_positive("time.stepping.dt_initial", self.dt_initial)?;
        check_positive("time.stepping.dt_max", self.dt_max)?;
        if self.dt_max < self.dt_initial {
            return Err(ConfigError::invalid(
                "time.stepping.dt_max",
                self.dt_max,
                format!("不能小于 dt_initial ({})", self.dt_initial),
            ));
        }
        check_positive("time.stepping.cfl_desired", self.cfl_desired)?;
        check_positive("time.stepping.cfl_max", self.cfl_max)?;
        if self.cfl_desired > self.cfl_max {
            return Err(ConfigError::invalid(
                "time.stepping.cfl_desired",
                self.cfl_desired,
                format!("不能超过 cfl_max ({})", self.cfl_max),
            ));
        }
        if self.dt_variable {
            check_count("time.stepping.steps_max", self.steps_max)?;
        }
        Ok(())
    }
}

/// 重启策略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Restart {
    /// 从初始条件开始
    #[default]
    Fresh,
    /// 从已有检查点文件重启（t0 应为原始运行的 t0）
    FromCheckpoint {
        /// 输出目录中的检查点文件名，例如 `fort.chk03553`
        file: String,
    },
}

/// 输出分量选择
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentMask {
    /// 全部输出
    All,
    /// 不输出
    None,
    /// 逐分量选择
    Mask(Vec<bool>),
}

impl ComponentMask {
    /// 展开为长度为 `len` 的标志列表
    pub fn flags(&self, len: usize) -> Vec<bool> {
        match self {
            Self::All => vec![true; len],
            Self::None => vec![false; len],
            Self::Mask(mask) => mask.clone(),
        }
    }

    /// 由标志列表还原，全真为 `All`，全假（或空）为 `None`
    pub fn from_flags(flags: Vec<bool>) -> Self {
        if flags.is_empty() || flags.iter().all(|f| !f) {
            Self::None
        } else if flags.iter().all(|f| *f) {
            Self::All
        } else {
            Self::Mask(flags)
        }
    }

    fn normalized(self, len: usize, key: &str) -> ConfigResult<Self> {
        if let Self::Mask(mask) = &self {
            if mask.len() != len {
                return Err(ConfigError::LengthMismatch {
                    key: key.to_string(),
                    expected: len,
                    actual: mask.len(),
                });
            }
        }
        Ok(Self::from_flags(self.flags(len)))
    }
}

/// 输出控制
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputControls {
    /// 输出文件格式
    #[serde(default)]
    pub format: OutputFormat,
    /// 守恒量输出选择
    #[serde(default = "default_q_components")]
    pub q_components: ComponentMask,
    /// 辅助变量输出选择
    #[serde(default = "default_aux_components")]
    pub aux_components: ComponentMask,
    /// 辅助变量只在 t0 输出一次
    #[serde(default = "default_true")]
    pub aux_only_once: bool,
    /// 屏幕输出层级（0 为不打印）
    #[serde(default)]
    pub verbosity: u32,
}

fn default_q_components() -> ComponentMask {
    ComponentMask::All
}

fn default_aux_components() -> ComponentMask {
    ComponentMask::None
}

impl Default for OutputControls {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            q_components: default_q_components(),
            aux_components: default_aux_components(),
            aux_only_once: true,
            verbosity: 0,
        }
    }
}

/// 时间与输出计划（已验证）
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSchedule {
    t0: f64,
    output: OutputStyle,
    checkpoint: CheckpointStyle,
    stepping: TimeStepping,
    restart: Restart,
    controls: OutputControls,
}

impl TimeSchedule {
    /// 从初始时间开始构建
    pub fn builder(t0: f64) -> TimeScheduleBuilder {
        TimeScheduleBuilder {
            t0,
            output: None,
            checkpoint: CheckpointStyle::default(),
            stepping: TimeStepping::default(),
            restart: Restart::default(),
            controls: OutputControls::default(),
        }
    }

    /// 初始时间
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// 输出方式
    pub fn output(&self) -> &OutputStyle {
        &self.output
    }

    /// 检查点方式
    pub fn checkpoint(&self) -> &CheckpointStyle {
        &self.checkpoint
    }

    /// 时间步长控制
    pub fn stepping(&self) -> &TimeStepping {
        &self.stepping
    }

    /// 重启策略
    pub fn restart(&self) -> &Restart {
        &self.restart
    }

    /// 输出控制
    pub fn controls(&self) -> &OutputControls {
        &self.controls
    }

    /// 晚于最终输出时间的检查点
    pub fn checkpoint_warnings(&self) -> Vec<ValidationWarning> {
        let (CheckpointStyle::Times { times }, Some(t_final)) =
            (&self.checkpoint, self.output.final_time())
        else {
            return Vec::new();
        };
        times
            .iter()
            .enumerate()
            .filter(|(_, t)| **t > t_final)
            .map(|(index, &time)| ValidationWarning::CheckpointAfterFinalTime {
                index,
                time,
                t_final,
            })
            .collect()
    }
}

/// [`TimeSchedule`] 构建器
#[derive(Debug, Clone)]
pub struct TimeScheduleBuilder {
    t0: f64,
    output: Option<OutputStyle>,
    checkpoint: CheckpointStyle,
    stepping: TimeStepping,
    restart: Restart,
    controls: OutputControls,
}

impl TimeScheduleBuilder {
    /// 设置输出方式（必需）
    pub fn with_output(mut self, output: OutputStyle) -> Self {
        self.output = Some(output);
        self
    }

    /// 设置检查点方式
    pub fn with_checkpoint(mut self, checkpoint: CheckpointStyle) -> Self {
        self.checkpoint = checkpoint;
        self
    }

    /// 设置时间步长控制
    pub fn with_stepping(mut self, stepping: TimeStepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// 设置重启策略
    pub fn with_restart(mut self, restart: Restart) -> Self {
        self.restart = restart;
        self
    }

    /// 设置输出控制
    pub fn with_controls(mut self, controls: OutputControls) -> Self {
        self.controls = controls;
        self
    }

    /// 验证并构建
    ///
    /// 输出分量掩码的长度由 `domain_scheme` 中的方程组规模决定。
    pub fn build(self, domain_scheme: &DomainScheme) -> SetrunResult<TimeSchedule> {
        let mut report = ValidationReport::new();
        let t0 = self.t0;
        report.record(check_finite("time.t0", t0));

        match &self.output {
            Some(output) => {
                report.record(output.validate(t0));
            }
            None => report.add_error(ConfigError::Missing("time.output".into())),
        }
        report.record(self.checkpoint.validate(t0));
        report.record(self.stepping.validate());
        if let Restart::FromCheckpoint { file } = &self.restart {
            if file.trim().is_empty() {
                report.add_error(ConfigError::Missing("time.restart.file".into()));
            } else {
                report.record(check_path("time.restart.file", std::path::Path::new(file)));
            }
        }

        let equations = domain_scheme.equations();
        let OutputControls {
            format,
            q_components,
            aux_components,
            aux_only_once,
            verbosity,
        } = self.controls;
        let q_components = report.record(q_components.normalized(
            equations.num_eqn as usize,
            "time.controls.q_components",
        ));
        let aux_components = report.record(aux_components.normalized(
            equations.num_aux as usize,
            "time.controls.aux_components",
        ));

        report.finish()?;
        let (Some(output), Some(q_components), Some(aux_components)) =
            (self.output, q_components, aux_components)
        else {
            return Err(ConfigError::Missing("time.output".into()).into());
        };

        debug!(
            "时间计划: t0={}, output_style={}, checkpt_style={}",
            t0,
            output.code(),
            self.checkpoint.code()
        );
        Ok(TimeSchedule {
            t0,
            output,
            checkpoint: self.checkpoint,
            stepping: self.stepping,
            restart: self.restart,
            controls: OutputControls {
                format,
                q_components,
                aux_components,
                aux_only_once,
                verbosity,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;
    use crate::domain::{Domain, EquationSystem};
    use crate::scheme::{BoundaryConditions, NumericalScheme};

    fn domain_scheme() -> DomainScheme {
        let domain = Domain::new(CoordinateSystem::Cartesian, [0.0, 0.0], [1.0, 1.0], [10, 10]).unwrap();
        let equations = EquationSystem {
            num_eqn: 3,
            num_aux: 1,
            capacity_index: None,
            aux_types: vec![AuxType::Center],
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
            boundaries: BoundaryConditions::default(),
        };
        DomainScheme::new(domain, equations, scheme).unwrap()
    }

    fn equally_spaced() -> OutputStyle {
        OutputStyle::EquallySpaced {
            num_output_times: 2,
            t_final: 226800.0,
            output_t0: true,
        }
    }

    #[test]
    fn test_explicit_checkpoint_list() {
        let ds = domain_scheme();
        let ok = TimeSchedule::builder(0.0)
            .with_output(equally_spaced())
            .with_checkpoint(CheckpointStyle::Times { times: vec![183600.0] })
            .build(&ds);
        assert!(ok.is_ok());

        let bad = TimeSchedule::builder(0.0)
            .with_output(equally_spaced())
            .with_checkpoint(CheckpointStyle::Times { times: vec![-5.0] })
            .build(&ds);
        let err = bad.unwrap_err();
        assert_eq!(
            err.report().unwrap().errors[0].key(),
            Some("time.checkpoint.times[0]")
        );
    }

    #[test]
    fn test_output_style_required() {
        let err = TimeSchedule::builder(0.0).build(&domain_scheme()).unwrap_err();
        assert!(matches!(
            err.report().unwrap().errors[0],
            ConfigError::Missing(ref k) if k == "time.output"
        ));
    }

    #[test]
    fn test_empty_output_times() {
        let err = TimeSchedule::builder(0.0)
            .with_output(OutputStyle::Times { times: vec![] })
            .build(&domain_scheme());
        assert!(err.is_err());
    }

    #[test]
    fn test_stepping_constraints() {
        let ds = domain_scheme();
        let build = |stepping: TimeStepping| {
            TimeSchedule::builder(0.0)
                .with_output(equally_spaced())
                .with_stepping(stepping)
                .build(&ds)
        };

        assert!(build(TimeStepping::default()).is_ok());
        assert!(build(TimeStepping { dt_initial: 0.0, ..TimeStepping::default() }).is_err());
        assert!(build(TimeStepping { cfl_desired: 1.1, ..TimeStepping::default() }).is_err());
        assert!(build(TimeStepping { steps_max: 0, ..TimeStepping::default() }).is_err());
        // 固定步长时不要求 steps_max
        assert!(build(TimeStepping {
            dt_variable: false,
            steps_max: 0,
            ..TimeStepping::default()
        })
        .is_ok());
    }

    #[test]
    fn test_errors_are_aggregated() {
        let err = TimeSchedule::builder(0.0)
            .with_output(OutputStyle::Times { times: vec![] })
            .with_checkpoint(CheckpointStyle::StepInterval { interval: 0 })
            .with_restart(Restart::FromCheckpoint { file: " ".into() })
            .build(&domain_scheme())
            .unwrap_err();
        assert_eq!(err.report().unwrap().error_count(), 3);
    }

    #[test]
    fn test_component_masks_normalize() {
        let ds = domain_scheme();
        let schedule = TimeSchedule::builder(0.0)
            .with_output(equally_spaced())
            .with_controls(OutputControls {
                q_components: ComponentMask::Mask(vec![true, true, true]),
                aux_components: ComponentMask::Mask(vec![false]),
                ..OutputControls::default()
            })
            .build(&ds)
            .unwrap();
        assert_eq!(schedule.controls().q_components, ComponentMask::All);
        assert_eq!(schedule.controls().aux_components, ComponentMask::None);

        let err = TimeSchedule::builder(0.0)
            .with_output(equally_spaced())
            .with_controls(OutputControls {
                q_components: ComponentMask::Mask(vec![true]),
                ..OutputControls::default()
            })
            .build(&ds);
        assert!(err.is_err());
    }

    #[test]
    fn test_checkpoint_after_final_time_warns() {
        let schedule = TimeSchedule::builder(0.0)
            .with_output(equally_spaced())
            .with_checkpoint(CheckpointStyle::Times {
                times: vec![100.0, 300000.0],
            })
            .build(&domain_scheme())
            .unwrap();
        let warnings = schedule.checkpoint_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0],
            ValidationWarning::CheckpointAfterFinalTime { index: 1, .. }
        ));
    }

    #[test]
    fn test_output_style_json() {
        let style: OutputStyle =
            serde_json::from_str(r#"{"style": "times", "times": [0, 30, 60, 90]}"#).unwrap();
        assert_eq!(style.code(), 2);
        assert_eq!(style.final_time(), Some(90.0));

        let checkpoint: CheckpointStyle = serde_json::from_str(r#"{"style": "final_time"}"#).unwrap();
        assert_eq!(checkpoint, CheckpointStyle::FinalTime);
    }
}
