// crates/mh_setrun/src/scheme.rs

//! 数值格式选择与 "计算域 + 格式" 构建器

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codes::{BoundaryCondition, DimensionalSplit, Limiter, Order, SourceSplit, TransverseWaves};
use crate::domain::{Domain, EquationSystem};
use crate::error::{ConfigError, ConfigResult, SetrunResult};
use crate::validation::ValidationReport;

/// 四条边的边界条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryConditions {
    /// `[xlower, ylower]` 边
    pub lower: [BoundaryCondition; 2],
    /// `[xupper, yupper]` 边
    pub upper: [BoundaryCondition; 2],
}

impl BoundaryConditions {
    /// 四条边使用同一种边界条件
    pub fn uniform(bc: BoundaryCondition) -> Self {
        Self {
            lower: [bc, bc],
            upper: [bc, bc],
        }
    }

    /// 周期边界必须在同一轴的两侧成对出现
    pub fn validate(&self) -> ConfigResult<()> {
        for (axis, name) in ["x", "y"].iter().enumerate() {
            let lo = self.lower[axis] == BoundaryCondition::Periodic;
            let hi = self.upper[axis] == BoundaryCondition::Periodic;
            if lo != hi {
                return Err(ConfigError::invalid(
                    format!("scheme.boundaries.{name}"),
                    format!("{} / {}", self.lower[axis], self.upper[axis]),
                    "周期边界必须同时指定在两侧",
                ));
            }
        }
        Ok(())
    }
}

impl Default for BoundaryConditions {
    fn default() -> Self {
        Self::uniform(BoundaryCondition::Extrap)
    }
}

/// 数值格式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericalScheme {
    /// 精度阶数
    pub order: Order,
    /// 横向波耦合
    pub transverse_waves: TransverseWaves,
    /// 维度分裂（AMR 下只能不分裂）
    #[serde(default = "default_split")]
    pub dimensional_split: DimensionalSplit,
    /// Riemann 解中的波族个数
    pub num_waves: u32,
    /// 每个波族的限制器，长度等于 `num_waves`
    pub limiters: Vec<Limiter>,
    /// 使用 f-wave 形式
    #[serde(default)]
    pub use_fwaves: bool,
    /// 源项分裂
    pub source_split: SourceSplit,
    /// 幽灵单元层数
    #[serde(default = "default_num_ghost")]
    pub num_ghost: u32,
    /// 边界条件
    #[serde(default)]
    pub boundaries: BoundaryConditions,
}

fn default_split() -> DimensionalSplit {
    DimensionalSplit::Unsplit
}

fn default_num_ghost() -> u32 {
    2
}

impl NumericalScheme {
    /// 验证格式选择
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_waves == 0 {
            return Err(ConfigError::invalid("scheme.num_waves", 0, "波族个数必须大于 0"));
        }
        if self.limiters.len() != self.num_waves as usize {
            return Err(ConfigError::LengthMismatch {
                key: "scheme.limiters".into(),
                expected: self.num_waves as usize,
                actual: self.limiters.len(),
            });
        }
        if self.dimensional_split != DimensionalSplit::Unsplit {
            return Err(ConfigError::invalid(
                "scheme.dimensional_split",
                self.dimensional_split,
                "AMR 不支持维度分裂",
            ));
        }
        let min_ghost = match self.order {
            Order::First => 1,
            Order::Second => 2,
        };
        if self.num_ghost < min_ghost {
            return Err(ConfigError::invalid(
                "scheme.num_ghost",
                self.num_ghost,
                format!("{} 阶格式至少需要 {} 层幽灵单元", self.order.code(), min_ghost),
            ));
        }
        self.boundaries.validate()
    }
}

/// 计算域 + 方程组 + 数值格式（已验证）
#[derive(Debug, Clone, PartialEq)]
pub struct DomainScheme {
    domain: Domain,
    equations: EquationSystem,
    scheme: NumericalScheme,
}

impl DomainScheme {
    /// 组合并验证
    ///
    /// 方程组与格式是互不相关的两个条目，两者的错误会汇总到同一份报告。
    pub fn new(domain: Domain, equations: EquationSystem, scheme: NumericalScheme) -> SetrunResult<Self> {
        let mut report = ValidationReport::new();
        report.record(equations.validate(domain.coordinate_system()));
        report.record(scheme.validate());
        report.finish()?;

        debug!(
            "计算域 {} ({}×{}), num_eqn={}, num_waves={}",
            domain,
            domain.num_cells()[0],
            domain.num_cells()[1],
            equations.num_eqn,
            scheme.num_waves
        );
        Ok(Self {
            domain,
            equations,
            scheme,
        })
    }

    /// 计算域
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// 方程组规模
    pub fn equations(&self) -> &EquationSystem {
        &self.equations
    }

    /// 数值格式
    pub fn scheme(&self) -> &NumericalScheme {
        &self.scheme
    }
}
