// crates/mh_setrun/src/domain.rs

//! 计算域与方程组规模
//!
//! [`Domain`] 是轴对齐矩形 `[xlower, xupper] × [ylower, yupper]` 加上最粗网格的单元数，
//! 区域、测站、固定网格等都以它为空间参照。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codes::{AuxType, CoordinateSystem};
use crate::error::{ConfigError, ConfigResult};
use crate::validation::check_finite;

/// 计算域（已验证）
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    coordinate_system: CoordinateSystem,
    lower: [f64; 2],
    upper: [f64; 2],
    num_cells: [u32; 2],
}

impl Domain {
    /// 构建计算域
    ///
    /// 要求 `xlower < xupper`、`ylower < yupper` 且两个方向的单元数都大于 0。
    pub fn new(
        coordinate_system: CoordinateSystem,
        lower: [f64; 2],
        upper: [f64; 2],
        num_cells: [u32; 2],
    ) -> ConfigResult<Self> {
        for (axis, name) in ["x", "y"].iter().enumerate() {
            check_finite(&format!("domain.lower.{name}"), lower[axis])?;
            check_finite(&format!("domain.upper.{name}"), upper[axis])?;
            if lower[axis] >= upper[axis] {
                return Err(ConfigError::invalid(
                    format!("domain.{name}"),
                    format!("[{}, {}]", lower[axis], upper[axis]),
                    "下边界必须严格小于上边界",
                ));
            }
            if num_cells[axis] == 0 {
                return Err(ConfigError::invalid(
                    format!("domain.num_cells.{name}"),
                    0,
                    "单元数必须大于 0",
                ));
            }
        }
        if coordinate_system == CoordinateSystem::LatLong
            && (lower[1] < -90.0 || upper[1] > 90.0)
        {
            return Err(ConfigError::invalid(
                "domain.y",
                format!("[{}, {}]", lower[1], upper[1]),
                "纬度必须在 [-90, 90] 内",
            ));
        }
        Ok(Self {
            coordinate_system,
            lower,
            upper,
            num_cells,
        })
    }

    /// 坐标系
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }

    /// 下边界 `[xlower, ylower]`
    pub fn lower(&self) -> [f64; 2] {
        self.lower
    }

    /// 上边界 `[xupper, yupper]`
    pub fn upper(&self) -> [f64; 2] {
        self.upper
    }

    /// 最粗网格单元数 `[nx, ny]`
    pub fn num_cells(&self) -> [u32; 2] {
        self.num_cells
    }

    /// 最粗网格单元尺寸 `(dx, dy)`
    pub fn cell_size(&self) -> (f64, f64) {
        (
            (self.upper[0] - self.lower[0]) / self.num_cells[0] as f64,
            (self.upper[1] - self.lower[1]) / self.num_cells[1] as f64,
        )
    }

    /// 点是否在计算域内（含边界）
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.lower[0] && x <= self.upper[0] && y >= self.lower[1] && y <= self.upper[1]
    }

    /// 矩形 `[x_lo, x_hi] × [y_lo, y_hi]` 是否与计算域相交
    ///
    /// 只在边界上相切不算相交。退化为线段的矩形只要穿过域内部即算相交。
    pub fn intersects(&self, x_lo: f64, x_hi: f64, y_lo: f64, y_hi: f64) -> bool {
        x_lo < self.upper[0] && x_hi > self.lower[0] && y_lo < self.upper[1] && y_hi > self.lower[1]
    }

    /// 点是否在域内，否则返回 [`ConfigError::OutOfDomain`]
    pub fn check_contains(&self, key: &str, x: f64, y: f64) -> ConfigResult<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(ConfigError::OutOfDomain {
                key: key.to_string(),
                x,
                y,
                domain: self.to_string(),
            })
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] × [{}, {}]",
            self.lower[0], self.upper[0], self.lower[1], self.upper[1]
        )
    }
}

/// 方程组规模
///
/// `capacity_index` 从 0 开始计数，写出时转换为求解器的 1 基下标。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationSystem {
    /// 每个单元的守恒量个数
    pub num_eqn: u32,
    /// 每个单元的辅助变量个数
    pub num_aux: u32,
    /// 容量函数所在的辅助变量下标（0 基）
    #[serde(default)]
    pub capacity_index: Option<u32>,
    /// 每个辅助变量的类型，长度等于 `num_aux`
    #[serde(default)]
    pub aux_types: Vec<AuxType>,
}

impl EquationSystem {
    /// 验证方程组规模，`coordinate_system` 用于检查容量函数是否必需
    pub fn validate(&self, coordinate_system: CoordinateSystem) -> ConfigResult<()> {
        if self.num_eqn == 0 {
            return Err(ConfigError::invalid("equations.num_eqn", 0, "守恒量个数必须大于 0"));
        }
        if self.aux_types.len() != self.num_aux as usize {
            return Err(ConfigError::LengthMismatch {
                key: "equations.aux_types".into(),
                expected: self.num_aux as usize,
                actual: self.aux_types.len(),
            });
        }
        match self.capacity_index {
            Some(idx) if idx >= self.num_aux => {
                return Err(ConfigError::invalid(
                    "equations.capacity_index",
                    idx,
                    format!("必须满足 0 <= capacity_index < num_aux ({})", self.num_aux),
                ));
            }
            Some(idx) if self.aux_types[idx as usize] != AuxType::Capacity => {
                return Err(ConfigError::invalid(
                    format!("equations.aux_types[{idx}]"),
                    self.aux_types[idx as usize],
                    "容量函数所在的辅助变量类型必须为 capacity",
                ));
            }
            None if coordinate_system == CoordinateSystem::LatLong => {
                return Err(ConfigError::Missing(
                    "equations.capacity_index（经纬度坐标需要容量函数）".into(),
                ));
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lake_domain() -> Domain {
        Domain::new(CoordinateSystem::LatLong, [93.0, 28.0], [95.6, 30.0], [255, 222]).unwrap()
    }

    #[test]
    fn test_domain_valid() {
        let domain = lake_domain();
        assert_eq!(domain.num_cells(), [255, 222]);
        let (dx, dy) = domain.cell_size();
        assert!((dx - 2.6 / 255.0).abs() < 1e-12);
        assert!((dy - 2.0 / 222.0).abs() < 1e-12);
    }

    #[test]
    fn test_domain_reversed_bounds() {
        let err = Domain::new(CoordinateSystem::Cartesian, [1.0, 0.0], [0.0, 1.0], [10, 10]);
        assert!(matches!(err, Err(ConfigError::InvalidValue { ref key, .. }) if key == "domain.x"));

        let err = Domain::new(CoordinateSystem::Cartesian, [0.0, 1.0], [1.0, 1.0], [10, 10]);
        assert!(err.is_err());
    }

    #[test]
    fn test_domain_zero_cells() {
        let err = Domain::new(CoordinateSystem::Cartesian, [0.0, 0.0], [1.0, 1.0], [10, 0]);
        assert!(err.is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let domain = lake_domain();
        assert!(domain.contains(94.092882, 29.203368));
        assert!(domain.contains(93.0, 30.0));
        assert!(!domain.contains(200.0, 29.0));
        assert!(domain.check_contains("gauges[id=0]", 200.0, 29.0).is_err());
    }

    #[test]
    fn test_intersects() {
        let domain = lake_domain();
        // 部分伸出西边界
        assert!(domain.intersects(92.96, 93.37, 28.96, 29.19));
        // 完全在外
        assert!(!domain.intersects(90.0, 92.0, 28.5, 29.0));
        // 只在东边界相切
        assert!(!domain.intersects(95.6, 96.0, 28.5, 29.0));
    }

    #[test]
    fn test_equation_system_capacity() {
        let eq = EquationSystem {
            num_eqn: 3,
            num_aux: 3,
            capacity_index: Some(1),
            aux_types: vec![AuxType::Center, AuxType::Capacity, AuxType::YLeft],
        };
        assert!(eq.validate(CoordinateSystem::LatLong).is_ok());

        let bad = EquationSystem {
            capacity_index: Some(3),
            ..eq.clone()
        };
        assert!(bad.validate(CoordinateSystem::LatLong).is_err());

        let wrong_type = EquationSystem {
            capacity_index: Some(0),
            ..eq.clone()
        };
        assert!(wrong_type.validate(CoordinateSystem::LatLong).is_err());

        let missing = EquationSystem {
            capacity_index: None,
            ..eq.clone()
        };
        assert!(missing.validate(CoordinateSystem::LatLong).is_err());
        assert!(missing.validate(CoordinateSystem::Cartesian).is_ok());
    }

    #[test]
    fn test_aux_types_length() {
        let eq = EquationSystem {
            num_eqn: 3,
            num_aux: 3,
            capacity_index: None,
            aux_types: vec![AuxType::Center],
        };
        assert!(matches!(
            eq.validate(CoordinateSystem::Cartesian),
            Err(ConfigError::LengthMismatch { expected: 3, actual: 1, .. })
        ));
    }
}
