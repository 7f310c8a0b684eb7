// crates/mh_setrun/src/geo.rs

//! 地球物理参数与按水深的加密控制

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::validation::{check_finite, check_non_negative, check_positive};

/// 底摩擦
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum Friction {
    /// 不计摩擦
    Off,
    /// Manning 公式
    Manning {
        /// Manning 系数
        coefficient: f64,
        /// 只在水深小于该值处施加摩擦
        depth: f64,
    },
}

/// 地球物理参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoPhysics {
    /// 重力加速度 [m/s²]
    pub gravity: f64,
    /// 地球半径 [m]
    pub earth_radius: f64,
    /// 是否计入科氏力
    pub coriolis_forcing: bool,
    /// 初始海平面
    pub sea_level: f64,
    /// 干湿判断阈值 [m]
    pub dry_tolerance: f64,
    /// 底摩擦
    pub friction: Friction,
}

impl Default for GeoPhysics {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            earth_radius: 6367.5e3,
            coriolis_forcing: true,
            sea_level: 0.0,
            dry_tolerance: 1e-3,
            friction: Friction::Manning {
                coefficient: 0.025,
                depth: 1e6,
            },
        }
    }
}

impl GeoPhysics {
    /// 验证
    pub fn validate(&self) -> ConfigResult<()> {
        check_positive("geo.gravity", self.gravity)?;
        check_positive("geo.earth_radius", self.earth_radius)?;
        check_finite("geo.sea_level", self.sea_level)?;
        check_non_negative("geo.dry_tolerance", self.dry_tolerance)?;
        if let Friction::Manning { coefficient, depth } = self.friction {
            check_non_negative("geo.friction.coefficient", coefficient)?;
            check_non_negative("geo.friction.depth", depth)?;
        }
        Ok(())
    }
}

/// 按水深的加密控制
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinementData {
    /// 海面扰动超过该值时标记加密
    pub wave_tolerance: f64,
    /// 深水阈值 [m]
    pub deep_depth: f64,
    /// 深水处允许的最高层级
    pub max_level_deep: u32,
    /// 各层时间加密比按 CFL 自动选取
    pub variable_dt_refinement_ratios: bool,
}

impl Default for RefinementData {
    fn default() -> Self {
        Self {
            wave_tolerance: 0.1,
            deep_depth: 100.0,
            max_level_deep: 3,
            variable_dt_refinement_ratios: false,
        }
    }
}

impl RefinementData {
    /// 验证，`max_level_deep` 必须落在 `[1, max_levels]` 内
    pub fn validate(&self, max_levels: u32) -> ConfigResult<()> {
        check_positive("refinement.wave_tolerance", self.wave_tolerance)?;
        check_non_negative("refinement.deep_depth", self.deep_depth)?;
        if self.max_level_deep == 0 || self.max_level_deep > max_levels {
            return Err(ConfigError::invalid(
                "refinement.max_level_deep",
                self.max_level_deep,
                format!("必须在 [1, {max_levels}] 内"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(GeoPhysics::default().validate().is_ok());
        assert!(RefinementData::default().validate(3).is_ok());
    }

    #[test]
    fn test_negative_manning_rejected() {
        let geo = GeoPhysics {
            friction: Friction::Manning {
                coefficient: -0.01,
                depth: 20.0,
            },
            ..GeoPhysics::default()
        };
        assert_eq!(geo.validate().unwrap_err().key(), Some("geo.friction.coefficient"));
    }

    #[test]
    fn test_max_level_deep_bounded() {
        let data = RefinementData {
            max_level_deep: 7,
            ..RefinementData::default()
        };
        assert!(data.validate(6).is_err());
        assert!(data.validate(7).is_ok());
    }

    #[test]
    fn test_friction_json() {
        let geo: GeoPhysics =
            serde_json::from_str(r#"{"friction": {"law": "manning", "coefficient": 0.04, "depth": 20.0}}"#).unwrap();
        assert_eq!(geo.gravity, 9.81);
        assert_eq!(
            geo.friction,
            Friction::Manning {
                coefficient: 0.04,
                depth: 20.0
            }
        );
        let off: Friction = serde_json::from_str(r#"{"law": "off"}"#).unwrap();
        assert_eq!(off, Friction::Off);
    }
}
