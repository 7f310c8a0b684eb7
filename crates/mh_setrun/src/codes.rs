// crates/mh_setrun/src/codes.rs

//! 封闭枚举：名称与历史数字代码
//!
//! 求解器的许多选项既可以写成名称（`"mc"`），也可以写成数字代码（`4`）。
//! 两种写法只在解析边界（JSON 输入、`FromStr`）被接受并立即归一化，
//! 验证后的记录只携带枚举值，写出时使用数字代码。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

/// 解析边界上的原始取值：名称或数字代码
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyCode {
    /// 数字代码
    Code(i64),
    /// 名称
    Name(String),
}

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "LegacyCode", into = "LegacyCode")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// 全部取值
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// 规范名称
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// 求解器使用的数字代码
            pub fn code(self) -> i64 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// 由数字代码解析
            pub fn from_code(code: i64) -> ConfigResult<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.code() == code)
                    .ok_or_else(|| ConfigError::UnknownCode {
                        kind: $kind,
                        value: code.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if let Ok(code) = s.parse::<i64>() {
                    return Self::from_code(code);
                }
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ConfigError::UnknownCode {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl TryFrom<LegacyCode> for $name {
            type Error = ConfigError;

            fn try_from(value: LegacyCode) -> Result<Self, Self::Error> {
                match value {
                    LegacyCode::Code(code) => Self::from_code(code),
                    LegacyCode::Name(name) => name.parse(),
                }
            }
        }

        impl From<$name> for LegacyCode {
            fn from(value: $name) -> Self {
                LegacyCode::Name(value.name().to_string())
            }
        }
    };
}

code_enum! {
    /// 坐标系
    pub enum CoordinateSystem: "坐标系" {
        /// 笛卡尔坐标 x-y，单位米
        Cartesian = 1 => "cartesian",
        /// 球面经纬度
        LatLong = 2 => "latlong",
    }
}

code_enum! {
    /// 精度阶数
    pub enum Order: "精度阶数" {
        /// 一阶 Godunov
        First = 1 => "first",
        /// 二阶 Lax-Wendroff 加限制器
        Second = 2 => "second",
    }
}

code_enum! {
    /// 横向波耦合方式
    pub enum TransverseWaves: "横向波模式" {
        /// 仅法向求解（donor cell）
        None = 0 => "none",
        /// 波的角输运
        Increment = 1 => "increment",
        /// 二阶修正也做角输运
        All = 2 => "all",
    }
}

code_enum! {
    /// 维度分裂
    pub enum DimensionalSplit: "维度分裂" {
        /// 不分裂
        Unsplit = 0 => "unsplit",
        /// Godunov 分裂
        Godunov = 1 => "godunov",
        /// Strang 分裂
        Strang = 2 => "strang",
    }
}

code_enum! {
    /// 限制器（每个波族一个）
    pub enum Limiter: "限制器" {
        /// 无限制（Lax-Wendroff）
        None = 0 => "none",
        /// minmod
        Minmod = 1 => "minmod",
        /// superbee
        Superbee = 2 => "superbee",
        /// van Leer
        VanLeer = 3 => "vanleer",
        /// MC
        Mc = 4 => "mc",
    }
}

code_enum! {
    /// 源项分裂方式
    pub enum SourceSplit: "源项分裂" {
        /// 无源项
        None = 0 => "none",
        /// Godunov（一阶）分裂
        Godunov = 1 => "godunov",
        /// Strang（二阶）分裂
        Strang = 2 => "strang",
    }
}

code_enum! {
    /// 边界条件
    pub enum BoundaryCondition: "边界条件" {
        /// 用户自定义
        User = 0 => "user",
        /// 外推（无反射出流）
        Extrap = 1 => "extrap",
        /// 周期（两侧必须同时指定）
        Periodic = 2 => "periodic",
        /// 固壁反射
        Wall = 3 => "wall",
    }
}

code_enum! {
    /// 辅助变量类型
    pub enum AuxType: "辅助变量类型" {
        /// 单元中心量
        Center = 1 => "center",
        /// 容量函数
        Capacity = 2 => "capacity",
        /// 左侧 x 面
        XLeft = 3 => "xleft",
        /// 下侧 y 面
        YLeft = 4 => "yleft",
    }
}

code_enum! {
    /// 输出文件格式
    pub enum OutputFormat: "输出格式" {
        /// ASCII 文本
        Ascii = 1 => "ascii",
        /// 二进制
        Binary = 2 => "binary",
        /// NetCDF
        NetCdf = 3 => "netcdf",
    }
}

code_enum! {
    /// 初始扰动类型
    pub enum PerturbationKind: "扰动类型" {
        /// 水深 h 扰动
        Depth = 1 => "depth",
        /// x 方向动量扰动
        MomentumX = 2 => "momentum_x",
        /// y 方向动量扰动
        MomentumY = 3 => "momentum_y",
        /// 水面高程扰动
        Surface = 4 => "surface",
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Ascii
    }
}
