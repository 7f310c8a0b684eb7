// crates/mh_setrun/src/env.rs

//! 安装环境
//!
//! 安装根目录只在最外层（命令行）从 `CLAW` 环境变量读取一次，
//! 之后以 [`Environment`] 值显式传给装配入口。

use std::path::{Path, PathBuf};

use crate::error::{SetrunError, SetrunResult};

/// 安装根目录对应的环境变量
pub const CLAW_VAR: &str = "CLAW";

/// 安装环境
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    root: PathBuf,
}

impl Environment {
    /// 显式指定安装根目录
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 从 `CLAW` 环境变量读取，未设置或为空时返回 [`SetrunError::Environment`]
    pub fn from_env() -> SetrunResult<Self> {
        match std::env::var_os(CLAW_VAR) {
            Some(root) if !root.is_empty() => Ok(Self::new(root)),
            _ => Err(SetrunError::Environment { var: CLAW_VAR }),
        }
    }

    /// 安装根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 存放地形与动态地形文件的 scratch 目录
    pub fn scratch_dir(&self) -> PathBuf {
        self.root.join("geoclaw").join("scratch")
    }

    /// 相对路径解析到 scratch 目录下，绝对路径原样返回
    pub fn in_scratch(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.scratch_dir().join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_dir() {
        let env = Environment::new("/opt/clawpack");
        assert_eq!(env.scratch_dir(), PathBuf::from("/opt/clawpack/geoclaw/scratch"));
    }

    #[test]
    fn test_in_scratch_keeps_absolute() {
        let env = Environment::new("/opt/clawpack");
        assert_eq!(
            env.in_scratch(Path::new("quake.tt3")),
            PathBuf::from("/opt/clawpack/geoclaw/scratch/quake.tt3")
        );
        assert_eq!(env.in_scratch(Path::new("/data/quake.tt3")), PathBuf::from("/data/quake.tt3"));
    }
}
