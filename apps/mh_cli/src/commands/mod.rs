// apps/mh_cli/src/commands/mod.rs

//! 子命令

pub mod info;
pub mod validate;
pub mod write;

use std::path::Path;

use mh_setrun::{scenario, Environment, RunConfig, RunSpec, SetrunResult};
use tracing::{debug, info};

/// 从 JSON 输入文档装配，未给出时使用内置算例
pub(crate) fn load(input: Option<&Path>, env: &Environment, args: &[String]) -> SetrunResult<RunConfig> {
    match input {
        Some(path) => {
            info!("输入文档: {}", path.display());
            if !args.is_empty() {
                debug!("预留参数未使用: {:?}", args);
            }
            RunSpec::from_file(path)?.assemble(env)
        }
        None => scenario::assemble(env, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reserved_args_ignored_on_both_paths() {
        let dir = TempDir::new().unwrap();
        let env = Environment::new(dir.path());
        let args = vec!["--future".to_string()];

        let builtin = load(None, &env, &args).unwrap();
        let path = dir.path().join("lake.json");
        fs::write(&path, RunSpec::from_config(&builtin).to_json_string().unwrap()).unwrap();

        let from_input = load(Some(&path), &env, &args).unwrap();
        assert_eq!(from_input, builtin);
    }
}
