// apps/mh_cli/src/commands/write.rs

//! 写出命令
//!
//! 装配 → 验证 → 写出，任一步失败都以非零状态退出。

use anyhow::{Context, Result};
use clap::Args;
use mh_setrun::Environment;
use std::path::PathBuf;
use tracing::info;

/// 写出参数
#[derive(Args)]
pub struct WriteArgs {
    /// 输出目录
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// JSON 输入文档（缺省为内置算例）
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 预留参数
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

/// 执行写出命令
pub fn execute(args: WriteArgs, env: &Environment) -> Result<()> {
    info!("=== MariHydro setrun ===");

    let config = super::load(args.input.as_deref(), env, &args.args).context("配置装配失败")?;
    let written = config
        .write_dir(&args.out)
        .with_context(|| format!("无法写出到 {}", args.out.display()))?;

    println!("写出 {} 个文件到 {}:", written.len(), args.out.display());
    for path in &written {
        println!("  {}", path.display());
    }
    Ok(())
}
