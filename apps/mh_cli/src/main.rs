// apps/mh_cli/src/main.rs

//! MariHydro setrun 命令行界面
//!
//! 构建并验证 GeoClaw AMR 运行参数，写出求解器读取的 `.data` 文件。
//!
//! 安装根目录只在这里解析一次（`--claw-root` 或 `CLAW` 环境变量），
//! 之后显式传给各子命令。

mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mh_setrun::Environment;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// MariHydro AMR 运行参数工具
#[derive(Parser)]
#[command(name = "mh_setrun")]
#[command(author = "MariHydro Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build, validate and write GeoClaw AMR run parameters", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// 安装根目录
    #[arg(long, env = "CLAW", global = true)]
    claw_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 构建、验证并写出 .data 文件
    Write(commands::write::WriteArgs),
    /// 只验证，不写出
    Validate(commands::validate::ValidateArgs),
    /// 显示配置摘要
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let env = match cli.claw_root {
        Some(root) => Environment::new(root),
        None => Environment::from_env().context("请设置 CLAW 环境变量或使用 --claw-root")?,
    };

    // 执行命令
    match cli.command {
        Commands::Write(args) => commands::write::execute(args, &env),
        Commands::Validate(args) => commands::validate::execute(args, &env),
        Commands::Info(args) => commands::info::execute(args, &env),
    }
}
