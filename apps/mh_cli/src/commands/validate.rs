// apps/mh_cli/src/commands/validate.rs

//! 配置验证命令
//!
//! 装配并验证 JSON 输入文档、已写出的 `.data` 目录或内置算例，不写出任何文件。

use anyhow::{bail, Context, Result};
use clap::Args;
use mh_setrun::{Environment, RunConfig, SetrunError, ValidationReport};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// JSON 输入文档
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 已写出的 .data 目录
    #[arg(short, long, conflicts_with = "input")]
    pub data_dir: Option<PathBuf>,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 执行验证命令
pub fn execute(args: ValidateArgs, env: &Environment) -> Result<()> {
    info!("=== MariHydro 配置验证 ===");

    let loaded = match &args.data_dir {
        Some(dir) => {
            println!("\n检查目录: {}", dir.display());
            RunConfig::read_dir(dir)
        }
        None => {
            match &args.input {
                Some(path) => println!("\n检查输入文档: {}", path.display()),
                None => println!("\n检查内置算例"),
            }
            super::load(args.input.as_deref(), env, &[])
        }
    };

    let report = match loaded {
        Ok(config) => {
            println!(
                "  ✓ {} 层, {} 个区域, {} 个测站",
                config.amr().max_levels(),
                config.regions().len(),
                config.gauges().len()
            );
            let mut report = ValidationReport::new();
            for warning in config.warnings() {
                report.add_warning(warning.clone());
            }
            report
        }
        Err(SetrunError::Configuration(report)) => report,
        Err(other) => return Err(other).context("无法读取配置"),
    };

    print_report(&report, args.strict)
}

/// 打印报告；有错误（严格模式下有警告）时返回错误
fn print_report(report: &ValidationReport, strict: bool) -> Result<()> {
    println!("\n=== 验证结果 ===");

    if report.has_errors() {
        println!("\n错误 ({}):", report.error_count());
        for err in &report.errors {
            error!("  ✗ {}", err);
            println!("  ✗ {}", err);
        }
    }

    if report.has_warnings() {
        println!("\n警告 ({}):", report.warning_count());
        for warning in &report.warnings {
            warn!("  ⚠ {}", warning);
            println!("  ⚠ {}", warning);
        }
    }

    let success = report.is_valid() && !(strict && report.has_warnings());
    if success {
        println!("\n✓ 验证通过");
        Ok(())
    } else {
        println!("\n✗ 验证失败");
        bail!(
            "验证失败：发现 {} 个错误，{} 个警告",
            report.error_count(),
            report.warning_count()
        )
    }
}
