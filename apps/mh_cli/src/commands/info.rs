// apps/mh_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 显示配置摘要；`--at T X Y` 显示该时空点允许的加密层级。

use anyhow::{Context, Result};
use clap::Args;
use mh_setrun::{Environment, RunConfig, RunSpec};
use std::path::PathBuf;
use tracing::info;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// JSON 输入文档（缺省为内置算例）
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 查询点的层级范围
    #[arg(long, num_args = 3, value_names = ["T", "X", "Y"], allow_negative_numbers = true)]
    pub at: Option<Vec<f64>>,

    /// 以 JSON 输入文档的形式打印完整配置
    #[arg(long)]
    pub json: bool,
}

/// 执行信息命令
pub fn execute(args: InfoArgs, env: &Environment) -> Result<()> {
    info!("=== MariHydro 信息 ===");

    let config = super::load(args.input.as_deref(), env, &[]).context("配置装配失败")?;

    if args.json {
        let text = RunSpec::from_config(&config).to_json_string()?;
        println!("{}", text);
        return Ok(());
    }

    print_summary(&config, env);

    if let Some(&[t, x, y]) = args.at.as_deref() {
        println!();
        print_levels_at(&config, t, x, y);
    }
    Ok(())
}

fn print_summary(config: &RunConfig, env: &Environment) {
    let domain = config.domain();
    let amr = config.amr();
    let schedule = config.schedule();
    let sources = config.sources();
    let (dx, dy) = domain.cell_size();
    let (fx, fy) = amr.finest_cell_size(domain);

    println!("=== 计算域 ===");
    println!("范围: {} ({})", domain, domain.coordinate_system());
    println!("网格: {} × {}", domain.num_cells()[0], domain.num_cells()[1]);
    println!("单元尺寸: {:.6} × {:.6}", dx, dy);

    println!("\n=== AMR ===");
    println!("层数: {}", amr.max_levels());
    println!("加密比 x: {:?}", amr.ratios().x);
    println!("加密比 y: {:?}", amr.ratios().y);
    println!("加密比 t: {:?}", amr.ratios().t);
    println!("最细单元: {:.3e} × {:.3e}", fx, fy);

    println!("\n=== 时间计划 ===");
    println!("t0: {}", schedule.t0());
    match schedule.output().final_time() {
        Some(t) => println!("最终时间: {}", t),
        None => println!("最终时间: 按步数"),
    }
    println!("output_style: {}", schedule.output().code());
    println!("checkpt_style: {}", schedule.checkpoint().code());

    println!("\n=== 条目 ===");
    println!("区域: {}", config.regions().len());
    println!("测站: {}", config.gauges().len());
    println!("地形文件: {}", sources.topo().len());
    println!("动态地形: {}", if sources.dtopo().is_some() { 1 } else { 0 });
    println!("固定网格: {}", sources.fixed_grids().len());
    println!("fgmax 文件: {} (num_fgmax_val = {})", sources.fgmax().len(), sources.num_fgmax_val());
    println!("scratch 目录: {}", env.scratch_dir().display());

    if !config.warnings().is_empty() {
        println!("\n警告 ({}):", config.warnings().len());
        for warning in config.warnings() {
            println!("  ⚠ {}", warning);
        }
    }
}

fn print_levels_at(config: &RunConfig, t: f64, x: f64, y: f64) {
    println!("=== ({}, {}, {}) ===", t, x, y);
    let covering = config.regions().covering(t, x, y);
    if covering.is_empty() {
        println!("无覆盖区域");
    } else {
        for i in &covering {
            let region = &config.regions().as_slice()[*i];
            println!("  区域[{}]: {}", i, region.levels());
        }
    }
    println!("允许层级: {}", config.resolve_levels(t, x, y));
}
