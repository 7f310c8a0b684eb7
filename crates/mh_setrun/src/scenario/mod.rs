// crates/mh_setrun/src/scenario/mod.rs

//! 内置算例与装配入口

mod gauge_table;
mod lake_3088;

pub use gauge_table::CROSS_SECTION_GAUGES;
pub use lake_3088::{cross_section_gauges, lake_3088, lake_3088_base, LAKE_3088_REGIONS, T_FINAL};

use tracing::{debug, info};

use crate::config::RunConfig;
use crate::env::Environment;
use crate::error::SetrunResult;

/// 装配内置算例
///
/// `args` 为预留的自由参数，目前不参与装配。
pub fn assemble(env: &Environment, args: &[String]) -> SetrunResult<RunConfig> {
    if !args.is_empty() {
        debug!("预留参数未使用: {:?}", args);
    }
    debug!("scratch 目录: {}", env.scratch_dir().display());

    let config = lake_3088()?;
    info!(
        "算例 lake_3088: {} 层, {} 个区域, {} 个测站",
        config.amr().max_levels(),
        config.regions().len(),
        config.gauges().len()
    );
    Ok(config)
}
