pub mod cache;
pub mod demo;
pub mod sort;

use anyhow::Context;
use magicsort_core::MagicSortConfig;

use super::args::*;
use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let config = resolve_config(&cli.global)?;
    match cli.cmd {
        None => demo::run(DemoArgs::default(), &config),
        Some(Command::Demo(args)) => demo::run(args, &config),
        Some(Command::Sort(args)) => sort::run(args, &config),
        Some(Command::Cache(args)) => cache::run(args.cmd, &config),
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}

/// Defaults, then the config file, then flags.
pub(crate) fn resolve_config(global: &GlobalArgs) -> anyhow::Result<MagicSortConfig> {
    let mut config = match &global.config {
        Some(path) => MagicSortConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MagicSortConfig::default(),
    };

    if let Some(path) = &global.cache {
        config.cache.path = path.clone();
    }
    if global.no_cache {
        config.cache.enabled = false;
    }
    if global.trust_cache {
        config.search.verify_cache_hits = false;
    }
    if let Some(max) = global.max_trials {
        config.search.max_trials = Some(max);
    }
    if let Some(timeout) = global.timeout {
        let timeout: std::time::Duration = timeout.into();
        config.search.timeout_ms = Some(timeout.as_millis().try_into().unwrap_or(u64::MAX));
    }

    Ok(config)
}
