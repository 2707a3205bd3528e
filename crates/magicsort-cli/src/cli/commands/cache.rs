use magicsort_core::key::cache_key;
use magicsort_core::{FileCache, MagicSortConfig};
use tracing::debug;

use crate::cli::args::{CacheCmd, OutputFormat};
use crate::exit_codes::{NOT_FOUND, SUCCESS};

pub fn run(cmd: CacheCmd, config: &MagicSortConfig) -> anyhow::Result<i32> {
    match cmd {
        CacheCmd::List { format } => list(config, format),
        CacheCmd::Lookup { values } => lookup(config, &values),
    }
}

/// Lists the file even when the cache is disabled for sorting.
fn list(config: &MagicSortConfig, format: OutputFormat) -> anyhow::Result<i32> {
    let records = FileCache::with_path(&config.cache.path).records();
    match format {
        OutputFormat::Text => {
            for record in &records {
                println!("{record}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(SUCCESS)
}

fn lookup(config: &MagicSortConfig, values: &[i64]) -> anyhow::Result<i32> {
    let key = cache_key(values);
    match config.open_store().lookup(&key) {
        Some(seed) => {
            println!("{seed}");
            Ok(SUCCESS)
        }
        None => {
            debug!(key = %key, "no cached seed");
            eprintln!("no cached seed for [{key}]");
            Ok(NOT_FOUND)
        }
    }
}
