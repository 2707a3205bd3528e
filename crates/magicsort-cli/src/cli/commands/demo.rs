use anyhow::Context;
use magicsort_core::{key::parse_array, MagicSortConfig};

use super::sort::sort_and_report;
use crate::cli::args::{DemoArgs, OutputFormat};

/// Small enough to finish in a few thousand trials.
pub const DEMO_VALUES: [i64; 7] = [3, 1, 4, 2, 92, 5, 7];

pub fn run(args: DemoArgs, config: &MagicSortConfig) -> anyhow::Result<i32> {
    let values = match &args.values {
        Some(raw) => parse_array(raw).context("failed to parse --values")?,
        None => DEMO_VALUES.to_vec(),
    };

    println!("=== Magic Bogosort Demo ===\n");
    sort_and_report(values, config, OutputFormat::Text)
}
