use std::fmt::Display;

use magicsort_core::{Seed, SortOutcome};
use serde::Serialize;

use super::args::OutputFormat;

/// `[3, 1, 2]`
pub fn format_array<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[derive(Debug, Serialize)]
pub struct SortReport<'a> {
    pub original: &'a [i64],
    pub sorted: &'a [i64],
    pub seed: Seed,
    pub source: &'static str,
    pub trials: u64,
}

impl<'a> SortReport<'a> {
    pub fn new(original: &'a [i64], sorted: &'a [i64], outcome: &SortOutcome) -> Self {
        Self {
            original,
            sorted,
            seed: outcome.seed,
            source: outcome.source.as_str(),
            trials: outcome.trials(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        Ok(match format {
            OutputFormat::Text => format!(
                "Original array: {}\nSorted array with seed {}: {}",
                format_array(self.original),
                self.seed,
                format_array(self.sorted)
            ),
            OutputFormat::Json => serde_json::to_string(self)?,
        })
    }
}
