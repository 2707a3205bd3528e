//! Error types for seed search and configuration.

use std::collections::TryReserveError;
use std::time::Duration;

use crate::shuffle::Seed;

/// Seed search errors.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// The working copy of the input could not be allocated.
    #[error("failed to copy input of {len} elements: {source}")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    /// Trial limit reached without a sorting seed.
    #[error("search exhausted after {trials} trials (next seed {next_seed})")]
    SearchExhausted { trials: u64, next_seed: Seed },

    /// Time limit reached without a sorting seed.
    #[error("search timed out after {elapsed:?} ({trials} trials)")]
    Timeout { elapsed: Duration, trials: u64 },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Array literal could not be parsed.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl SortError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Search gave up
            Self::SearchExhausted { .. } => 1,
            Self::Timeout { .. } => 1,

            // Caller / environment problems
            Self::Config { .. } => 2,
            Self::InvalidInput { .. } => 2,
            Self::Allocation { .. } => 2,
        }
    }

    /// Whether the search stopped because of a configured limit.
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::SearchExhausted { .. } | Self::Timeout { .. })
    }
}

/// Result type for seed search operations.
pub type SortResult<T> = Result<T, SortError>;
