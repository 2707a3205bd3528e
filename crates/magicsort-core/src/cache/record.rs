use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shuffle::Seed;

pub(crate) const FIELD_DELIMITER: char = '|';

/// One cache line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Serialized original array.
    pub key: String,

    /// Seed whose shuffle sorts it.
    pub seed: Seed,
}

impl CacheRecord {
    pub fn new(key: impl Into<String>, seed: Seed) -> Self {
        Self {
            key: key.into(),
            seed,
        }
    }
}

impl fmt::Display for CacheRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key, FIELD_DELIMITER, self.seed)
    }
}

/// How a raw line reads.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Record { key: &'a str, seed: Seed },
    /// Key present but the seed field is not a `u32`.
    Malformed { key: &'a str, raw_seed: &'a str },
    /// No field delimiter at all.
    Skip,
}

/// Split at the first `|`. A trailing `\r` is ignored.
pub(crate) fn parse_line(line: &str) -> Line<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let Some((key, raw_seed)) = line.split_once(FIELD_DELIMITER) else {
        return Line::Skip;
    };
    match raw_seed.parse::<Seed>() {
        Ok(seed) => Line::Record { key, seed },
        Err(_) => Line::Malformed { key, raw_seed },
    }
}
