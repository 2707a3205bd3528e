//! Cache key codec.
//!
//! A key is the original array rendered element by element and joined with
//! `,` (no brackets, no whitespace): `[3, 1, 2]` becomes `3,1,2`. Keys are
//! not escaped. Integer elements never contain `,`, `|` or a newline, which is
//! what keeps the cache file parseable.

use std::fmt::Display;

use crate::error::{SortError, SortResult};

pub const ELEMENT_DELIMITER: char = ',';

/// Serialize an array into its cache key.
pub fn cache_key<T: Display>(values: &[T]) -> String {
    let mut key = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            key.push(ELEMENT_DELIMITER);
        }
        key.push_str(&v.to_string());
    }
    key
}

/// Parse a comma separated integer list such as `3,1,2` or `3, -1, 2`.
///
/// An empty (or all-whitespace) string is the empty array.
pub fn parse_array(input: &str) -> SortResult<Vec<i64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(ELEMENT_DELIMITER)
        .enumerate()
        .map(|(idx, raw)| {
            raw.trim()
                .parse::<i64>()
                .map_err(|e| SortError::InvalidInput {
                    message: format!("element {} ({:?}): {}", idx, raw.trim(), e),
                })
        })
        .collect()
}
