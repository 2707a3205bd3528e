//! Magic seed stores.
//!
//! # File format
//!
//! ```text
//! 3,1,2|17
//! 5,4|0
//! ```
//!
//! One `<key>|<seed>` record per line, appended in discovery order and never
//! rewritten. Duplicate keys may accumulate; lookups return the first one.
//! Seeds are only valid for the generator in [`crate::shuffle`].

mod file;
mod memory;
mod record;

pub use file::{FileCache, DEFAULT_CACHE_FILE};
pub use memory::MemoryCache;
pub use record::CacheRecord;

use crate::shuffle::Seed;

/// Storage for discovered seeds, keyed by [`crate::key::cache_key`].
///
/// Stores never fail the caller: an unreadable store reads as empty and a
/// failed append is dropped. Implementations log what they swallow.
pub trait SeedStore {
    /// Every seed recorded for `key`, in store order.
    fn candidates(&self, key: &str) -> Vec<Seed>;

    /// First seed recorded for `key`.
    fn lookup(&self, key: &str) -> Option<Seed> {
        self.candidates(key).into_iter().next()
    }

    /// Record a seed for `key`.
    fn append(&self, key: &str, seed: Seed);
}

/// Store that remembers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl SeedStore for NoCache {
    fn candidates(&self, _key: &str) -> Vec<Seed> {
        Vec::new()
    }

    fn append(&self, _key: &str, _seed: Seed) {}
}
