use std::sync::{Mutex, MutexGuard};

use super::record::CacheRecord;
use super::SeedStore;
use crate::shuffle::Seed;

/// In-process store. Access is serialized by a mutex, so one instance can be
/// shared between threads.
#[derive(Debug, Default)]
pub struct MemoryCache {
    records: Mutex<Vec<CacheRecord>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `records`, in order.
    pub fn with_records(records: impl IntoIterator<Item = CacheRecord>) -> Self {
        Self {
            records: Mutex::new(records.into_iter().collect()),
        }
    }

    pub fn records(&self) -> Vec<CacheRecord> {
        self.guard().clone()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<CacheRecord>> {
        // records are plain data; a panicked writer cannot leave them torn
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SeedStore for MemoryCache {
    fn candidates(&self, key: &str) -> Vec<Seed> {
        self.guard()
            .iter()
            .filter(|r| r.key == key)
            .map(|r| r.seed)
            .collect()
    }

    fn append(&self, key: &str, seed: Seed) {
        self.guard().push(CacheRecord::new(key, seed));
    }
}
