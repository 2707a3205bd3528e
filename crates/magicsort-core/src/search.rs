//! Cache lookup and brute-force seed search.

use std::fmt::Display;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::cache::SeedStore;
use crate::error::{SortError, SortResult};
use crate::key::cache_key;
use crate::order::is_sorted;
use crate::shuffle::{next_seed, shuffle_with_seed, Seed};

/// Trials between progress logs.
const PROGRESS_INTERVAL: u64 = 1 << 20;

/// Trials between clock reads when a timeout is set.
const CLOCK_INTERVAL: u64 = 64;

/// Search behavior. The default searches forever and verifies cache hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Give up after this many shuffles.
    pub max_trials: Option<u64>,

    /// Give up after this much wall time.
    pub timeout: Option<Duration>,

    /// Replay cached seeds and only accept one that actually sorts.
    /// When false the first cached seed is applied blindly.
    pub verify_cache_hits: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_trials: None,
            timeout: None,
            verify_cache_hits: true,
        }
    }
}

/// Where a seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    Cache,
    Search { trials: u64 },
}

impl SeedSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Search { .. } => "search",
        }
    }
}

/// Result of a successful sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutcome {
    pub seed: Seed,
    pub source: SeedSource,
}

impl SortOutcome {
    pub fn from_cache(&self) -> bool {
        matches!(self.source, SeedSource::Cache)
    }

    /// Shuffles performed by the search; zero for cache hits.
    pub fn trials(&self) -> u64 {
        match self.source {
            SeedSource::Cache => 0,
            SeedSource::Search { trials } => trials,
        }
    }
}

/// Seed search bound to a store.
#[derive(Debug)]
pub struct SeedSearch<'a, S: SeedStore + ?Sized> {
    store: &'a S,
    config: SearchConfig,
}

impl<'a, S: SeedStore + ?Sized> SeedSearch<'a, S> {
    pub fn new(store: &'a S, config: SearchConfig) -> Self {
        Self { store, config }
    }

    /// Sort `values` in place and return the seed that did it.
    ///
    /// A cached seed for the original contents is tried first. Otherwise seeds
    /// are enumerated from 0 until one shuffle comes out sorted, and the winner
    /// is appended to the store. If a configured limit stops the search,
    /// `values` is restored to its original contents.
    pub fn sort<T>(&self, values: &mut [T]) -> SortResult<SortOutcome>
    where
        T: Clone + PartialOrd + Display,
    {
        let original = copy_original(values)?;
        let key = cache_key(&original);

        if let Some(seed) = self.from_cache(&key, &original, values) {
            debug!(key = %key, seed, "cache hit");
            return Ok(SortOutcome {
                seed,
                source: SeedSource::Cache,
            });
        }

        debug!(key = %key, len = original.len(), "cache miss, searching");
        match self.search(&original, values) {
            Ok((seed, trials)) => {
                info!(key = %key, seed, trials, "magic seed found");
                self.store.append(&key, seed);
                Ok(SortOutcome {
                    seed,
                    source: SeedSource::Search { trials },
                })
            }
            Err(e) => {
                values.clone_from_slice(&original);
                warn!(key = %key, error = %e, "search stopped");
                Err(e)
            }
        }
    }

    fn from_cache<T>(&self, key: &str, original: &[T], values: &mut [T]) -> Option<Seed>
    where
        T: Clone + PartialOrd,
    {
        if !self.config.verify_cache_hits {
            let seed = self.store.lookup(key)?;
            shuffle_with_seed(values, seed);
            return Some(seed);
        }

        let candidates = self.store.candidates(key);
        for &seed in &candidates {
            values.clone_from_slice(original);
            shuffle_with_seed(values, seed);
            if is_sorted(values) {
                return Some(seed);
            }
        }

        if !candidates.is_empty() {
            warn!(
                key,
                rejected = ?candidates,
                "cached seeds do not sort this input, searching again"
            );
            values.clone_from_slice(original);
        }
        None
    }

    /// Returns the winning seed and the number of shuffles it took.
    fn search<T>(&self, original: &[T], values: &mut [T]) -> SortResult<(Seed, u64)>
    where
        T: Clone + PartialOrd,
    {
        let started = Instant::now();
        let mut seed: Seed = 0;
        let mut trials: u64 = 0;

        loop {
            if let Some(max) = self.config.max_trials {
                if trials >= max {
                    return Err(SortError::SearchExhausted {
                        trials,
                        next_seed: seed,
                    });
                }
            }
            if let Some(limit) = self.config.timeout {
                if trials % CLOCK_INTERVAL == 0 {
                    let elapsed = started.elapsed();
                    if elapsed >= limit {
                        return Err(SortError::Timeout { elapsed, trials });
                    }
                }
            }

            values.clone_from_slice(original);
            shuffle_with_seed(values, seed);
            trials += 1;
            if is_sorted(values) {
                return Ok((seed, trials));
            }

            if trials % PROGRESS_INTERVAL == 0 {
                debug!(trials, seed, elapsed = ?started.elapsed(), "still searching");
            }

            seed = next_seed(seed);
            if seed == 0 {
                debug!(trials, "seed space exhausted, wrapping to 0");
            }
        }
    }
}

/// Sort with default settings: unbounded search, verified cache hits.
pub fn magic_sort<T, S>(values: &mut [T], store: &S) -> SortResult<Seed>
where
    T: Clone + PartialOrd + Display,
    S: SeedStore + ?Sized,
{
    SeedSearch::new(store, SearchConfig::default())
        .sort(values)
        .map(|outcome| outcome.seed)
}

fn copy_original<T: Clone>(values: &[T]) -> SortResult<Vec<T>> {
    let mut original = Vec::new();
    original
        .try_reserve_exact(values.len())
        .map_err(|source| SortError::Allocation {
            len: values.len(),
            source,
        })?;
    original.extend_from_slice(values);
    Ok(original)
}
