//! Sorting by magic seed.
//!
//! A slice is sorted by searching for a generator seed whose Fisher-Yates
//! shuffle happens to leave the slice in non-decreasing order. Discovered seeds
//! are remembered in a [`SeedStore`] keyed by the original contents, so the
//! next call on the same input only replays one shuffle.
//!
//! ```no_run
//! use magicsort_core::{FileCache, SearchConfig, SeedSearch};
//!
//! let cache = FileCache::with_path("cache.txt");
//! let search = SeedSearch::new(&cache, SearchConfig::default());
//! let mut values = vec![3, 1, 2];
//! let outcome = search.sort(&mut values)?;
//! assert_eq!(values, vec![1, 2, 3]);
//! println!("magic seed: {}", outcome.seed);
//! # Ok::<(), magicsort_core::SortError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod key;
pub mod order;
pub mod search;
pub mod shuffle;

pub use cache::{CacheRecord, FileCache, MemoryCache, NoCache, SeedStore, DEFAULT_CACHE_FILE};
pub use config::{CacheSettings, MagicSortConfig, SearchSettings};
pub use error::{SortError, SortResult};
pub use order::is_sorted;
pub use search::{magic_sort, SearchConfig, SeedSearch, SeedSource, SortOutcome};
pub use shuffle::{next_seed, rng_for_seed, shuffle, shuffle_with_seed, Seed};
