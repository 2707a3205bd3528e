//! YAML configuration.
//!
//! ```yaml
//! cache:
//!   path: cache.txt
//!   enabled: true
//! search:
//!   max_trials: 1000000
//!   timeout_ms: 30000
//!   verify_cache_hits: true
//! ```
//!
//! Every field is optional; omitted fields keep their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::{FileCache, NoCache, SeedStore, DEFAULT_CACHE_FILE};
use crate::error::{SortError, SortResult};
use crate::search::SearchConfig;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MagicSortConfig {
    pub cache: CacheSettings,
    pub search: SearchSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheSettings {
    /// Cache file, relative to the working directory unless absolute.
    pub path: PathBuf,

    /// When false nothing is read from or written to the cache.
    pub enabled: bool,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CACHE_FILE),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSettings {
    pub max_trials: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub verify_cache_hits: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_trials: None,
            timeout_ms: None,
            verify_cache_hits: true,
        }
    }
}

impl MagicSortConfig {
    /// Load from a YAML file.
    pub fn load(path: &Path) -> SortResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SortError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_yaml(&content).map_err(|e| match e {
            SortError::Config { message } => SortError::Config {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })
    }

    pub fn from_yaml(content: &str) -> SortResult<Self> {
        // an empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SortError::Config {
            message: format!("invalid config: {}", e),
        })
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_trials: self.search.max_trials,
            timeout: self.search.timeout_ms.map(Duration::from_millis),
            verify_cache_hits: self.search.verify_cache_hits,
        }
    }

    /// Store selected by the cache settings.
    pub fn open_store(&self) -> Box<dyn SeedStore> {
        if self.cache.enabled {
            Box::new(FileCache::with_path(&self.cache.path))
        } else {
            Box::new(NoCache)
        }
    }
}
