use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::record::{parse_line, CacheRecord, Line};
use super::SeedStore;
use crate::shuffle::Seed;

/// Default cache location, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = "cache.txt";

/// Append-only text file of `key|seed` records.
///
/// No locking: concurrent writers may interleave lines.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    /// Cache at [`DEFAULT_CACHE_FILE`].
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CACHE_FILE)
    }

    /// Cache at a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All well-formed records in file order. A missing file is empty.
    pub fn records(&self) -> Vec<CacheRecord> {
        let mut records = Vec::new();
        self.scan(|key, seed| {
            records.push(CacheRecord::new(key, seed));
            ControlFlow::Continue(())
        });
        records
    }

    /// Feed each well-formed record to `visit` until it breaks.
    fn scan<F>(&self, mut visit: F)
    where
        F: FnMut(&str, Seed) -> ControlFlow<()>,
    {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "cache file missing");
                return;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cache unreadable, treating as empty");
                return;
            }
        };

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return,
                Ok(_) => line_no += 1,
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        line = line_no + 1,
                        error = %e,
                        "cache read stopped"
                    );
                    return;
                }
            }

            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
            let Ok(line) = std::str::from_utf8(raw) else {
                warn!(
                    path = %self.path.display(),
                    line = line_no,
                    "skipping cache line that is not UTF-8"
                );
                continue;
            };

            match parse_line(line) {
                Line::Record { key, seed } => {
                    if visit(key, seed).is_break() {
                        return;
                    }
                }
                Line::Malformed { key, raw_seed } => {
                    warn!(
                        path = %self.path.display(),
                        line = line_no,
                        key,
                        raw_seed,
                        "skipping cache record with malformed seed"
                    );
                }
                Line::Skip => {}
            }
        }
    }
}

impl Default for FileCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedStore for FileCache {
    fn candidates(&self, key: &str) -> Vec<Seed> {
        let mut seeds = Vec::new();
        self.scan(|k, seed| {
            if k == key {
                seeds.push(seed);
            }
            ControlFlow::Continue(())
        });
        seeds
    }

    fn lookup(&self, key: &str) -> Option<Seed> {
        let mut found = None;
        self.scan(|k, seed| {
            if k == key {
                found = Some(seed);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        found
    }

    fn append(&self, key: &str, seed: Seed) {
        let line = format!("{}\n", CacheRecord::new(key, seed));
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| f.write_all(line.as_bytes()));

        match result {
            Ok(()) => debug!(path = %self.path.display(), key, seed, "seed cached"),
            Err(e) => warn!(
                path = %self.path.display(),
                key,
                seed,
                error = %e,
                "failed to persist seed"
            ),
        }
    }
}
