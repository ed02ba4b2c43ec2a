//! Persistent memoization of branch comparisons.
//!
//! The cache lives in the repository metadata directory as a single JSON object
//! mapping `"<base>..<branch>"` commit pairs to their computed relationship. Keys
//! are derived from commit ids only, so a branch that moves gets a new key and
//! never reads a stale entry.
//!
//! # Public API
//! - [`cache_key`]: Key derivation for a (base, branch) commit pair
//! - [`CacheEntry`]: Persisted ahead/behind/merged triple
//! - [`CacheStore`]: In-memory map loaded once, flushed in full at exit
//!
//! # Cache Strategy
//! - **Best-effort load**: a missing, unreadable or malformed file is an empty cache
//! - **Per-entry tolerance**: entries that do not parse are dropped as misses
//! - **Full overwrite**: `flush` rewrites the whole file, no atomic rename

use crate::core::error::{GbError, Result};
use git2::Oid;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the cache inside the repository's git directory
pub const CACHE_FILE_NAME: &str = "gb_cache.json";

const KEY_SEPARATOR: &str = "..";

/// Build the cache key for a comparison of `branch` against `base`
pub fn cache_key(base: Oid, branch: Oid) -> String {
    format!("{base}{KEY_SEPARATOR}{branch}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub ahead: usize,
    pub behind: usize,
    #[serde(rename = "isMerged")]
    pub is_merged: bool,
}

#[derive(Debug)]
pub struct CacheStore {
    path: PathBuf,
    entries: BTreeMap<String, CacheEntry>,
}

impl CacheStore {
    /// Start with an empty cache that will be flushed to `path`
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Load the cache file at `path`. Never fails: anything that cannot be read
    /// or parsed yields an empty store bound to the same path.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        log::debug!("Loading comparison cache from {}", path.display());

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No cache file yet, starting cold");
                return Self::empty(path);
            }
            Err(e) => {
                log::debug!("Cache file unreadable ({e}), starting cold");
                return Self::empty(path);
            }
        };

        let raw: serde_json::Map<String, serde_json::Value> = match serde_json::from_str(&content)
        {
            Ok(raw) => raw,
            Err(e) => {
                log::debug!("Cache file is corrupt ({e}), starting cold");
                return Self::empty(path);
            }
        };

        let mut entries = BTreeMap::new();
        for (key, value) in raw {
            match serde_json::from_value::<CacheEntry>(value) {
                Ok(entry) => {
                    entries.insert(key, entry);
                }
                Err(e) => log::warn!("Skipping malformed cache entry '{key}': {e}"),
            }
        }

        log::debug!("Loaded {} cached comparisons", entries.len());
        Self { path, entries }
    }

    /// Delete the cache file so the next load starts cold. A missing file is fine.
    pub fn clear(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => {
                log::debug!("Removed cache file {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(GbError::cache_clear_failed(path, e)),
        }
    }

    pub fn lookup(&self, base: Oid, branch: Oid) -> Option<CacheEntry> {
        self.entries.get(&cache_key(base, branch)).copied()
    }

    pub fn record(&mut self, base: Oid, branch: Oid, entry: CacheEntry) {
        self.entries.insert(cache_key(base, branch), entry);
    }

    /// Keep only the entries whose key is in `live_keys`, returning how many were dropped
    pub fn retain_keys(&mut self, live_keys: &HashSet<String>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| live_keys.contains(key));
        before - self.entries.len()
    }

    /// Serialize the whole map and overwrite the cache file
    pub fn flush(&self) -> Result<()> {
        let json =
            serde_json::to_string(&self.entries).map_err(GbError::cache_serialization_failed)?;

        fs::write(&self.path, json).map_err(|e| GbError::cache_write_failed(&self.path, e))?;

        log::debug!(
            "Flushed {} cached comparisons to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
