//! Branch-versus-base comparison engine.
//!
//! A [`Comparison`] is built for every local branch, seeded from the
//! [`CacheStore`] when the `(base, branch)` commit pair was seen before, and
//! resolved at most once per run against a [`CommitGraph`].
//!
//! # Public API
//! - [`CommitGraph`]: The two history queries the engine needs
//! - [`BranchTip`]: Snapshot of a local branch taken at enumeration time
//! - [`Divergence`]: Ahead/behind/merged, always known as a unit
//! - [`Comparison`]: One branch's relationship to the base

use crate::core::{
    cache::{cache_key, CacheEntry, CacheStore},
    error::Result,
};
use chrono::{DateTime, FixedOffset};
use git2::Oid;

/// History queries answered by the repository
pub trait CommitGraph {
    /// Whether `commit` is a strict descendant of `ancestor`
    fn descendant_of(&self, commit: Oid, ancestor: Oid) -> Result<bool>;

    /// Commits unique to `local` and to `upstream`, as `(ahead, behind)`
    fn ahead_behind(&self, local: Oid, upstream: Oid) -> Result<(usize, usize)>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTip {
    pub name: String,
    pub oid: Oid,
    pub is_head: bool,
    pub committed_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divergence {
    pub ahead: usize,
    pub behind: usize,
    pub is_merged: bool,
}

impl From<CacheEntry> for Divergence {
    fn from(entry: CacheEntry) -> Self {
        Self {
            ahead: entry.ahead,
            behind: entry.behind,
            is_merged: entry.is_merged,
        }
    }
}

impl From<Divergence> for CacheEntry {
    fn from(divergence: Divergence) -> Self {
        Self {
            ahead: divergence.ahead,
            behind: divergence.behind,
            is_merged: divergence.is_merged,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Comparison {
    tip: BranchTip,
    base_oid: Oid,
    divergence: Option<Divergence>,
}

impl Comparison {
    /// Create a comparison for `tip`, reusing a cached result for the same commit pair
    pub fn new(tip: BranchTip, base_oid: Oid, cache: &CacheStore) -> Self {
        let divergence = cache.lookup(base_oid, tip.oid).map(Divergence::from);
        if divergence.is_some() {
            log::debug!("Cache hit for '{}'", tip.name);
        } else {
            log::debug!("Cache miss for '{}'", tip.name);
        }

        Self {
            tip,
            base_oid,
            divergence,
        }
    }

    /// Compute ahead/behind/merged unless already known, mirroring the result
    /// into `cache`. Any graph failure is returned and aborts the run.
    pub fn resolve<G>(&mut self, graph: &G, cache: &mut CacheStore) -> Result<Divergence>
    where
        G: CommitGraph + ?Sized,
    {
        if let Some(divergence) = self.divergence {
            return Ok(divergence);
        }

        let divergence = if self.tip.oid == self.base_oid {
            Divergence {
                ahead: 0,
                behind: 0,
                is_merged: true,
            }
        } else {
            let is_merged = graph.descendant_of(self.base_oid, self.tip.oid)?;
            let (ahead, behind) = graph.ahead_behind(self.tip.oid, self.base_oid)?;
            Divergence {
                ahead,
                behind,
                is_merged,
            }
        };

        log::debug!(
            "Resolved '{}': ahead {}, behind {}, merged {}",
            self.tip.name,
            divergence.ahead,
            divergence.behind,
            divergence.is_merged
        );

        self.divergence = Some(divergence);
        cache.record(self.base_oid, self.tip.oid, divergence.into());
        Ok(divergence)
    }

    pub fn cache_key(&self) -> String {
        cache_key(self.base_oid, self.tip.oid)
    }

    pub fn divergence(&self) -> Option<Divergence> {
        self.divergence
    }

    pub fn name(&self) -> &str {
        &self.tip.name
    }

    pub fn is_head(&self) -> bool {
        self.tip.is_head
    }

    pub fn committed_at(&self) -> DateTime<FixedOffset> {
        self.tip.committed_at
    }
}
