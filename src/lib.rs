//! git-gb - how every local branch relates to a base branch.
//!
//! For each local branch the tool reports whether it is merged into the base
//! branch and how many commits it is ahead and behind. Results are memoized in
//! a JSON file inside the repository's git directory, keyed by the commit pair,
//! so repeated runs only compute relationships for branch tips that moved.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Comparison engine and the [`CommitGraph`] seam
//! - Commit-pair cache
//! - Ordering, filtering and row styling
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    cache_key,
    column_width,
    paint_row,
    row_style,
    sort_by_commit_time,

    BranchTip,
    // Cache
    CacheEntry,
    CacheStore,
    CommitGraph,
    // Comparison engine
    Comparison,
    Divergence,
    Filters,
    // Configuration
    GbConfig,
    // Error handling
    GbError,
    // Git operations
    GitRepo,
    Result,
    RowStyle,
};
