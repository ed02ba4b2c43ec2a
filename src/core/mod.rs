//! Core functionality for the git-gb tool.
//!
//! This module provides the comparison engine, its on-disk cache, the git
//! accessor it queries, and the pieces used to order and print the report.

pub mod cache;
pub mod colors;
pub mod comparison;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod ordering;
pub mod output;

// === Error handling ===
pub use error::{GbError, Result};

// === Git operations ===
// Read-only repository access: branches, tips, graph queries
pub use git::GitRepo;

// === Comparison engine ===
pub use comparison::{BranchTip, CommitGraph, Comparison, Divergence};

// === Cache ===
// Commit-pair keyed memoization persisted in the git directory
pub use cache::{cache_key, CacheEntry, CacheStore};

// === Ordering & filtering ===
pub use ordering::{column_width, sort_by_commit_time, Filters};

// === Configuration ===
pub use config::GbConfig;

// === Color system ===
pub use colors::{paint_row, row_style, RowStyle};

// === Output formatting ===
pub use output::{print_error, print_warning};
