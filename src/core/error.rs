//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GbError`], the single error type returned by every
//! fallible git-gb operation. It uses `thiserror` for the definitions and offers
//! small constructors for the variants that carry context.
//!
//! # Public API
//! - [`GbError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GbError>`
//!
//! # Error Categories
//! - **Environment**: repository not found, base branch unresolvable, bad config
//! - **Query**: a git2 call failed while comparing a branch (fatal for the run)
//! - **Cache**: write/clear failures (reported, never fatal)

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-gb
#[derive(Error, Debug)]
pub enum GbError {
    // Environment errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Base branch '{name}' not found")]
    BaseBranchNotFound { name: String },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Query errors
    #[error("{context}: {source}")]
    QueryFailed {
        context: String,
        source: git2::Error,
    },

    #[error("Branch name is not valid UTF-8")]
    InvalidUtf8BranchName,

    #[error("Commit {oid} has an out-of-range commit time")]
    InvalidCommitTime { oid: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Cache errors
    #[error("Failed to serialize cache data: {source}")]
    CacheSerializationFailed { source: serde_json::Error },

    #[error("Failed to write cache file '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to clear cache file '{path}': {source}")]
    CacheClearFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using GbError
pub type Result<T> = std::result::Result<T, GbError>;

impl GbError {
    /// Create a base branch not found error
    pub fn base_branch_not_found(name: impl Into<String>) -> Self {
        Self::BaseBranchNotFound { name: name.into() }
    }

    /// Wrap a git2 failure with the operation that was being attempted
    pub fn query_failed(context: impl Into<String>, source: git2::Error) -> Self {
        Self::QueryFailed {
            context: context.into(),
            source,
        }
    }

    pub fn invalid_commit_time(oid: git2::Oid) -> Self {
        Self::InvalidCommitTime {
            oid: oid.to_string(),
        }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache serialization failed error
    pub fn cache_serialization_failed(source: serde_json::Error) -> Self {
        Self::CacheSerializationFailed { source }
    }

    /// Create a cache write failed error
    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache clear failed error
    pub fn cache_clear_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheClearFailed {
            path: path.into(),
            source,
        }
    }
}
