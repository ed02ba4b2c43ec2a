//! Git repository access for branch comparisons.
//!
//! This module wraps the `git2` library behind [`GitRepo`], which enumerates
//! local branches, resolves the base branch, and answers the history queries of
//! [`CommitGraph`]. Nothing here mutates the repository.
//!
//! # Public API
//! - [`GitRepo`]: Read-only interface to the discovered repository
//!
//! # Key Features
//! - **Discovery**: Walks up from the given path to find the repository
//! - **Branch snapshots**: Name, tip, checked-out flag and commit time per branch
//! - **Graph queries**: Descendant test and ahead/behind counts via libgit2

use crate::core::{
    cache::CACHE_FILE_NAME,
    comparison::{BranchTip, CommitGraph},
    error::{GbError, Result},
};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::{BranchType, ErrorCode, Oid, Repository};
use std::path::{Path, PathBuf};

/// Repository config key consulted for the default base branch
const DEFAULT_BRANCH_CONFIG_KEY: &str = "init.defaultBranch";

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        log::debug!("Opened repository at {}", repo.path().display());
        Ok(GitRepo { repo })
    }

    /// Cache file in the common git directory, shared by every linked worktree
    pub fn cache_path(&self) -> PathBuf {
        self.repo.commondir().join(CACHE_FILE_NAME)
    }

    /// Configured default branch name, if the repository (or user) config has one
    pub fn default_branch_name(&self) -> Option<String> {
        let config = self.repo.config().ok()?;
        config
            .get_string(DEFAULT_BRANCH_CONFIG_KEY)
            .ok()
            .filter(|name| !name.is_empty())
    }

    /// Tip commit of the local branch `name`
    pub fn resolve_branch(&self, name: &str) -> Result<Oid> {
        let branch = self
            .repo
            .find_branch(name, BranchType::Local)
            .map_err(|e| match e.code() {
                ErrorCode::NotFound => GbError::base_branch_not_found(name),
                _ => GbError::query_failed(format!("Could not look up branch '{name}'"), e),
            })?;
        branch
            .get()
            .target()
            .ok_or_else(|| GbError::base_branch_not_found(name))
    }

    /// Snapshot every local branch in libgit2's enumeration order
    pub fn local_branches(&self) -> Result<Vec<BranchTip>> {
        let branch_iter = self
            .repo
            .branches(Some(BranchType::Local))
            .map_err(|e| GbError::query_failed("Failed to list branches", e))?;

        let mut tips = Vec::new();
        for branch in branch_iter {
            let (branch, _) =
                branch.map_err(|e| GbError::query_failed("Failed to read branch", e))?;

            let name = branch
                .name()
                .map_err(|e| GbError::query_failed("Failed to get branch name", e))?
                .ok_or(GbError::InvalidUtf8BranchName)?
                .to_string();

            let oid = branch.get().target().ok_or_else(|| {
                GbError::query_failed(
                    format!("Branch '{name}' does not point to a commit"),
                    git2::Error::from_str("symbolic branch reference"),
                )
            })?;

            let committed_at = self.commit_time(oid)?;

            tips.push(BranchTip {
                is_head: branch.is_head(),
                name,
                oid,
                committed_at,
            });
        }

        log::debug!("Found {} local branches", tips.len());
        Ok(tips)
    }

    /// Committer time of `oid`, in the committer's own UTC offset
    pub fn commit_time(&self, oid: Oid) -> Result<DateTime<FixedOffset>> {
        let commit = self
            .repo
            .find_commit(oid)
            .map_err(|e| GbError::query_failed(format!("Could not lookup commit '{oid}'"), e))?;

        let time = commit.committer().when();
        let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or(Utc.fix());
        DateTime::from_timestamp(time.seconds(), 0)
            .map(|utc| utc.with_timezone(&offset))
            .ok_or_else(|| GbError::invalid_commit_time(oid))
    }
}

impl CommitGraph for GitRepo {
    fn descendant_of(&self, commit: Oid, ancestor: Oid) -> Result<bool> {
        self.repo.graph_descendant_of(commit, ancestor).map_err(|e| {
            GbError::query_failed(
                format!("Could not get descendant of '{commit}' and '{ancestor}'"),
                e,
            )
        })
    }

    fn ahead_behind(&self, local: Oid, upstream: Oid) -> Result<(usize, usize)> {
        self.repo.graph_ahead_behind(local, upstream).map_err(|e| {
            GbError::query_failed(
                format!("Could not compute ahead/behind of '{local}' against '{upstream}'"),
                e,
            )
        })
    }
}
