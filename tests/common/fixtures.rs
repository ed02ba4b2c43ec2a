//! Test data generation utilities and predefined scenarios

#![allow(dead_code)]

use super::repository::*;
use git_gb::core::error::Result;

/// Committer date far enough in the past to count as stale
pub const OLD_DATE: &str = "2020-01-01T12:00:00+0000";

/// Scenario: base branch with one merged and one diverged branch
///
/// ```text
/// old-merged   A              (0 ahead, 1 behind, merged, committed 2020)
/// main         A - B          (checked out, base)
/// feature      A - C - D      (2 ahead, 1 behind)
/// ```
pub fn create_diverged_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    commit_file_at(&repo.path, "a.txt", "A", OLD_DATE)?;
    create_branch(&repo.path, "old-merged")?;
    commit_file(&repo.path, "b.txt", "B")?;

    checkout_new_branch(&repo.path, "feature", "old-merged")?;
    commit_file(&repo.path, "c.txt", "C")?;
    commit_file(&repo.path, "d.txt", "D")?;

    checkout(&repo.path, "main")?;
    Ok(repo)
}
