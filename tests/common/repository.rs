//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories with branches and dated
//! commits, and for running the git-gb binary against them in isolation.

#![allow(dead_code)]

use git_gb::core::error::{GbError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result. The TempDir must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Per-test stand-in for the user's home directory
    pub fn home_dir(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// Per-test stand-in for `$XDG_CONFIG_HOME`
    pub fn config_home(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    pub fn cache_file(&self) -> PathBuf {
        self.path.join(".git").join("gb_cache.json")
    }

    /// Write a git-gb config file into this test's config home
    pub fn write_gb_config(&self, json: &str) -> Result<()> {
        let dir = self.config_home().join("git-gb");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("config.json"), json)?;
        Ok(())
    }

    /// A git-gb command running inside the repository with user-level
    /// configuration isolated from the machine running the tests
    pub fn gb_command(&self) -> anyhow::Result<Command> {
        use assert_cmd::prelude::*;

        let mut cmd = Command::cargo_bin("git-gb")?;
        cmd.current_dir(&self.path)
            .env("HOME", self.home_dir())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE");
        Ok(cmd)
    }
}

fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(GbError::Io)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Sets up a fresh git repository whose unborn branch is `main`
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(GbError::Io)?;
    let repo_path = temp_dir.path().join("repo");
    fs::create_dir_all(&repo_path)?;
    fs::create_dir_all(temp_dir.path().join("home"))?;
    fs::create_dir_all(temp_dir.path().join("config"))?;

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit on `main`
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    commit_file(&repo.path, "initial.txt", "Initial commit")?;
    Ok(repo)
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

/// Create `filename`, stage it and commit it with the current time
pub fn commit_file(repo_path: &Path, filename: &str, message: &str) -> Result<()> {
    create_file(repo_path, filename, message)?;
    git(repo_path, &["add", filename])?;
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

/// Like [`commit_file`] but with fixed author and committer dates (RFC 2822 or ISO 8601)
pub fn commit_file_at(repo_path: &Path, filename: &str, message: &str, date: &str) -> Result<()> {
    create_file(repo_path, filename, message)?;
    git(repo_path, &["add", filename])?;
    Command::new("git")
        .args(["commit", "-m", message])
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .current_dir(repo_path)
        .output()
        .map_err(GbError::Io)?;
    Ok(())
}

pub fn create_branch(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["branch", name])?;
    Ok(())
}

pub fn checkout(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["checkout", name])?;
    Ok(())
}

pub fn checkout_new_branch(repo_path: &Path, name: &str, start: &str) -> Result<()> {
    git(repo_path, &["checkout", "-b", name, start])?;
    Ok(())
}

pub fn set_git_config(repo_path: &Path, key: &str, value: &str) -> Result<()> {
    git(repo_path, &["config", key, value])?;
    Ok(())
}

/// Full hex id of the commit `rev` points to
pub fn rev_parse(repo_path: &Path, rev: &str) -> Result<String> {
    git(repo_path, &["rev-parse", rev])
}
