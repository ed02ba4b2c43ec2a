//! User configuration for the policy knobs of a run.
//!
//! Both values have defaults, so the config file is optional and any field may
//! be left out.

use crate::core::dirs::get_config_directory;
use crate::core::error::{GbError, Result};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

const FALLBACK_BASE_BRANCH: &str = "master";
const DEFAULT_STALE_AFTER_DAYS: i64 = 14;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GbConfig {
    /// Base branch used when none is given and the repository names no default
    pub default_base_branch: String,
    /// Branches whose tip is older than this many days are shown as stale
    pub stale_after_days: i64,
}

impl Default for GbConfig {
    fn default() -> Self {
        Self {
            default_base_branch: FALLBACK_BASE_BRANCH.to_string(),
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
        }
    }
}

impl GbConfig {
    pub fn config_file() -> PathBuf {
        get_config_directory().join(CONFIG_FILE_NAME)
    }

    /// Load from the per-user config directory, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| GbError::config_read_failed(path, e))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| GbError::config_parse_failed(path, e))?;

        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn stale_after(&self) -> TimeDelta {
        TimeDelta::try_days(self.stale_after_days).unwrap_or(TimeDelta::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = GbConfig::load_from(&temp_dir.path().join(CONFIG_FILE_NAME))?;
        assert_eq!(config, GbConfig::default());
        assert_eq!(config.default_base_branch, "master");
        assert_eq!(config.stale_after(), TimeDelta::days(14));
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"stale_after_days": 30}"#)?;

        let config = GbConfig::load_from(&path)?;
        assert_eq!(config.stale_after_days, 30);
        assert_eq!(config.default_base_branch, "master");
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "default_base_branch = trunk")?;

        assert!(matches!(
            GbConfig::load_from(&path),
            Err(GbError::ConfigParseFailed { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_huge_threshold_saturates() {
        let config = GbConfig {
            stale_after_days: i64::MAX,
            ..Default::default()
        };
        assert_eq!(config.stale_after(), TimeDelta::MAX);
    }

    #[test]
    fn test_config_file_lives_under_git_gb() {
        assert!(GbConfig::config_file().ends_with("git-gb/config.json"));
    }
}
