//! Configuration for civix
//!
//! Stored in TOML under the user config directory; a missing file yields
//! defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// civix configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Department assigned when implementing an unassigned issue
    pub default_department: String,

    /// Override for the profile storage directory
    pub storage_dir: Option<PathBuf>,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_department: "Public Works".to_string(),
            storage_dir: None,
            display: DisplayConfig::default(),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use colors in CLI output
    pub colors: bool,

    /// Date format for display
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: true,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Invalid config: {e}")))?;
        Ok(config)
    }

    /// Load config from the default location, if any
    ///
    /// `~/.config/civix/config.toml` (or the platform equivalent).
    pub fn load_default() -> crate::Result<Self> {
        match dirs::config_dir() {
            Some(dir) => Self::load(&dir.join("civix").join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Save config to a TOML file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config.default_department, "Public Works");
        assert!(config.display.colors);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "default_department = \"Sanitation\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_department, "Sanitation");
        assert_eq!(config.display.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_save_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let mut config = Config::default();
        config.display.colors = false;
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert!(!loaded.display.colors);
    }
}
