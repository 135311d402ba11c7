//! Configuration management for the OrthoWatch client.
//!
//! Loads configuration from `${ORTHOWATCH_HOME}/config.toml` with sensible
//! defaults when the file is absent.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for OrthoWatch configuration and data directories.
    //!
    //! `ORTHOWATCH_HOME` resolution order:
    //! 1. `ORTHOWATCH_HOME` environment variable (if set)
    //! 2. `~/.config/orthowatch` (default)

    use std::path::PathBuf;

    /// Returns the user's home directory.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Returns the OrthoWatch home directory.
    ///
    /// Checks `ORTHOWATCH_HOME` first, falls back to `~/.config/orthowatch`.
    pub fn orthowatch_home() -> PathBuf {
        if let Ok(home) = std::env::var("ORTHOWATCH_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("orthowatch"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        orthowatch_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        orthowatch_home().join("logs")
    }
}

/// Default config file content written by `config init`.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# OrthoWatch client configuration.

# Base URL of the OrthoWatch backend API.
# Can be overridden with the ORTHOWATCH_BASE_URL environment variable.
base_url = "http://localhost:8080/api"

# Request timeout in seconds (0 disables the timeout).
# request_timeout_secs = 30
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the backend API.
    pub base_url: String,

    /// Request timeout in seconds (0 disables)
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };

        // Env var takes precedence over the file for the base URL.
        if let Ok(base_url) = std::env::var("ORTHOWATCH_BASE_URL") {
            let trimmed = base_url.trim();
            if !trimmed.is_empty() {
                config.base_url = trimmed.to_string();
            }
        }

        Ok(config)
    }

    /// Returns the configured request timeout, if enabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.request_timeout_secs))
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, DEFAULT_CONFIG_TEMPLATE)
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!("Failed to move config into place at {}", path.display())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_from_parses_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "base_url = \"https://monitoring.example.org/api\"\nrequest_timeout_secs = 5\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://monitoring.example.org/api");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_init_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("base_url ="));

        assert!(Config::init(&path).is_err());
    }
}
