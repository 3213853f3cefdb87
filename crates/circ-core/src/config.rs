//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/circ/config.toml)
//! 3. Environment variables (CIRC_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix
const ENV_PREFIX: &str = "CIRC";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file loaded when no path is given on the command line
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (CIRC_CATALOG)
    /// 2. Config file (~/.config/circ/config.toml or CIRC_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // CIRC_CATALOG
        if let Ok(val) = std::env::var(format!("{}_CATALOG", ENV_PREFIX)) {
            self.catalog = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
    }

    /// Path to the config file (respects CIRC_CONFIG)
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("circ")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.catalog.is_none());
    }

    // Everything that reads CIRC_CATALOG lives in one test so the
    // set/remove window cannot race a concurrently running test.
    #[test]
    fn test_loading_and_env_override() {
        // Parse from string
        let config = Config::load_from_str(r#"catalog = "shelves.toml""#).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("shelves.toml")));

        // Missing file falls back to defaults
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert!(config.catalog.is_none());

        // Load from an actual file
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"catalog = "from-file.toml""#).unwrap();
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("from-file.toml")));

        // Environment variable wins over the file value
        std::env::set_var("CIRC_CATALOG", "from-env.toml");
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("from-env.toml")));

        // An empty value clears the setting
        std::env::set_var("CIRC_CATALOG", "");
        let config = Config::load_from_path(&path).unwrap();
        assert!(config.catalog.is_none());

        std::env::remove_var("CIRC_CATALOG");
    }

    #[test]
    fn test_config_file_path_env_override() {
        std::env::set_var("CIRC_CONFIG", "/tmp/custom-circ.toml");
        assert_eq!(
            Config::config_file_path(),
            PathBuf::from("/tmp/custom-circ.toml")
        );
        std::env::remove_var("CIRC_CONFIG");

        let path = Config::config_file_path();
        assert!(path.ends_with("circ/config.toml"));
    }
}
