//! Configuration file handling for colorpage-cli

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the CLI tool
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default server URL
    pub server: Option<String>,
    /// Default directory for saved coloring pages
    pub output_dir: Option<PathBuf>,
    /// Disable colored output
    pub no_color: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("colorpage-cli");

        Ok(config_dir.join("config.toml"))
    }

    /// Merge CLI arguments over config file values
    pub fn merge_with_args(&self, server: Option<&str>, no_color: bool) -> MergedConfig {
        MergedConfig {
            server: server
                .map(String::from)
                .or_else(|| self.server.clone())
                .unwrap_or_else(|| "http://localhost:5000".to_string()),
            output_dir: self.output_dir.clone(),
            no_color: no_color || self.no_color.unwrap_or(false),
        }
    }
}

/// Fully resolved configuration after merging CLI args
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub server: String,
    pub output_dir: Option<PathBuf>,
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_cli_args() {
        let config = Config {
            server: Some("http://configured:9000".to_string()),
            output_dir: None,
            no_color: Some(false),
        };

        let merged = config.merge_with_args(Some("http://cli:5000"), true);
        assert_eq!(merged.server, "http://cli:5000");
        assert!(merged.no_color);
    }

    #[test]
    fn test_merge_falls_back_to_config() {
        let config = Config {
            server: Some("http://configured:9000".to_string()),
            output_dir: Some(PathBuf::from("/tmp/pages")),
            no_color: Some(true),
        };

        let merged = config.merge_with_args(None, false);
        assert_eq!(merged.server, "http://configured:9000");
        assert_eq!(merged.output_dir.as_deref(), Some(Path::new("/tmp/pages")));
        assert!(merged.no_color);
    }

    #[test]
    fn test_merge_defaults() {
        let merged = Config::default().merge_with_args(None, false);
        assert_eq!(merged.server, "http://localhost:5000");
        assert!(merged.output_dir.is_none());
        assert!(!merged.no_color);
    }
}
