//! Application configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Configuration for the bistro client. Every field has a default, so a
/// partial (or absent) config file is fine; CLI flags override afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the menu JSON document.
    pub menu_path: PathBuf,
    /// Simulated fetch latency in milliseconds, mirroring the upstream menu
    /// service's response time.
    pub fetch_delay_ms: u64,
    /// Base URL joined onto dish image references.
    pub image_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            menu_path: PathBuf::from("data/menu.json"),
            fetch_delay_ms: 2000,
            image_base_url: String::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// An explicitly given path must exist and parse. Without one,
    /// `bistro.toml` in the working directory is used when present, and
    /// defaults apply when it is not.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from("bistro.toml");
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_file_is_given() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fetch_delay_ms, 2000);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fetch_delay_ms = 50\n").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.fetch_delay_ms, 50);
        assert_eq!(config.menu_path, PathBuf::from("data/menu.json"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/bistro.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fetch_delay_ms = \"soon\"\n").unwrap();

        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }
}
