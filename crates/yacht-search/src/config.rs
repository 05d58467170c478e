use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::platform;
use crate::error::{Error, Result};
use crate::mode::SearchMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Mode the widget opens in.
    #[serde(default)]
    pub default_mode: SearchMode,
    /// Destinations offered by the location panel.
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
}

/// Where listings and professionals are read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a listings TOML file. The bundled catalog is used when it
    /// does not exist.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_mode: SearchMode::default(),
            locations: default_locations(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_locations() -> Vec<String> {
    [
        "Mediterranean",
        "Greek Islands",
        "Croatia",
        "French Riviera",
        "Balearics",
        "Spain",
        "Italy",
        "Turkey",
        "Caribbean",
        "Bahamas",
        "British Virgin Islands",
        "United Kingdom",
        "Florida",
        "Thailand",
        "Seychelles",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_catalog_path() -> PathBuf {
    platform::config_dir().join("listings.toml")
}

fn default_log_filter() -> String {
    "debug".to_string()
}

impl Config {
    /// Load the config, writing defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| Error::io(config_path, e))?;
        toml::from_str(&content).map_err(|source| Error::TomlDecode {
            path: config_path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content).map_err(|e| Error::io(config_path, e))?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.default_mode, SearchMode::Buy);
        assert!(config.search.locations.iter().any(|l| l == "Greek Islands"));
        assert!(config.catalog.path.ends_with("yachts/listings.toml"));
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [search]
            default_mode = "charter"
            "#,
        )
        .unwrap();
        assert_eq!(config.search.default_mode, SearchMode::Charter);
        assert!(!config.search.locations.is_empty());
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn first_load_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("yachts").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.search.locations, config.search.locations);
    }

    #[test]
    fn malformed_config_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search\ndefault_mode = 3").unwrap();

        match Config::load_from(&path) {
            Err(Error::TomlDecode { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
