//! Engine settings stored at `~/.config/itemwiki/settings.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::schema::SchemaVersion;

pub const DEFAULT_WIKI_BASE_URL: &str = "http://oldschoolrunescape.wikia.com/wiki";

/// Canonical path to the settings file: `~/.config/itemwiki/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("itemwiki").join("settings.toml")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub schema: SchemaVersion,
    /// Prefix for derived item urls, without a trailing slash.
    pub wiki_base_url: String,
    pub workers: usize,
    /// Pretty-print output JSON.
    pub pretty: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            schema: SchemaVersion::default(),
            wiki_base_url: DEFAULT_WIKI_BASE_URL.to_string(),
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            pretty: false,
        }
    }
}

impl EngineConfig {
    pub fn from_toml(text: &str) -> Result<Self, EngineError> {
        toml::from_str(text).map_err(|e| EngineError::config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self).map_err(|e| EngineError::config(e.to_string()))
    }

    /// Load from the canonical settings path. A missing file gives defaults.
    pub fn load() -> Result<Self, EngineError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, EngineError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(EngineError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Write atomically, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), EngineError> {
        let io_err = |source| EngineError::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let serialized = self.to_toml()?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, serialized).map_err(io_err)?;
        std::fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.workers == 0 {
            return Err(EngineError::config("workers must be at least 1"));
        }
        if self.wiki_base_url.trim().is_empty() {
            return Err(EngineError::config("wiki_base_url must not be empty"));
        }
        Ok(())
    }

    /// Base url with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.wiki_base_url.trim().trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_defaults() {
        let config = EngineConfig::from_toml("schema = \"legacy\"\nworkers = 2\n").unwrap();
        assert_eq!(config.schema, SchemaVersion::Legacy);
        assert_eq!(config.workers, 2);
        assert_eq!(config.wiki_base_url, DEFAULT_WIKI_BASE_URL);
        assert!(!config.pretty);
    }

    #[test]
    fn rejects_unknown_schema() {
        assert!(EngineConfig::from_toml("schema = \"v9\"").is_err());
    }

    #[test]
    fn validate_rules() {
        let mut config = EngineConfig::default();
        assert!(config.validate().is_ok());
        config.workers = 0;
        assert!(config.validate().is_err());
        config.workers = 1;
        config.wiki_base_url = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = EngineConfig {
            wiki_base_url: "https://wiki.example/w/".into(),
            ..EngineConfig::default()
        };
        assert_eq!(config.base_url(), "https://wiki.example/w");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let config = EngineConfig {
            schema: SchemaVersion::Legacy,
            wiki_base_url: "https://wiki.example/w".into(),
            workers: 3,
            pretty: true,
        };
        config.save_to(&path).unwrap();
        assert_eq!(EngineConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
