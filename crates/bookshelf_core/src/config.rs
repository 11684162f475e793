//! User settings for front ends.
//!
//! # Responsibility
//! - Load optional settings from `<config_dir>/bookshelf/settings.toml`.
//! - Resolve the catalog base directory through a fixed priority chain.
//!
//! # Invariants
//! - A missing settings file yields defaults, never an error.
//! - A present but unreadable or invalid file is reported, not ignored.

use crate::logging::default_log_level;
use crate::repo::file_name::default_base_dir;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_DIR_NAME: &str = "bookshelf";
const SETTINGS_FILE_NAME: &str = "settings.toml";
const DEFAULT_CATALOG_FILE: &str = "library.txt";
const DEFAULT_TOP_AUTHORS: usize = 3;
const LOG_DIR_NAME: &str = "logs";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings file content. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding catalog files.
    pub data_dir: Option<PathBuf>,
    /// File used when the user enters an empty file name.
    pub default_file: Option<String>,
    /// `trace|debug|info|warn|error`.
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files.
    pub log_dir: Option<PathBuf>,
    /// How many authors the stats screen lists.
    pub top_authors: Option<usize>,
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str, origin: &Path) -> ConfigResult<Self> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads settings from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Resolves the catalog base directory.
    ///
    /// Priority: `cli_override`, then `data_dir`, then the executable's
    /// directory, then the current working directory.
    pub fn resolve_data_dir(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(default_base_dir)
    }

    pub fn default_file(&self) -> &str {
        self.default_file
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_CATALOG_FILE)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    /// Log directory; defaults to `<data_dir>/logs`.
    pub fn log_dir(&self, data_dir: &Path) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| data_dir.join(LOG_DIR_NAME))
    }

    pub fn top_authors(&self) -> usize {
        self.top_authors.unwrap_or(DEFAULT_TOP_AUTHORS)
    }
}

/// Canonical settings path: `<config_dir>/bookshelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME)
}
