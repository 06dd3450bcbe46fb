//! Runtime configuration.
//!
//! Configuration is a JSON document read through a capability-scoped
//! directory. Environment variables may override the store directory and log
//! level after loading.

use crate::logging::LoggingConfig;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Environment variable that switches the store to a JSON-file directory.
pub const STORE_DIR_ENV: &str = "PUBLIC_AGENTS_STORE_DIR";

/// Environment variable that replaces the configured log level.
pub const LOG_LEVEL_ENV: &str = "PUBLIC_AGENTS_LOG_LEVEL";

/// Persistence backing for agent handles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Keep agents in process memory.
    #[default]
    Memory,
    /// Keep each agent as a JSON file in `directory`.
    JsonFile {
        /// Store root, created on open.
        directory: Utf8PathBuf,
    },
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicAgentsConfig {
    /// Agent store selection.
    pub store: StoreConfig,
    /// Logging setup.
    pub logging: LoggingConfig,
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        /// File path relative to the configuration directory.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The document is not valid configuration JSON.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PublicAgentsConfig {
    /// Parses a configuration document.
    ///
    /// Missing sections take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown store
    /// kinds.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses `file_name` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is malformed.
    pub fn load(dir: &Dir, file_name: &Utf8Path) -> Result<Self, ConfigError> {
        let raw = dir
            .read_to_string(file_name)
            .map_err(|source| ConfigError::Read {
                path: file_name.to_owned(),
                source,
            })?;
        Self::from_json_str(&raw)
    }

    /// Applies overrides from the process environment.
    #[must_use]
    pub fn apply_env_overrides(self) -> Self {
        self.apply_env_overrides_with(|key| std::env::var(key).ok())
    }

    /// Applies overrides resolved through `lookup`.
    ///
    /// Blank values are ignored.
    #[must_use]
    pub fn apply_env_overrides_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(directory) = non_blank(lookup(STORE_DIR_ENV)) {
            self.store = StoreConfig::JsonFile {
                directory: Utf8PathBuf::from(directory),
            };
        }
        if let Some(level) = non_blank(lookup(LOG_LEVEL_ENV)) {
            self.logging.level = level;
        }
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}
