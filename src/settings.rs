//! Optional settings file.
//!
//! Looked up at `$MEMORY_LAB_CONFIG`, else
//! `<config_dir>/memory-lab/config.toml`. A missing file means defaults.
//!
//! ```toml
//! seed = 42
//! log = "memory_lab=debug"
//!
//! [timing]
//! flip_ms = 300
//! mismatch_ms = 1000
//! transition_ms = 2000
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Timing};
use crate::error::SettingsError;

/// Environment variable overriding the settings path.
pub const CONFIG_ENV: &str = "MEMORY_LAB_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed seed for reproducible boards. Random when absent.
    pub seed: Option<u64>,

    /// Log filter directives, overridden by `MEMORY_LAB_LOG`.
    pub log: Option<String>,

    pub timing: Timing,
}

impl Settings {
    /// Where the settings file is expected.
    pub fn path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("memory-lab").join("config.toml")))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, SettingsError> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The standard levels with this file's timing.
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig::standard().with_timing(self.timing)
    }
}
