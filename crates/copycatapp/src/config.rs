//! # Configuration
//!
//! Copycat configuration is loaded with [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command line**: `--data <file>` (applied by [`crate::init::initialize`]).
//! 2. **Environment variables**: `COPYCAT_DATA_FILE`, `COPYCAT_LOG`.
//! 3. **Config file**: `copycat.toml` in the per-user config directory.
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! A missing config file is fine. A config file that does not parse is an error.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `data_file` | `COPYCAT_DATA_FILE` | `<data dir>/sentences.json` | Where cards are stored |
//! | `log_level` | `COPYCAT_LOG` | `warn` | `error`, `warn`, `info`, `debug` or `trace` |

use crate::error::{CopyCatError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "copycat.toml";

/// Configuration for copycat, stored in `copycat.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CopyCatConfig {
    /// Path of the JSON file holding the cards.
    /// When absent, `sentences.json` in the per-user data directory is used.
    #[config(env = "COPYCAT_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Log level for messages written to stderr.
    #[config(env = "COPYCAT_LOG", default = "warn")]
    pub log_level: String,
}

impl Default for CopyCatConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_level: "warn".to_string(),
        }
    }
}

impl CopyCatConfig {
    /// Loads environment and `copycat.toml` from `config_dir` over the defaults.
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(config_dir.join(CONFIG_FILE_NAME))
            .load()
            .map_err(CopyCatError::Config)
    }

    /// The data file, falling back to `sentences.json` inside `data_dir`.
    pub fn data_file(&self, data_dir: &Path) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| data_dir.join(crate::init::DATA_FILE_NAME))
    }

    /// The log level, normalized to lowercase.
    pub fn log_level(&self) -> String {
        self.log_level.trim().to_ascii_lowercase()
    }
}
