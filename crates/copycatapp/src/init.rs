//! # Context Initialization
//!
//! Wires configuration, paths and storage into a ready [`CopyCatApi`].
//!
//! ## Directories
//!
//! Copycat keeps one data file and one optional config file, in the OS-appropriate
//! per-user directories resolved by the `directories` crate
//! (`ProjectDirs::from("com", "copycat", "CopyCat")`):
//!
//! ```text
//! <data dir>/sentences.json     the cards
//! <config dir>/copycat.toml     settings, optional
//! ```
//!
//! Setting `COPYCAT_HOME` replaces both directories with that one path. It exists
//! mostly so tests can run against a throwaway directory.
//!
//! ## Startup Order
//!
//! 1. [`CopyCatDirs::resolve`]
//! 2. [`CopyCatConfig::load`] from the config dir
//! 3. [`initialize`], which loads the cards
//!
//! ## Data File Resolution
//!
//! 1. `data_override` (the CLI's `--data`)
//! 2. `data_file` from the configuration (env or file)
//! 3. `<data dir>/sentences.json`

use crate::api::CopyCatApi;
use crate::config::CopyCatConfig;
use crate::error::{CopyCatError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use log::debug;
use std::path::PathBuf;

pub const DATA_FILE_NAME: &str = "sentences.json";
pub const HOME_ENV: &str = "COPYCAT_HOME";

pub struct CopyCatContext {
    pub api: CopyCatApi<FsBackend>,
    pub config: CopyCatConfig,
}

/// Per-user directories for data and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCatDirs {
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl CopyCatDirs {
    /// Resolves the directories, honoring `COPYCAT_HOME`.
    pub fn resolve() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return Ok(Self::rooted(PathBuf::from(home)));
        }
        let dirs = ProjectDirs::from("com", "copycat", "CopyCat").ok_or_else(|| {
            CopyCatError::Store("Could not determine the home directory".to_string())
        })?;
        Ok(Self {
            data_dir: dirs.data_dir().to_path_buf(),
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Both directories at one root.
    pub fn rooted(root: PathBuf) -> Self {
        Self {
            data_dir: root.clone(),
            config_dir: root,
        }
    }
}

/// Picks the data file and loads the cards.
///
/// Loading the cards never fails (see [`crate::store::CardStore::load`]). Config is
/// loaded by the caller first, so a client can set up logging before the store
/// reports anything.
pub fn initialize(
    dirs: &CopyCatDirs,
    config: CopyCatConfig,
    data_override: Option<PathBuf>,
) -> CopyCatContext {
    let data_file = data_override.unwrap_or_else(|| config.data_file(&dirs.data_dir));
    debug!("Using data file {}", data_file.display());

    let api = CopyCatApi::load(FsBackend::new(data_file));
    CopyCatContext { api, config }
}
