//! Configuration file support for canonry.
//!
//! Loads optional `.canonry/config.toml` from project root.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{CanonryError, Result};
use crate::types::DEFAULT_DEPENDENCY_SAMPLE_LIMIT;

/// Default config directory name
pub const CONFIG_DIR: &str = ".canonry";

/// Default config file name
pub const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanonryConfig {
    /// Extra base names treated as generic (on top of `utils`, `helpers`, ...).
    pub generic_file_names: Vec<String>,
    /// How many of the most-imported files to keep when building a
    /// dependency sample from raw import edges.
    pub dependency_sample_limit: usize,
    /// Resolve duplicate groups in parallel.
    pub parallel: bool,
}

impl Default for CanonryConfig {
    fn default() -> Self {
        Self {
            generic_file_names: Vec::new(),
            dependency_sample_limit: DEFAULT_DEPENDENCY_SAMPLE_LIMIT,
            parallel: true,
        }
    }
}

impl CanonryConfig {
    /// Path of the config file under a project root.
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load config from `.canonry/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&Self::default_path(root))
    }

    /// Load config from a specific path, falling back to defaults on error.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific path, reporting read and parse errors.
    pub fn try_load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CanonryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CanonryError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
