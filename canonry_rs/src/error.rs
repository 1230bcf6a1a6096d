//! Error type for the I/O edges of the crate.
//!
//! The analysis itself cannot fail; only reading snapshots and config can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanonryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, CanonryError>;
