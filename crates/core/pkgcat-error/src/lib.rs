//! Error types for pkgcat.
//!
//! This crate provides:
//! - [`CatalogError`] - Top-level error enum for every stage of a generation run
//! - [`Result`] - Result alias used by the library crates
//!
//! A run has no recovery path: every variant is fatal to the caller. Keys that
//! do not describe a package are not errors and never reach this type.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for pkgcat.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Object storage errors (credentials, network, missing bucket)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Failed to write a catalog file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog serialization failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalogError {
    /// Build an I/O error tagged with the path being written.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
