//! Configuration types for a generation run.

use std::path::PathBuf;

use pkgcat_error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

use crate::emit::{DEFAULT_CALLBACK, FileEmitter};
use crate::extract::{DEFAULT_BASE_URL, Extractor};

/// Configuration for catalog generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// URL prefix prepended to object keys to form download paths
    pub base_url: String,

    /// Directory catalog files are written to
    pub output_dir: PathBuf,

    /// JSONP callback name wrapping each catalog
    pub callback: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            callback: DEFAULT_CALLBACK.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the download base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the JSONP callback name.
    pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = callback.into();
        self
    }

    /// Build the extractor for this configuration.
    pub fn extractor(&self) -> Result<Extractor> {
        if !self.base_url.contains("://") {
            return Err(CatalogError::Config(format!(
                "Base URL '{}' has no scheme",
                self.base_url
            )));
        }
        Extractor::new(&self.base_url)
    }

    /// Build the file emitter for this configuration.
    pub fn file_emitter(&self) -> Result<FileEmitter> {
        FileEmitter::new(&self.output_dir).with_callback(&self.callback)
    }
}
