//! File emitter writing JSONP catalogs to a directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pkgcat_error::{CatalogError, Result};
use pkgcat_types::{Catalog, Product};
use tracing::info;

use super::Emitter;
use super::jsonp::{DEFAULT_CALLBACK, render_jsonp, validate_callback};

/// Writes each catalog to `<output_dir>/<product file name>`.
///
/// Files are overwritten in place; there is no temporary file or rename.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    output_dir: PathBuf,
    callback: String,
}

impl FileEmitter {
    /// Create an emitter writing into `output_dir` with the default callback.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            callback: DEFAULT_CALLBACK.to_string(),
        }
    }

    /// Set the JSONP callback name.
    ///
    /// Returns an error if the name is not a valid JS identifier path.
    pub fn with_callback(mut self, callback: impl Into<String>) -> Result<Self> {
        let callback = callback.into();
        validate_callback(&callback)?;
        self.callback = callback;
        Ok(self)
    }

    /// Output path for a product, or `None` for [`Product::Unknown`].
    pub fn path_for(&self, product: Product) -> Option<PathBuf> {
        product.output_file().map(|name| self.output_dir.join(name))
    }

    /// Get the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Get the JSONP callback name.
    pub fn callback(&self) -> &str {
        &self.callback
    }
}

impl Default for FileEmitter {
    fn default() -> Self {
        Self::new(".")
    }
}

#[async_trait]
impl Emitter for FileEmitter {
    async fn emit(&self, product: Product, catalog: &Catalog) -> Result<()> {
        let path = self.path_for(product).ok_or_else(|| {
            CatalogError::Config(format!("No output file for product {product}"))
        })?;

        let text = render_jsonp(&self.callback, catalog)?;
        tokio::fs::write(&path, text.as_bytes())
            .await
            .map_err(|e| CatalogError::io(&path, e))?;

        info!(
            product = %product,
            path = %path.display(),
            bytes = text.len(),
            "Wrote catalog"
        );
        Ok(())
    }

    fn description(&self) -> String {
        format!("files('{}')", self.output_dir.display())
    }
}
