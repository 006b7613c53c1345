//! Catalog emitters.
//!
//! This module provides the [`Emitter`] trait and implementations for
//! writing catalogs to their destination:
//! - [`FileEmitter`] - Writes one JSONP file per product into a directory
//!
//! Rendering helpers live in [`jsonp`].

mod file;
pub mod jsonp;

pub use file::FileEmitter;
pub use jsonp::{DEFAULT_CALLBACK, render_jsonp, strip_jsonp, to_pretty_json, validate_callback};

use async_trait::async_trait;
use pkgcat_error::Result;
use pkgcat_types::{Catalog, CatalogSet, Product};
use tracing::debug;

/// Trait for writing product catalogs.
#[async_trait]
pub trait Emitter: Send + Sync {
    /// Write the catalog of one product, replacing any previous output.
    async fn emit(&self, product: Product, catalog: &Catalog) -> Result<()>;

    /// Human-readable description of the destination, for logging.
    fn description(&self) -> String;
}

/// Emit every catalog of a set in [`Product::KNOWN`] order.
///
/// Stops at the first failure; catalogs emitted before it stay written.
/// Returns the number of catalogs emitted.
pub async fn emit_all<E: Emitter + ?Sized>(emitter: &E, catalogs: &CatalogSet) -> Result<usize> {
    let mut emitted = 0;

    for (product, catalog) in catalogs.iter() {
        emitter.emit(product, catalog).await?;
        emitted += 1;
        debug!(
            product = %product,
            tabs = catalog.tabs.len(),
            packages = catalog.package_count(),
            destination = %emitter.description(),
            "Emitted catalog"
        );
    }

    Ok(emitted)
}
