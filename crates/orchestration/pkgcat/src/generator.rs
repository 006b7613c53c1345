//! Main Generator implementation.

use pkgcat_error::Result;
use pkgcat_types::CatalogSet;
use tracing::{debug, info};

use crate::aggregate::{Aggregator, Routing};
use crate::emit::{Emitter, emit_all};
use crate::extract::Extractor;
use crate::lister::Lister;
use crate::s3::S3Object;
use crate::stats::GenerationStats;

/// The generator that coordinates listing, extraction, aggregation and output.
///
/// Generic over the lister and emitter so the same pipeline runs against S3
/// and files in production, and against fixed keys and in-memory sinks in tests.
pub struct Generator<L: Lister, E: Emitter> {
    lister: L,
    extractor: Extractor,
    emitter: E,
}

impl<L: Lister, E: Emitter> Generator<L, E> {
    /// Create a new Generator.
    ///
    /// # Arguments
    ///
    /// * `lister` - Source of object keys
    /// * `extractor` - Maps keys to package records
    /// * `emitter` - Destination for the finished catalogs
    pub fn new(lister: L, extractor: Extractor, emitter: E) -> Self {
        Self {
            lister,
            extractor,
            emitter,
        }
    }

    /// List the source and build the catalogs without writing them.
    pub async fn build(&self) -> Result<(CatalogSet, GenerationStats)> {
        let mut stats = GenerationStats::new();

        debug!(source = %self.lister.description(), "Listing objects");
        let objects = self.lister.list().await?;
        info!(
            source = %self.lister.description(),
            objects = objects.len(),
            "Listed objects"
        );

        let catalogs = catalog_objects(&objects, &self.extractor, &mut stats);
        Ok((catalogs, stats))
    }

    /// Run the full pipeline: list, build and emit every catalog.
    ///
    /// Any listing or write failure aborts the run. Catalogs are written in a
    /// fixed order, so an earlier file may already be replaced when a later
    /// write fails.
    pub async fn run(&self) -> Result<GenerationStats> {
        let (catalogs, mut stats) = self.build().await?;

        let written = emit_all(&self.emitter, &catalogs).await?;
        stats.record_written(written);
        stats.complete();

        debug!(
            keys_listed = stats.keys_listed,
            packages = stats.total_packages(),
            keys_unmatched = stats.keys_unmatched,
            keys_unrouted = stats.keys_unrouted,
            catalogs_written = stats.catalogs_written,
            "Generation completed"
        );

        Ok(stats)
    }
}

/// Extract and aggregate listed objects into catalogs, in listing order.
pub fn catalog_objects(
    objects: &[S3Object],
    extractor: &Extractor,
    stats: &mut GenerationStats,
) -> CatalogSet {
    let mut aggregator = Aggregator::new();

    for obj in objects {
        let Some(record) = extractor.extract(&obj.key) else {
            stats.record_unmatched();
            debug!(key = %obj.key, "Not a package");
            continue;
        };

        match aggregator.add(&obj.key, record) {
            Routing::Routed { product, tab } => {
                stats.record_package(product, obj.size);
                debug!(key = %obj.key, product = %product, tab = %tab, "Cataloged package");
            }
            Routing::UnknownProduct => {
                stats.record_unrouted();
                debug!(key = %obj.key, "No product marker");
            }
            Routing::MissingOsSegment => {
                stats.record_unrouted();
                debug!(key = %obj.key, "No OS directory");
            }
        }
    }

    aggregator.finish()
}
