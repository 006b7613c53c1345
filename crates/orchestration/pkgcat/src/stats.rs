//! Statistics for generation runs.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use pkgcat_types::Product;
use serde::{Deserialize, Serialize};

/// Statistics collected during a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationStats {
    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Total number of keys listed
    pub keys_listed: usize,

    /// Keys whose file name did not describe a package
    pub keys_unmatched: usize,

    /// Package keys dropped because no catalog takes them
    pub keys_unrouted: usize,

    /// Packages added to each catalog
    pub packages: BTreeMap<Product, usize>,

    /// Total bytes of objects added to catalogs
    pub bytes_cataloged: u64,

    /// Number of catalog files written
    pub catalogs_written: usize,
}

impl GenerationStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark the run as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Record a key whose file name did not match.
    pub fn record_unmatched(&mut self) {
        self.keys_listed += 1;
        self.keys_unmatched += 1;
    }

    /// Record a package that no catalog takes.
    pub fn record_unrouted(&mut self) {
        self.keys_listed += 1;
        self.keys_unrouted += 1;
    }

    /// Record a package added to a product's catalog.
    pub fn record_package(&mut self, product: Product, size_bytes: u64) {
        self.keys_listed += 1;
        *self.packages.entry(product).or_default() += 1;
        self.bytes_cataloged += size_bytes;
    }

    /// Record the catalog files written.
    pub fn record_written(&mut self, catalogs: usize) {
        self.catalogs_written += catalogs;
    }

    /// Number of packages in a product's catalog.
    pub fn packages_for(&self, product: Product) -> usize {
        self.packages.get(&product).copied().unwrap_or(0)
    }

    /// Total packages across all catalogs.
    pub fn total_packages(&self) -> usize {
        self.packages.values().sum()
    }

    /// Get the duration of the run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}
