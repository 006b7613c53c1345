//! Grouping of package records into per-product catalogs.
//!
//! Each record is routed by the [`Product`] of its key into one catalog, then
//! into the tab named after the key's OS directory and the "main" flavour.

use pkgcat_types::{Catalog, CatalogSet, Flavour, MAIN_FLAVOUR, PackageRecord, Product, Tab};

/// Where a record ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routing {
    /// Appended to the named tab of the product's catalog
    Routed { product: Product, tab: String },
    /// Key carries none of the product markers
    UnknownProduct,
    /// Key has no directory segment to name a tab after
    MissingOsSegment,
}

/// Get the OS directory of a key: its second-to-last path segment.
///
/// ```
/// use pkgcat::os_name;
///
/// assert_eq!(os_name("erlang/ubuntu/esl-erlang_25.0-1~ubuntu~focal_amd64.deb"), Some("ubuntu"));
/// assert_eq!(os_name("esl-erlang_25.0-1~ubuntu~focal_amd64.deb"), None);
/// ```
pub fn os_name(key: &str) -> Option<&str> {
    let mut segments = key.rsplit('/');
    segments.next();
    segments.next().filter(|s| !s.is_empty())
}

/// Accumulates records into a [`CatalogSet`].
///
/// Tabs and flavours are created on first use and keep first-seen order;
/// records keep insertion order and are never deduplicated.
#[derive(Debug, Default)]
pub struct Aggregator {
    catalogs: CatalogSet,
}

impl Aggregator {
    /// Create an aggregator with empty catalogs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one record by its key.
    pub fn add(&mut self, key: &str, record: PackageRecord) -> Routing {
        let product = Product::classify(key);
        let Some(catalog) = self.catalogs.get_mut(product) else {
            return Routing::UnknownProduct;
        };
        let Some(os) = os_name(key) else {
            return Routing::MissingOsSegment;
        };

        insert(catalog, os, record);

        Routing::Routed {
            product,
            tab: os.to_string(),
        }
    }

    /// Finish aggregation and return the catalogs.
    pub fn finish(self) -> CatalogSet {
        self.catalogs
    }
}

fn insert(catalog: &mut Catalog, os: &str, record: PackageRecord) {
    let tab_idx = match catalog.tabs.iter().position(|t| t.name == os) {
        Some(idx) => idx,
        None => {
            catalog.tabs.push(Tab::new(os));
            catalog.tabs.len() - 1
        }
    };
    let tab = &mut catalog.tabs[tab_idx];

    let flavour_idx = match tab.flavours.iter().position(|f| f.name == MAIN_FLAVOUR) {
        Some(idx) => idx,
        None => {
            tab.flavours.push(Flavour::main());
            tab.flavours.len() - 1
        }
    };

    tab.flavours[flavour_idx].packages.push(record);
}

/// Fold `(key, record)` pairs into catalogs in one pass.
pub fn aggregate<'a, I>(entries: I) -> CatalogSet
where
    I: IntoIterator<Item = (&'a str, PackageRecord)>,
{
    entries
        .into_iter()
        .fold(Aggregator::new(), |mut aggregator, (key, record)| {
            aggregator.add(key, record);
            aggregator
        })
        .finish()
}
