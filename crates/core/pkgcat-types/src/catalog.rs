//! Catalog tree types.
//!
//! A [`Catalog`] holds one [`Tab`] per operating system, each tab holds
//! [`Flavour`]s, and each flavour holds the [`PackageRecord`]s in listing order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{PackageRecord, Product, capitalize_first};

/// Name of the only flavour currently produced.
pub const MAIN_FLAVOUR: &str = "main";

/// Caption shown by the widget for the main flavour.
pub const MAIN_FLAVOUR_CAPTION: &str = "Standard";

/// A build variant grouping within a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavour {
    pub name: String,
    pub packages: Vec<PackageRecord>,
    pub header: String,
    pub footer: String,
}

impl Flavour {
    /// Create an empty flavour with blank header and footer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            packages: Vec::new(),
            header: String::new(),
            footer: String::new(),
        }
    }

    /// Create an empty "main" flavour.
    pub fn main() -> Self {
        Self::new(MAIN_FLAVOUR)
    }
}

/// An operating-system grouping within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// OS directory name taken from the object key
    pub name: String,

    /// Display caption (name with its first character upper-cased)
    pub caption: String,

    pub header: String,
    pub footer: String,

    /// Flavours, unique by name
    pub flavours: Vec<Flavour>,
}

impl Tab {
    /// Create a tab with no flavours; the caption is derived from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            caption: capitalize_first(&name),
            name,
            header: String::new(),
            footer: String::new(),
            flavours: Vec::new(),
        }
    }

    /// Look up a flavour by name.
    pub fn flavour(&self, name: &str) -> Option<&Flavour> {
        self.flavours.iter().find(|f| f.name == name)
    }

    /// Total number of packages across all flavours.
    pub fn package_count(&self) -> usize {
        self.flavours.iter().map(|f| f.packages.len()).sum()
    }
}

/// The catalog document for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Tabs, unique by name, in first-seen order
    pub tabs: Vec<Tab>,

    /// Display captions keyed by flavour name
    pub flavours_captions: BTreeMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog with the standard flavour captions.
    pub fn new() -> Self {
        let mut flavours_captions = BTreeMap::new();
        flavours_captions.insert(MAIN_FLAVOUR.to_string(), MAIN_FLAVOUR_CAPTION.to_string());

        Self {
            tabs: Vec::new(),
            flavours_captions,
        }
    }

    /// Look up a tab by name.
    pub fn tab(&self, name: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.name == name)
    }

    /// Total number of packages in the catalog.
    pub fn package_count(&self) -> usize {
        self.tabs.iter().map(Tab::package_count).sum()
    }

    /// Whether the catalog has no tabs.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// The catalogs produced by one generation run, one per known product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSet {
    pub elixir: Catalog,
    pub erlang: Catalog,
    pub mongooseim: Catalog,
}

impl CatalogSet {
    /// Create a set of empty catalogs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the catalog for a product. Returns `None` for [`Product::Unknown`].
    pub fn get(&self, product: Product) -> Option<&Catalog> {
        match product {
            Product::Elixir => Some(&self.elixir),
            Product::Erlang => Some(&self.erlang),
            Product::MongooseIm => Some(&self.mongooseim),
            Product::Unknown => None,
        }
    }

    /// Mutable access for the aggregation fold.
    pub fn get_mut(&mut self, product: Product) -> Option<&mut Catalog> {
        match product {
            Product::Elixir => Some(&mut self.elixir),
            Product::Erlang => Some(&mut self.erlang),
            Product::MongooseIm => Some(&mut self.mongooseim),
            Product::Unknown => None,
        }
    }

    /// Iterate catalogs in [`Product::KNOWN`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Product, &Catalog)> {
        [
            (Product::Elixir, &self.elixir),
            (Product::Erlang, &self.erlang),
            (Product::MongooseIm, &self.mongooseim),
        ]
        .into_iter()
    }

    /// Total number of packages across all catalogs.
    pub fn package_count(&self) -> usize {
        self.iter().map(|(_, c)| c.package_count()).sum()
    }
}
