//! Core types for pkgcat.
//!
//! This crate provides the catalog data model consumed by the download-picker
//! widget:
//! - [`PackageRecord`] - Metadata for one downloadable artifact
//! - [`Flavour`], [`Tab`], [`Catalog`] - The nested catalog tree
//! - [`CatalogSet`] - The per-product catalogs of one generation run
//! - [`Product`] - Product classification of an object key
//!
//! Field declaration order is the JSON field order.

pub mod catalog;
pub mod package;
pub mod product;

pub use catalog::*;
pub use package::*;
pub use product::*;

/// Upper-case the first character of `s`, leaving the rest unchanged.
///
/// ```
/// use pkgcat_types::capitalize_first;
///
/// assert_eq!(capitalize_first("ubuntu2004"), "Ubuntu2004");
/// assert_eq!(capitalize_first("macOS"), "MacOS");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
