//! Product classification of object keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The product a release package belongs to.
///
/// Each known product has its own catalog and output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    /// Elixir packages (key contains "elixir")
    Elixir,
    /// Erlang/OTP packages (key contains "esl-erlang")
    Erlang,
    /// MongooseIM packages (key contains "mongooseim")
    MongooseIm,
    /// Anything else; never written to a catalog
    Unknown,
}

impl Product {
    /// Known products in classification priority order, which is also the
    /// order catalogs are written in.
    pub const KNOWN: [Product; 3] = [Product::Elixir, Product::Erlang, Product::MongooseIm];

    /// Classify an object key by the first product marker it contains.
    ///
    /// Markers are tested in [`Product::KNOWN`] order, so a key containing both
    /// "elixir" and "mongooseim" is an Elixir package.
    ///
    /// ```
    /// use pkgcat_types::Product;
    ///
    /// assert_eq!(Product::classify("elixir/ubuntu/elixir_1.14.0-1~ubuntu~focal_all.deb"), Product::Elixir);
    /// assert_eq!(Product::classify("docs/readme.txt"), Product::Unknown);
    /// ```
    pub fn classify(key: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|product| product.marker().is_some_and(|marker| key.contains(marker)))
            .unwrap_or(Product::Unknown)
    }

    /// Substring that identifies this product in an object key.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Self::Elixir => Some("elixir"),
            Self::Erlang => Some("esl-erlang"),
            Self::MongooseIm => Some("mongooseim"),
            Self::Unknown => None,
        }
    }

    /// Catalog file name for this product.
    pub fn output_file(&self) -> Option<&'static str> {
        match self {
            Self::Elixir => Some("elixir_packages.json"),
            Self::Erlang => Some("erlang_packages.json"),
            Self::MongooseIm => Some("mongooseim_packages.json"),
            Self::Unknown => None,
        }
    }

    /// Whether this product has a catalog.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elixir => write!(f, "Elixir"),
            Self::Erlang => write!(f, "Erlang"),
            Self::MongooseIm => write!(f, "MongooseIM"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_product() {
        assert_eq!(
            Product::classify("elixir/ubuntu/elixir_1.14.0-1~ubuntu~focal_all.deb"),
            Product::Elixir
        );
        assert_eq!(
            Product::classify("erlang/debian/esl-erlang_25.0.2-1~debian~bullseye_amd64.deb"),
            Product::Erlang
        );
        assert_eq!(
            Product::classify("mongooseim/centos/mongooseim_6.0.0-1~centos~7_x86_64.rpm"),
            Product::MongooseIm
        );
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(Product::classify("readme.txt"), Product::Unknown);
        assert_eq!(Product::classify("erlang/ubuntu/otp_25.0-1~ubuntu~focal_amd64.deb"), Product::Unknown);
    }

    #[test]
    fn test_classify_priority() {
        // "erlang" alone is not the Erlang marker
        assert_eq!(
            Product::classify("erlang/ubuntu/mongooseim_6.0-1~ubuntu~focal_amd64.deb"),
            Product::MongooseIm
        );
        assert_eq!(
            Product::classify("mongooseim/esl-erlang_25.0-1~ubuntu~focal_amd64.deb"),
            Product::Erlang
        );
        assert_eq!(
            Product::classify("esl-erlang/elixir_1.14-1~ubuntu~focal_all.deb"),
            Product::Elixir
        );
    }

    #[test]
    fn test_output_files() {
        assert_eq!(Product::Elixir.output_file(), Some("elixir_packages.json"));
        assert_eq!(Product::Erlang.output_file(), Some("erlang_packages.json"));
        assert_eq!(Product::MongooseIm.output_file(), Some("mongooseim_packages.json"));
        assert_eq!(Product::Unknown.output_file(), None);
    }

    #[test]
    fn test_known_products() {
        assert!(Product::KNOWN.iter().all(Product::is_known));
        assert!(!Product::Unknown.is_known());
    }

    #[test]
    fn test_product_display() {
        assert_eq!(Product::MongooseIm.to_string(), "MongooseIM");
        assert_eq!(Product::Erlang.to_string(), "Erlang");
    }
}
