//! Package metadata extraction from object keys.
//!
//! Release packages are stored under file names of the form
//!
//! ```text
//! <name>_<version>-<release>~<os>~<codename>_<arch>.<ext>
//! ```
//!
//! e.g. `esl-erlang_25.0.2-1~ubuntu~focal_amd64.deb`. Keys whose file name does
//! not fit that shape are not packages and produce no record.

use pkgcat_error::{CatalogError, Result};
use pkgcat_types::{PackageRecord, capitalize_first};
use regex::Regex;

/// Public download host the object keys are served from.
pub const DEFAULT_BASE_URL: &str = "https://binaries2.erlang-solutions.com/";

/// Anchored at the start only: text after `_<arch>.<ext>` is accepted.
///
/// Groups: name, version, os, codename, arch, extension. The codename group
/// is greedy, so the arch is the last `_`-separated word before the extension.
const PACKAGE_PATTERN: &str = r"^(.+?)_([\d.]+)-.+?~(.+?)~(.+)_(\w+)\.(\w+)";

/// Maps object keys to [`PackageRecord`]s.
///
/// # Example
///
/// ```
/// use pkgcat::Extractor;
///
/// let extractor = Extractor::new("https://example.com/").unwrap();
/// let record = extractor
///     .extract("erlang/ubuntu/esl-erlang_25.0.2-1~ubuntu~focal_amd64.deb")
///     .unwrap();
///
/// assert_eq!(record.version, "25.0.2");
/// assert_eq!(record.os, "Ubuntu");
/// assert_eq!(record.arch, "amd64");
/// assert!(extractor.extract("readme.txt").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    pattern: Regex,
    base_url: String,
}

impl Extractor {
    /// Create an extractor that prefixes download paths with `base_url`.
    ///
    /// The base URL is concatenated verbatim, so it normally ends with `/`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(PACKAGE_PATTERN)
            .map_err(|e| CatalogError::Config(format!("Invalid package pattern: {e}")))?;

        Ok(Self {
            pattern,
            base_url: base_url.into(),
        })
    }

    /// Create an extractor using [`DEFAULT_BASE_URL`].
    pub fn with_default_base_url() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Extract package metadata from an object key.
    ///
    /// Only the file name (after the last `/`) is matched; the download path
    /// is built from the full key.
    pub fn extract(&self, key: &str) -> Option<PackageRecord> {
        let filename = key.rsplit('/').next().unwrap_or(key);
        let caps = self.pattern.captures(filename)?;

        Some(PackageRecord::new(
            format!("{}{}", self.base_url, key),
            &caps[2],
            capitalize_first(&caps[3]),
            &caps[5],
        ))
    }

    /// Get the base URL used for download paths.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
