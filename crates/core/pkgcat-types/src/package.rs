//! Package record type.

use serde::{Deserialize, Serialize};

/// Metadata for one downloadable artifact, derived from its storage key.
///
/// `tests` and `checksum` are always written empty; the widget treats them as
/// slots for manual enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Public download URL (base URL followed by the object key)
    pub path: String,

    /// Package version, e.g. "25.0.2"
    pub version: String,

    /// Operating system label, e.g. "Ubuntu"
    pub os: String,

    /// Architecture token, e.g. "amd64"
    pub arch: String,

    pub tests: String,

    pub checksum: String,
}

impl PackageRecord {
    /// Create a record with empty `tests` and `checksum` fields.
    pub fn new(
        path: impl Into<String>,
        version: impl Into<String>,
        os: impl Into<String>,
        arch: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            os: os.into(),
            arch: arch.into(),
            tests: String::new(),
            checksum: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_record_new() {
        let record = PackageRecord::new(
            "https://example.com/a.deb",
            "1.2.3",
            "Ubuntu",
            "amd64",
        );

        assert_eq!(record.version, "1.2.3");
        assert!(record.tests.is_empty());
        assert!(record.checksum.is_empty());
    }

    #[test]
    fn test_package_record_field_order() {
        let record = PackageRecord::new("p", "v", "o", "a");
        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(
            json,
            r#"{"path":"p","version":"v","os":"o","arch":"a","tests":"","checksum":""}"#
        );
    }
}
