//! Object listing abstraction.

use async_trait::async_trait;
use pkgcat_error::Result;

use crate::s3::S3Object;

/// Trait for listing the objects a catalog is built from.
///
/// A listing failure is fatal to the run; implementations do not retry.
#[async_trait]
pub trait Lister: Send + Sync {
    /// List all objects, in backend order.
    async fn list(&self) -> Result<Vec<S3Object>>;

    /// Human-readable description of the source, for logging.
    fn description(&self) -> String;
}

/// A lister over a fixed set of objects.
#[derive(Debug, Clone, Default)]
pub struct StaticLister {
    objects: Vec<S3Object>,
}

impl StaticLister {
    /// Create a lister returning `objects`.
    pub fn new(objects: Vec<S3Object>) -> Self {
        Self { objects }
    }

    /// Create a lister from keys, with zero sizes.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(keys.into_iter().map(|k| S3Object::new(k, 0)).collect())
    }
}

#[async_trait]
impl Lister for StaticLister {
    async fn list(&self) -> Result<Vec<S3Object>> {
        Ok(self.objects.clone())
    }

    fn description(&self) -> String {
        format!("static({} objects)", self.objects.len())
    }
}
