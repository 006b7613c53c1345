//! S3 object listing with pagination support.

use async_stream::try_stream;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use futures::{Stream, StreamExt, pin_mut};
use pkgcat_error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::S3Config;
use crate::Lister;

/// How much of a listing to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingMode {
    /// Follow continuation tokens until the listing is exhausted (default)
    #[default]
    Paginated,

    /// Fetch only the first page (at most 1000 keys); later pages are ignored
    SinglePage,
}

/// Represents an S3 object found during listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Object {
    /// The object key (full path within the bucket)
    pub key: String,

    /// Size of the object in bytes
    pub size: u64,
}

impl S3Object {
    /// Create an object entry.
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }
}

/// List objects in an S3 bucket with optional prefix filtering.
///
/// Returns a stream of [`S3Object`] items in the order S3 returns them.
/// Directory markers (keys ending with `/`) and empty keys are filtered out.
///
/// # Arguments
///
/// * `client` - The S3 client to use
/// * `bucket` - The bucket name to list
/// * `prefix` - Optional prefix to filter objects
/// * `mode` - Whether to follow continuation tokens
pub fn list_objects<'a>(
    client: &'a Client,
    bucket: &'a str,
    prefix: Option<&'a str>,
    mode: ListingMode,
) -> impl Stream<Item = Result<S3Object>> + 'a {
    let bucket = bucket.to_string();
    let prefix = prefix.map(|s| s.to_string());

    try_stream! {
        let mut continuation_token: Option<String> = None;
        let mut page = 0u32;

        loop {
            let mut req = client.list_objects_v2().bucket(&bucket);

            if let Some(ref prefix) = prefix {
                req = req.prefix(prefix);
            }

            if let Some(ref token) = continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req.send().await.map_err(|e| {
                CatalogError::Storage(format!(
                    "S3 list objects failed for bucket '{bucket}': {}",
                    aws_sdk_s3::error::DisplayErrorContext(&e)
                ))
            })?;
            page += 1;

            debug!(
                bucket = %bucket,
                page,
                keys = resp.key_count.unwrap_or_default(),
                truncated = resp.is_truncated.unwrap_or(false),
                "Listed page"
            );

            if let Some(contents) = resp.contents {
                for obj in contents {
                    let key = obj.key.unwrap_or_default();

                    if key.is_empty() || key.ends_with('/') {
                        continue;
                    }

                    yield S3Object {
                        key,
                        size: obj.size.unwrap_or(0).max(0) as u64,
                    };
                }
            }

            if mode == ListingMode::SinglePage {
                if resp.is_truncated == Some(true) {
                    debug!(bucket = %bucket, "Single-page listing, ignoring remaining pages");
                }
                break;
            }

            if resp.is_truncated == Some(true) {
                continuation_token = resp.next_continuation_token;
                if continuation_token.is_none() {
                    break;
                }
            } else {
                break;
            }
        }
    }
}

/// [`Lister`] backed by an S3 bucket.
pub struct S3Lister {
    client: Client,
    bucket: String,
    prefix: Option<String>,
    mode: ListingMode,
}

impl S3Lister {
    /// Create a lister for the bucket, prefix and mode in `config`.
    pub fn new(client: Client, config: &S3Config) -> Self {
        Self {
            client,
            bucket: config.bucket.clone(),
            prefix: config.prefix.clone(),
            mode: config.listing_mode,
        }
    }
}

#[async_trait]
impl Lister for S3Lister {
    async fn list(&self) -> Result<Vec<S3Object>> {
        let stream = list_objects(&self.client, &self.bucket, self.prefix.as_deref(), self.mode);
        pin_mut!(stream);

        let mut objects = Vec::new();
        while let Some(result) = stream.next().await {
            objects.push(result?);
        }
        Ok(objects)
    }

    fn description(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("s3://{}/{}", self.bucket, prefix),
            None => format!("s3://{}", self.bucket),
        }
    }
}
