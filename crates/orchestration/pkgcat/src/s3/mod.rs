//! S3 client and listing functionality.
//!
//! This module provides S3 operations for finding release packages:
//! - Client configuration with LocalStack support
//! - Object listing, paginated or single-page, with streaming
//! - [`S3Lister`], the [`Lister`](crate::Lister) used by the CLI

mod client;
mod list;

pub use client::{DEFAULT_BUCKET, S3Config, create_s3_client};
pub use list::{ListingMode, S3Lister, S3Object, list_objects};
