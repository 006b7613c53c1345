//! pkgcat - release package catalogs from an S3 bucket.
//!
//! This crate lists a package bucket, reads version, OS and architecture from
//! each package file name, and writes one download-picker catalog per product:
//!
//! - S3 listing with optional pagination and LocalStack support
//! - Package file name extraction ([`Extractor`])
//! - Grouping into product catalogs by OS tab ([`Aggregator`])
//! - JSONP catalog files for the download widget ([`FileEmitter`])
//!
//! # Example
//!
//! ```ignore
//! use pkgcat::{FileEmitter, Generator, GeneratorConfig};
//! use pkgcat::s3::{S3Config, S3Lister, create_s3_client};
//!
//! let s3_config = S3Config::new("esl-packages").with_region("us-east-1");
//! let client = create_s3_client(&s3_config).await?;
//!
//! let config = GeneratorConfig::new().with_output_dir("public/");
//! let generator = Generator::new(
//!     S3Lister::new(client, &s3_config),
//!     config.extractor()?,
//!     config.file_emitter()?,
//! );
//!
//! let stats = generator.run().await?;
//! eprintln!("Cataloged {} packages", stats.total_packages());
//! ```

pub mod aggregate;
pub mod config;
pub mod emit;
pub mod extract;
pub mod generator;
pub mod lister;
pub mod s3;
pub mod stats;

pub use aggregate::{Aggregator, Routing, aggregate, os_name};
pub use config::GeneratorConfig;
pub use emit::{Emitter, FileEmitter, emit_all, render_jsonp};
pub use extract::{DEFAULT_BASE_URL, Extractor};
pub use generator::{Generator, catalog_objects};
pub use lister::{Lister, StaticLister};
pub use s3::{ListingMode, S3Config, S3Lister, S3Object, create_s3_client, list_objects};
pub use stats::GenerationStats;
