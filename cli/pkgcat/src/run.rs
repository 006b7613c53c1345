//! Main execution logic for the pkgcat CLI.

use anyhow::Result;
use pkgcat::{
    GenerationStats, Generator, GeneratorConfig, ListingMode, S3Config, S3Lister,
    create_s3_client,
};
use tracing::info;

use crate::args::Cli;

/// Build the S3 configuration from CLI arguments.
pub fn s3_config(args: &Cli) -> S3Config {
    let mut s3_config = S3Config::new(&args.bucket)
        .with_region(&args.region)
        .with_timeout(args.timeout_secs);

    if args.single_page {
        s3_config = s3_config.with_listing_mode(ListingMode::SinglePage);
    }

    if let Some(prefix) = &args.prefix {
        s3_config = s3_config.with_prefix(prefix);
    }

    if let Some(endpoint) = &args.s3_endpoint {
        s3_config = s3_config.with_endpoint(endpoint);
    }

    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        s3_config = s3_config.with_credentials(access_key, secret_key);
    }

    if let Some(profile) = &args.profile {
        s3_config = s3_config.with_profile(profile);
    }

    s3_config
}

/// Build the generator configuration from CLI arguments.
pub fn generator_config(args: &Cli) -> GeneratorConfig {
    GeneratorConfig::new()
        .with_base_url(&args.base_url)
        .with_output_dir(&args.output_dir)
        .with_callback(&args.callback)
}

/// Execute a generation run with the provided arguments.
pub async fn execute(args: Cli) -> Result<GenerationStats> {
    let s3_config = s3_config(&args);
    let config = generator_config(&args);

    // Validate everything local before touching the network
    let extractor = config.extractor()?;
    let emitter = config.file_emitter()?;

    let s3_client = create_s3_client(&s3_config).await?;

    info!(
        bucket = %s3_config.bucket,
        prefix = ?s3_config.prefix,
        listing = ?s3_config.listing_mode,
        output_dir = %config.output_dir.display(),
        "Generating catalogs"
    );

    let generator = Generator::new(S3Lister::new(s3_client, &s3_config), extractor, emitter);
    let stats = generator.run().await?;

    Ok(stats)
}
