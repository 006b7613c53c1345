//! CLI argument definitions for pkgcat.

use std::path::PathBuf;

use clap::Parser;
use pkgcat_cli_common::LogLevel;

/// Release package catalogs for the download widget.
///
/// Lists a package bucket, reads version, OS and architecture from each
/// package file name, and writes `elixir_packages.json`,
/// `erlang_packages.json` and `mongooseim_packages.json` as JSONP files.
///
/// ## Examples
///
/// Basic usage:
///   pkgcat
///
/// Against LocalStack, writing into a web root:
///   pkgcat -b test-packages --s3-endpoint http://localhost:4566 \
///       --output-dir /var/www/downloads
///
/// Only the first page of the listing:
///   pkgcat --single-page
#[derive(Parser, Debug)]
#[command(name = "pkgcat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === S3 Configuration ===
    /// S3 bucket name
    #[arg(short, long, env = "PKGCAT_S3_BUCKET", default_value = pkgcat::s3::DEFAULT_BUCKET)]
    pub bucket: String,

    /// S3 prefix to filter objects
    #[arg(short, long, env = "PKGCAT_S3_PREFIX")]
    pub prefix: Option<String>,

    /// Custom S3 endpoint URL (for LocalStack)
    #[arg(long, env = "PKGCAT_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// AWS access key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key: Option<String>,

    /// AWS secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// AWS profile name
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// S3 operation timeout in seconds (must be >= 1)
    #[arg(long, default_value = "30", value_parser = parse_positive_u64)]
    pub timeout_secs: u64,

    /// Only process the first page of the listing (at most 1000 keys)
    #[arg(long)]
    pub single_page: bool,

    // === Catalog Options ===
    /// URL prefix for package download paths
    #[arg(long, env = "PKGCAT_BASE_URL", default_value = pkgcat::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory to write catalog files to
    #[arg(long, env = "PKGCAT_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSONP callback name
    #[arg(long, default_value = pkgcat::emit::DEFAULT_CALLBACK)]
    pub callback: String,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Parse a positive u64 (>= 1).
fn parse_positive_u64(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value < 1 {
        return Err(format!("{} is not in 1..", value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pkgcat"]).unwrap();

        assert_eq!(cli.bucket, "esl-packages");
        assert_eq!(cli.base_url, "https://binaries2.erlang-solutions.com/");
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.callback, "jsonCallback");
        assert_eq!(cli.timeout_secs, 30);
        assert!(!cli.single_page);
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "pkgcat",
            "-b",
            "test-packages",
            "-p",
            "erlang/",
            "--s3-endpoint",
            "http://localhost:4566",
            "--single-page",
            "--output-dir",
            "out",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.bucket, "test-packages");
        assert_eq!(cli.prefix.as_deref(), Some("erlang/"));
        assert_eq!(cli.s3_endpoint.as_deref(), Some("http://localhost:4566"));
        assert!(cli.single_page);
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_parse_positive_u64() {
        assert_eq!(parse_positive_u64("5"), Ok(5));
        assert!(parse_positive_u64("0").is_err());
        assert!(parse_positive_u64("abc").is_err());
    }
}
