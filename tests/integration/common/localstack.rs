//! LocalStack test context and utilities.

use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;

/// Keys of a small package bucket covering every product, a non-package file
/// and a package with no product marker.
pub const PACKAGE_KEYS: &[&str] = &[
    "elixir/ubuntu/elixir_1.14.0-1~ubuntu~focal_all.deb",
    "erlang/debian/esl-erlang_25.0.2-1~debian~bullseye_amd64.deb",
    "erlang/ubuntu/esl-erlang_25.0.2-1~ubuntu~focal_amd64.deb",
    "erlang/ubuntu/esl-erlang_25.0.2-1~ubuntu~jammy_arm64.deb",
    "mongooseim/centos/mongooseim_6.0.0-1~centos~7_x86_64.rpm",
    "otp/ubuntu/otp_25.0-1~ubuntu~focal_amd64.deb",
    "readme.txt",
];

/// LocalStack test context providing an S3 client.
pub struct LocalStackTestContext {
    pub s3: S3Client,
    pub endpoint: String,
    pub region: String,
}

impl LocalStackTestContext {
    /// Create a new LocalStack test context.
    ///
    /// Uses the `LOCALSTACK_ENDPOINT` environment variable if set,
    /// otherwise defaults to `http://localhost:4566`.
    pub async fn new() -> Self {
        let endpoint = std::env::var("LOCALSTACK_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4566".to_string());
        let region = "us-east-1".to_string();

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(region.clone()))
            .endpoint_url(&endpoint)
            .credentials_provider(aws_sdk_s3::config::Credentials::new(
                "test", "test", None, None, "localstack",
            ))
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        Self {
            s3: S3Client::from_conf(s3_config),
            endpoint,
            region,
        }
    }

    /// Check if LocalStack is available and healthy.
    pub async fn is_available(&self) -> bool {
        self.s3.list_buckets().send().await.is_ok()
    }

    /// Create an S3 bucket for testing.
    pub async fn create_bucket(&self, name: &str) -> Result<(), aws_sdk_s3::Error> {
        let buckets = self.s3.list_buckets().send().await?;
        let exists = buckets
            .buckets()
            .iter()
            .any(|b| b.name().unwrap_or_default() == name);

        if !exists {
            self.s3.create_bucket().bucket(name).send().await?;
        }
        Ok(())
    }

    /// Upload an empty object under `key`.
    pub async fn put_empty(&self, bucket: &str, key: &str) -> Result<(), aws_sdk_s3::Error> {
        self.s3
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from_static(b""))
            .send()
            .await?;
        Ok(())
    }

    /// Upload empty objects for every key in `keys`.
    pub async fn put_keys(&self, bucket: &str, keys: &[&str]) -> Result<(), aws_sdk_s3::Error> {
        for key in keys {
            self.put_empty(bucket, key).await?;
        }
        Ok(())
    }
}
