//! End-to-end catalog generation against LocalStack S3.

use crate::common::{LocalStackTestContext, PACKAGE_KEYS};
use pkgcat::emit::{strip_jsonp, to_pretty_json};
use pkgcat::{
    FileEmitter, Generator, GeneratorConfig, ListingMode, Lister, S3Config, S3Lister,
    create_s3_client,
};
use pkgcat_error::CatalogError;
use pkgcat_types::{Catalog, Product};

/// Read a catalog file back, checking the wrapper and canonical layout.
fn read_catalog(emitter: &FileEmitter, product: Product) -> Catalog {
    let path = emitter.path_for(product).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    let json = strip_jsonp("jsonCallback", &text).expect("jsonCallback wrapper");

    let catalog: Catalog = serde_json::from_str(json).unwrap();
    assert_eq!(to_pretty_json(&catalog).unwrap(), json);
    catalog
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_generate_catalogs_from_s3() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-pkgcat-bucket";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_keys(bucket, PACKAGE_KEYS).await.unwrap();

    let s3_config = S3Config::new(bucket)
        .with_endpoint(&ctx.endpoint)
        .with_region(&ctx.region)
        .with_credentials("test", "test");
    let client = create_s3_client(&s3_config).await.unwrap();

    let out = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new().with_output_dir(out.path());
    let emitter = config.file_emitter().unwrap();

    let generator = Generator::new(
        S3Lister::new(client, &s3_config),
        config.extractor().unwrap(),
        config.file_emitter().unwrap(),
    );
    let stats = generator.run().await.unwrap();

    assert_eq!(stats.keys_listed, PACKAGE_KEYS.len());
    assert_eq!(stats.keys_unmatched, 1);
    assert_eq!(stats.keys_unrouted, 1);
    assert_eq!(stats.catalogs_written, 3);

    let erlang = read_catalog(&emitter, Product::Erlang);
    // S3 lists keys in lexicographic order
    let tabs: Vec<&str> = erlang.tabs.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tabs, vec!["debian", "ubuntu"]);
    assert_eq!(erlang.tab("ubuntu").unwrap().package_count(), 2);

    let mongooseim = read_catalog(&emitter, Product::MongooseIm);
    let package = &mongooseim.tabs[0].flavours[0].packages[0];
    assert_eq!(
        package.path,
        "https://binaries2.erlang-solutions.com/mongooseim/centos/mongooseim_6.0.0-1~centos~7_x86_64.rpm"
    );
    assert_eq!(package.os, "Centos");

    let elixir = read_catalog(&emitter, Product::Elixir);
    assert_eq!(elixir.package_count(), 1);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_pagination_modes() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-pkgcat-pages";
    ctx.create_bucket(bucket).await.unwrap();

    // One more than a single ListObjectsV2 page
    let keys: Vec<String> = (0..1001)
        .map(|i| format!("erlang/ubuntu/esl-erlang_25.0.{i}-1~ubuntu~focal_amd64.deb"))
        .collect();
    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    ctx.put_keys(bucket, &key_refs).await.unwrap();

    let paginated = S3Config::new(bucket)
        .with_endpoint(&ctx.endpoint)
        .with_region(&ctx.region)
        .with_credentials("test", "test");
    let single_page = paginated.clone().with_listing_mode(ListingMode::SinglePage);

    let client = create_s3_client(&paginated).await.unwrap();

    let all = S3Lister::new(client.clone(), &paginated).list().await.unwrap();
    let first_page = S3Lister::new(client, &single_page).list().await.unwrap();

    assert_eq!(all.len(), 1001);
    assert_eq!(first_page.len(), 1000);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_missing_bucket_is_storage_error() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let s3_config = S3Config::new("pkgcat-bucket-that-does-not-exist")
        .with_endpoint(&ctx.endpoint)
        .with_region(&ctx.region)
        .with_credentials("test", "test");
    let client = create_s3_client(&s3_config).await.unwrap();

    let err = S3Lister::new(client, &s3_config).list().await.unwrap_err();
    assert!(matches!(err, CatalogError::Storage(_)));
}
