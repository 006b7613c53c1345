//! pkgcat CLI
//!
//! Generates download-picker package catalogs from an S3 bucket.

use clap::Parser;
use pkgcat::GenerationStats;
use pkgcat_types::Product;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    pkgcat_cli_common::init_logging(args.log_level)?;

    let stats = run::execute(args).await?;

    report(&stats);

    Ok(())
}

/// Print a run summary to stderr.
fn report(stats: &GenerationStats) {
    eprintln!();
    eprintln!("Generation completed:");
    eprintln!("  Keys listed:      {}", stats.keys_listed);
    eprintln!("  Not packages:     {}", stats.keys_unmatched);
    eprintln!("  Unrouted:         {}", stats.keys_unrouted);
    for product in Product::KNOWN {
        eprintln!(
            "  {:<17} {} packages",
            format!("{product}:"),
            stats.packages_for(product)
        );
    }
    eprintln!("  Catalogs written: {}", stats.catalogs_written);

    if let Some(duration) = stats.duration() {
        eprintln!(
            "  Duration:         {:.2}s",
            duration.num_milliseconds() as f64 / 1000.0
        );
    }
}
