use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use reviewforge::models::{PublishedReview, RunReport};
use reviewforge::{
    CatalogDiscovery, Config, Error, FilePublisher, Layout, PipelineConfig, ReviewPipeline,
    SampleCollector, Storage, TracingObserver,
};

#[derive(Parser, Debug)]
#[command(name = "reviewforge")]
#[command(version = "0.1.0")]
#[command(about = "Generate product review pages from aggregated user reviews")]
struct Args {
    /// Product niche to research (e.g. electronics, kitchen)
    #[arg(short, long, required_unless_present = "history")]
    niche: Option<String>,

    /// Number of products to review
    #[arg(short, long, default_value = "3")]
    count: usize,

    /// Review one named product instead of running discovery
    #[arg(short, long)]
    product: Option<String>,

    /// Configuration file path
    #[arg(long, default_value = reviewforge::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable deep analysis mode
    #[arg(long)]
    deep_analysis: bool,

    /// Page layout (overrides the config file)
    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// Directory review pages are written to (overrides the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Database path for the publish ledger (overrides the config file)
    #[arg(long)]
    database: Option<PathBuf>,

    /// List previously published reviews and exit
    #[arg(long)]
    history: bool,

    /// Summary format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("reviewforge=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(layout) = args.layout {
        config.layout = layout;
    }
    if let Some(ref dir) = args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(ref db) = args.database {
        config.database_path = db.clone();
    }

    let storage = Storage::new(&config.database_path)?;

    if args.history {
        let published = storage.list_published()?;
        println!("{}", format_history(&published, &args.format)?);
        return Ok(());
    }

    if args.deep_analysis {
        tracing::info!("Deep analysis requested; it does not change the generated pages");
    }

    let pipeline = ReviewPipeline::new(
        CatalogDiscovery::new(),
        SampleCollector::new(),
        FilePublisher::new(&config.output_dir),
        storage,
        Arc::new(TracingObserver),
        PipelineConfig::from(&config),
    )
    .with_progress(true);

    if let Some(ref product) = args.product {
        tracing::info!("Analyzing specific product: {}", product);
        match pipeline.review_single_product(product).await {
            Err(Error::NotWired(reason)) => {
                tracing::warn!("Single-product mode is not available: {}", reason);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
            Ok(report) => {
                println!("{}", format_report(&report, &args.format)?);
                return Ok(());
            }
        }
    }

    let niche = args
        .niche
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("--niche is required"))?;

    let report = pipeline.run(niche, args.count).await?;
    println!("{}", format_report(&report, &args.format)?);

    Ok(())
}

fn format_report(report: &RunReport, format: &str) -> anyhow::Result<String> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut output = String::new();
    output.push_str(&format!("\n=== Review Run: {} ===\n\n", report.niche));
    output.push_str(&format!("Candidates: {}\n", report.candidates));

    if !report.published.is_empty() {
        output.push_str("\nPublished:\n");
        for published in &report.published {
            output.push_str(&format!(
                "  + {} ({} reviews) -> {}\n",
                published.product_name,
                published.review_count,
                published.path.display()
            ));
        }
    }

    if !report.skipped.is_empty() {
        output.push_str("\nSkipped:\n");
        for skipped in &report.skipped {
            output.push_str(&format!("  - {}: {}\n", skipped.product_name, skipped.reason));
        }
    }

    if !report.failed.is_empty() {
        output.push_str("\nFailed:\n");
        for failed in &report.failed {
            output.push_str(&format!("  ! {}: {}\n", failed.product_name, failed.error));
        }
    }

    Ok(output)
}

fn format_history(published: &[PublishedReview], format: &str) -> anyhow::Result<String> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(published)?);
    }

    if published.is_empty() {
        return Ok("No reviews published yet.".to_string());
    }

    let mut output = String::from("\n=== Published Reviews ===\n\n");
    for review in published {
        output.push_str(&format!(
            "{}  {} [{}] {} reviews -> {}\n",
            review.published_at.format("%Y-%m-%d %H:%M"),
            review.product_name,
            review.niche,
            review.review_count,
            review.path.display()
        ));
    }

    Ok(output)
}
