//! Binary entry point: scrape the selected publishers, aggregate, write JSON.
//!
//! ```sh
//! african_news_links --site all -o african_news_links.json
//! ```
//!
//! Exits with status 1 when no site could be indexed or no article was found.

use african_news_links::cli::Cli;
use african_news_links::classifier::SignalTable;
use african_news_links::outputs::json;
use african_news_links::pipeline::{self, Batch};
use african_news_links::scrapers;
use african_news_links::utils::format_summary;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Cli::parse();

    // --- Tracing init ---
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = Instant::now();
    info!("african_news_links starting up");
    debug!(?args, "Parsed CLI arguments");

    // ---- Index selected sites, in order ----
    let client = scrapers::build_client(Duration::from_secs(args.timeout_secs))?;
    let sites = args.site.sites();
    let mut batches: Vec<Batch> = Vec::with_capacity(sites.len());

    for (i, site) in sites.iter().enumerate() {
        if i > 0 && args.delay_ms > 0 {
            sleep(Duration::from_millis(args.delay_ms)).await;
        }
        match scrapers::index_site(&client, site).await {
            Ok(batch) => batches.push(batch),
            Err(e) => {
                error!(source = %site.source, url = site.index_url, error = %e, "Failed to index site; skipping");
            }
        }
    }

    if batches.is_empty() {
        error!(sites = sites.len(), "No site could be indexed");
        return Ok(ExitCode::FAILURE);
    }

    let candidate_count: usize = batches.iter().map(|b| b.candidates.len()).sum();
    info!(candidates = candidate_count, batches = batches.len(), "Indexing completed");

    // ---- Aggregate ----
    let records = pipeline::aggregate(batches, SignalTable::global());

    if records.is_empty() {
        warn!("No article admitted; not writing output");
        println!("No African news articles found.");
        return Ok(ExitCode::FAILURE);
    }

    // ---- Output ----
    if let Err(e) = json::write_records(&records, &args.output).await {
        error!(path = %args.output.display(), error = %e, "Failed to write JSON");
        return Err(e);
    }
    print!("{}", format_summary(&records, &args.output));

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = records.len(),
        "Execution complete"
    );

    Ok(ExitCode::SUCCESS)
}
