mod aggregator;
mod archiver;
mod diagnostics;
mod fetcher;
mod models;
mod parser;
mod report;
mod selectors;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "amazon_result_scraper", about = "Scrape Amazon search results into an HTML report")]
struct Cli {
    /// Search query
    query: String,
    /// Number of result pages to fetch
    #[arg(short, long, default_value_t = 3)]
    pages: u32,
    /// Entries rated below this are dropped
    #[arg(long, default_value_t = 4.3)]
    min_rating: f64,
    /// Maximum number of records in the report
    #[arg(long, default_value_t = 50)]
    max_results: usize,
    /// Output HTML file
    #[arg(short, long, default_value = "amazon_results.html")]
    output: String,
    /// Site origin used for search URLs and product links
    #[arg(long, default_value = "https://www.amazon.co.uk")]
    base_url: String,
    /// Also write the final record set as JSON
    #[arg(long)]
    archive: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let client = fetcher::build_client()?;
    let mut sink = diagnostics::LogSink;
    let mut candidates = Vec::new();

    for page in 1..=cli.pages {
        let url = fetcher::search_url(&cli.base_url, &cli.query, page);
        info!("fetching page {}: {}", page, url);

        let html = match fetcher::fetch_search_page(&client, &url) {
            Ok(html) => html,
            Err(e) => {
                warn!("page {} failed, skipping: {:#}", page, e);
                continue;
            }
        };

        let records = parser::extract_products(&html, &cli.base_url, cli.min_rating, &mut sink);
        info!("page {}: {} candidates", page, records.len());
        candidates.extend(records);
    }

    let results = aggregator::aggregate(candidates, cli.max_results);
    if results.is_empty() {
        warn!("no results for '{}'; nothing written", cli.query);
        return Ok(());
    }

    report::save_report(&results, &cli.query, &cli.output)?;
    info!("wrote {} results to {}", results.len(), cli.output);

    if let Some(path) = &cli.archive {
        archiver::save_to_file(&results, &cli.query, path)?;
        info!("archived results to {}", path);
    }

    Ok(())
}
