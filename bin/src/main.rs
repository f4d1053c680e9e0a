//! stockscrape CLI - historical stock price downloader.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use stockscrape_lib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod display;

use display::Format;

#[derive(Debug, Parser)]
#[command(name = "stockscrape")]
#[command(about = "Download historical stock prices to CSV or JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Ticker symbol (e.g., AAPL, MSFT, ^GSPC)
    symbol: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Output file path. Defaults to <symbol>.<format>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sampling interval
    #[arg(short, long, value_parser = display::interval_parser())]
    interval: Option<Interval>,

    /// Start date (e.g., 2024-01-01 or 2024-01-01T09:30:00Z). Defaults to end minus --days.
    #[arg(short, long)]
    start_date: Option<String>,

    /// End date. Defaults to now.
    #[arg(short, long)]
    end_date: Option<String>,

    /// Number of days to fetch when no start date is given
    #[arg(short, long)]
    days: Option<i64>,

    /// Datasource name
    #[arg(long, ignore_case = true, value_parser = display::datasource_parser())]
    datasource: Option<DatasourceKind>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress status output)
    #[arg(short, long)]
    quiet: bool,
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let mut request = ScrapeRequest::new(cli.symbol.as_str());
    if let Some(start) = cli.start_date {
        request = request.with_start_date(start);
    }
    if let Some(end) = cli.end_date {
        request = request.with_end_date(end);
    }
    if let Some(days) = cli.days {
        request = request.with_days(days);
    }
    if let Some(interval) = cli.interval {
        request = request.with_interval(interval);
    }

    let config = ScrapeConfig::default()
        .with_client(ClientConfig::default().with_timeout(Duration::from_secs(cli.timeout)))
        .with_default_datasource(cli.datasource.unwrap_or_default());

    let result = Scraper::new(config)
        .scrape(request)
        .await
        .with_context(|| format!("Failed to scrape {}", cli.symbol))?;

    // Fully rendered before the output file is created
    let bytes = display::render(&result, cli.format, cli.pretty)?;
    let output = cli
        .output
        .unwrap_or_else(|| display::default_output(&cli.symbol, cli.format));
    display::write_output(&bytes, &output)?;

    info!(ticks = result.len(), path = %output.display(), "Wrote output");
    if !cli.quiet {
        println!(
            "Wrote {} {} ticks for {} to {}",
            result.len(),
            result.interval,
            result.symbol,
            output.display()
        );
    }

    Ok(())
}
