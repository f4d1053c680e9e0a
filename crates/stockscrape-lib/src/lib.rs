//! Rust library for downloading historical stock prices.
//!
//! This is a facade crate that re-exports functionality from the stockscrape
//! workspace crates and hosts the [`Scraper`] orchestrator.
//!
//! # Quick Start
//!
//! ```ignore
//! use stockscrape_lib::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let request = ScrapeRequest::new("AAPL")
//!         .with_start_date("2024-01-01")
//!         .with_end_date("2024-02-01")
//!         .with_interval("1d");
//!
//!     let result = scrape(request).await?;
//!     println!("Downloaded {} ticks", result.len());
//!     print!("{}", result.to_csv()?);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod scraper;

pub use scraper::{
    DateInput, DatasourceSelector, IntervalInput, ResolvedRequest, ScrapeConfig, ScrapeRequest,
    Scraper, scrape,
};

// Re-export core types
pub use stockscrape_types::*;

// Re-export fetch functionality
pub use stockscrape_fetch::{
    ClientConfig, Datasource, DatasourceKind, HttpResponse, ReqwestTransport, Transport,
    YahooDatasource, parse_chart,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use stockscrape_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat, ScrapeResultExt,
};

#[cfg(feature = "table")]
pub use stockscrape_format::RecordBatch;

/// Prelude module for convenient imports.
///
/// ```
/// use stockscrape_lib::prelude::*;
/// ```
pub mod prelude {
    pub use crate::scraper::{
        DateInput, DatasourceSelector, IntervalInput, ScrapeConfig, ScrapeRequest, Scraper, scrape,
    };

    pub use stockscrape_types::{Interval, Result, ScrapeError, ScrapeResult, Tick};

    pub use stockscrape_fetch::{ClientConfig, Datasource, DatasourceKind};

    #[cfg(feature = "format")]
    pub use stockscrape_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, ScrapeResultExt,
    };
}
