//! Output formatters for the stockscrape historical price downloader.
//!
//! This crate provides formatters for writing scrape results
//! to various output formats:
//!
//! - [`CsvFormatter`] - CSV format with non-numeric quoting
//! - [`JsonFormatter`] - JSON object format
//! - [`ScrapeResultExt`] - `to_csv` and, with the `table` feature, an Arrow `to_table`

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

#[cfg(feature = "table")]
mod table;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;

#[cfg(feature = "table")]
pub use arrow::record_batch::RecordBatch;

use stockscrape_types::ScrapeResult;

/// Serialization helpers for [`ScrapeResult`] beyond its built-in JSON encoding.
pub trait ScrapeResultExt {
    /// Renders the result as a CSV document.
    ///
    /// # Errors
    ///
    /// Returns an error if CSV serialization fails.
    fn to_csv(&self) -> Result<String, FormatError>;

    /// Converts the ticks into an Arrow table with columns
    /// `[timestamp, open, high, low, close, volume]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be assembled.
    #[cfg(feature = "table")]
    fn to_table(&self) -> Result<RecordBatch, FormatError>;
}

impl ScrapeResultExt for ScrapeResult {
    fn to_csv(&self) -> Result<String, FormatError> {
        Ok(String::from_utf8(CsvFormatter::new().render(self)?)?)
    }

    #[cfg(feature = "table")]
    fn to_table(&self) -> Result<RecordBatch, FormatError> {
        table::ticks_to_batch(self.ticks())
    }
}
