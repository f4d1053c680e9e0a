//! CSV output format.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use stockscrape_types::{ScrapeResult, Tick};

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Writes a header row followed by one comma-separated row per tick. Quotes
/// every field that does not parse as a number (header names, timestamps and
/// empty values) and terminates rows with CRLF.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Creates a new CSV formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for CsvFormatter {
    fn write_result<W: Write + Send>(&self, result: &ScrapeResult, writer: W) -> Result<(), FormatError> {
        let mut csv = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::NonNumeric)
            .terminator(Terminator::CRLF)
            .from_writer(writer);

        csv.write_record(Tick::FIELDS)?;
        for tick in result.ticks() {
            csv.serialize(tick)?;
        }
        csv.flush()?;

        Ok(())
    }
}
