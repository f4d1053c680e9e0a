//! Output format abstraction.

use std::io::Write;
use stockscrape_types::ScrapeResult;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON object format.
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Rendered output was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Arrow table construction error.
    #[error("Table error: {0}")]
    Table(String),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a scrape result to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_result<W: Write + Send>(&self, result: &ScrapeResult, writer: W) -> Result<(), FormatError>;

    /// Renders a scrape result into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&self, result: &ScrapeResult) -> Result<Vec<u8>, FormatError> {
        let mut buffer = Vec::new();
        self.write_result(result, &mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::default().extension(), "csv");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
