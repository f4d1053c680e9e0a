//! Error types for stockscrape.

use thiserror::Error;

/// Result type alias for stockscrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while scraping and normalizing price data.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Bad or missing caller input (symbol, dates, interval or datasource name).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Interval token outside the supported set.
    #[error("'{0}' is not a valid interval, expected one of: 1m, 5m, 15m, 30m, 1h, 4h, 1d, 1w, 1M, 1y")]
    InvalidInterval(String),

    /// The provider answered with a non-2xx status.
    #[error("Upstream error (HTTP {status}): {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Response body as returned by the provider.
        body: String,
    },

    /// The provider response did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A per-tick array does not line up with the timestamp array.
    #[error("Length mismatch: '{field}' has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Name of the offending array.
        field: &'static str,
        /// Number of timestamps.
        expected: usize,
        /// Number of entries in the offending array.
        actual: usize,
    },

    /// Timestamp input could not be interpreted.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Price or volume input is not numeric.
    #[error("Invalid numeric value for {field}: {value}")]
    InvalidNumeric {
        /// Tick field being coerced.
        field: &'static str,
        /// Offending input.
        value: String,
    },

    /// HTTP transport failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Creates an [`ScrapeError::InvalidArgument`] from anything printable.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a [`ScrapeError::MalformedResponse`] from anything printable.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
