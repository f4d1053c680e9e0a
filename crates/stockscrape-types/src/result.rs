//! Scrape result container.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::timestamp::format_timestamp;
use crate::{Interval, Result, Tick};

/// Output of one scrape request: metadata plus ordered ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeResult {
    /// Uppercased ticker symbol.
    pub symbol: String,
    /// Requested range start, rendered as `YYYY-MM-DD HH:MM:SS`.
    pub start_date: String,
    /// Requested range end, rendered as `YYYY-MM-DD HH:MM:SS`.
    pub end_date: String,
    /// Sampling interval.
    pub interval: Interval,
    /// Ticks in the order the source returned them.
    pub ticks: Vec<Tick>,
}

impl ScrapeResult {
    /// Creates a new result, uppercasing the symbol.
    #[must_use]
    pub fn new(
        symbol: &str,
        interval: Interval,
        ticks: Vec<Tick>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            start_date: format_timestamp(&start),
            end_date: format_timestamp(&end),
            interval,
            ticks,
        }
    }

    /// Returns the ticks.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Returns the number of ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Returns true if no ticks were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Returns `{symbol, start_date, end_date, interval, ticks}` as an ordered map.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_mapping(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encodes the result as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the result as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
