//! Tick data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::timestamp::{format_timestamp, from_epoch_seconds, parse_timestamp, serialize_timestamp};
use crate::{Result, ScrapeError};

/// A single OHLCV observation.
///
/// Prices and volume are individually nullable; providers leave gaps for
/// halted or pre-market periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    /// Timestamp of the observation (UTC).
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: Option<f64>,
    /// Highest price.
    pub high: Option<f64>,
    /// Lowest price.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Traded volume.
    pub volume: Option<i64>,
}

impl Tick {
    /// Column names in output order.
    pub const FIELDS: [&'static str; 6] = ["timestamp", "open", "high", "low", "close", "volume"];

    /// Creates a new tick from already-normalized values.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: Option<f64>,
        high: Option<f64>,
        low: Option<f64>,
        close: Option<f64>,
        volume: Option<i64>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns the fields as `[timestamp, open, high, low, close, volume]`.
    ///
    /// The timestamp is rendered as text, missing values as `null`.
    #[must_use]
    pub fn to_list(&self) -> Vec<Value> {
        vec![
            Value::String(format_timestamp(&self.timestamp)),
            Value::from(self.open),
            Value::from(self.high),
            Value::from(self.low),
            Value::from(self.close),
            Value::from(self.volume),
        ]
    }

    /// Returns the fields as an ordered map keyed by [`Tick::FIELDS`].
    #[must_use]
    pub fn to_mapping(&self) -> Map<String, Value> {
        Self::FIELDS
            .iter()
            .map(|name| (*name).to_string())
            .zip(self.to_list())
            .collect()
    }
}

impl TryFrom<RawTick> for Tick {
    type Error = ScrapeError;

    fn try_from(raw: RawTick) -> Result<Self> {
        raw.normalize()
    }
}

/// Timestamp as received from a caller or provider, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTimestamp {
    /// Seconds since the Unix epoch.
    Epoch(f64),
    /// Numeric text (epoch seconds) or free-form date/time text.
    Text(String),
    /// Already-parsed timestamp.
    Parsed(DateTime<Utc>),
}

impl RawTimestamp {
    /// Resolves the input to a single UTC timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidTimestamp`] if the input cannot be interpreted.
    pub fn normalize(&self) -> Result<DateTime<Utc>> {
        match self {
            Self::Epoch(seconds) => from_epoch_seconds(*seconds),
            Self::Text(text) => match text.trim().parse::<f64>() {
                Ok(seconds) => from_epoch_seconds(seconds),
                Err(_) => parse_timestamp(text),
            },
            Self::Parsed(timestamp) => Ok(*timestamp),
        }
    }
}

impl From<i64> for RawTimestamp {
    fn from(seconds: i64) -> Self {
        Self::Epoch(seconds as f64)
    }
}

impl From<f64> for RawTimestamp {
    fn from(seconds: f64) -> Self {
        Self::Epoch(seconds)
    }
}

impl From<&str> for RawTimestamp {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawTimestamp {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<DateTime<Utc>> for RawTimestamp {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Self::Parsed(timestamp)
    }
}

/// Price or volume value as received, before coercion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// Integral number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Numeric text.
    Text(String),
}

impl RawNumber {
    /// Coerces the value to a floating-point price.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidNumeric`] if text does not parse as a number.
    pub fn to_f64(&self, field: &'static str) -> Result<f64> {
        match self {
            Self::Int(value) => Ok(*value as f64),
            Self::Float(value) => Ok(*value),
            Self::Text(text) => text.trim().parse::<f64>().map_err(|_| invalid(field, text)),
        }
    }

    /// Coerces the value to an integer volume, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidNumeric`] if the value is not a finite number.
    pub fn to_i64(&self, field: &'static str) -> Result<i64> {
        let truncate = |value: f64| {
            if value.is_finite() {
                Ok(value.trunc() as i64)
            } else {
                Err(invalid(field, &value.to_string()))
            }
        };
        match self {
            Self::Int(value) => Ok(*value),
            Self::Float(value) => truncate(*value),
            Self::Text(text) => {
                let text = text.trim();
                match text.parse::<i64>() {
                    Ok(value) => Ok(value),
                    Err(_) => truncate(text.parse::<f64>().map_err(|_| invalid(field, text))?),
                }
            }
        }
    }
}

fn invalid(field: &'static str, value: &str) -> ScrapeError {
    ScrapeError::InvalidNumeric {
        field,
        value: value.to_string(),
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for RawNumber {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RawNumber {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Raw tick as assembled from provider arrays (before normalization).
#[derive(Debug, Clone, PartialEq)]
pub struct RawTick {
    /// Timestamp input.
    pub timestamp: RawTimestamp,
    /// Opening price input.
    pub open: Option<RawNumber>,
    /// Highest price input.
    pub high: Option<RawNumber>,
    /// Lowest price input.
    pub low: Option<RawNumber>,
    /// Closing price input.
    pub close: Option<RawNumber>,
    /// Volume input.
    pub volume: Option<RawNumber>,
}

impl RawTick {
    /// Creates a new raw tick.
    #[must_use]
    pub fn new(
        timestamp: impl Into<RawTimestamp>,
        open: Option<RawNumber>,
        high: Option<RawNumber>,
        low: Option<RawNumber>,
        close: Option<RawNumber>,
        volume: Option<RawNumber>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Normalizes the timestamp and coerces prices and volume.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidTimestamp`] or [`ScrapeError::InvalidNumeric`]
    /// when a field cannot be coerced.
    pub fn normalize(self) -> Result<Tick> {
        let price = |value: &Option<RawNumber>, field| value.as_ref().map(|v| v.to_f64(field)).transpose();
        Ok(Tick {
            timestamp: self.timestamp.normalize()?,
            open: price(&self.open, "open")?,
            high: price(&self.high, "high")?,
            low: price(&self.low, "low")?,
            close: price(&self.close, "close")?,
            volume: self.volume.as_ref().map(|v| v.to_i64("volume")).transpose()?,
        })
    }
}
