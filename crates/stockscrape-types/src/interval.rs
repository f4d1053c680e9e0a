//! Sampling interval definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ScrapeError;

/// Sampling granularity between ticks.
///
/// Tokens are case-sensitive: `1m` is one minute while `1M` is one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// 1-minute ticks.
    #[serde(rename = "1m")]
    Minute1,
    /// 5-minute ticks.
    #[serde(rename = "5m")]
    Minute5,
    /// 15-minute ticks.
    #[serde(rename = "15m")]
    Minute15,
    /// 30-minute ticks.
    #[serde(rename = "30m")]
    Minute30,
    /// 1-hour ticks.
    #[serde(rename = "1h")]
    Hour1,
    /// 4-hour ticks.
    #[serde(rename = "4h")]
    Hour4,
    /// Daily ticks.
    #[default]
    #[serde(rename = "1d")]
    Day1,
    /// Weekly ticks.
    #[serde(rename = "1w")]
    Week1,
    /// Monthly ticks.
    #[serde(rename = "1M")]
    Month1,
    /// Yearly ticks.
    #[serde(rename = "1y")]
    Year1,
}

impl Interval {
    /// Returns the wire token for this interval.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Minute30 => "30m",
            Self::Hour1 => "1h",
            Self::Hour4 => "4h",
            Self::Day1 => "1d",
            Self::Week1 => "1w",
            Self::Month1 => "1M",
            Self::Year1 => "1y",
        }
    }

    /// Returns all available intervals.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute1,
            Self::Minute5,
            Self::Minute15,
            Self::Minute30,
            Self::Hour1,
            Self::Hour4,
            Self::Day1,
            Self::Week1,
            Self::Month1,
            Self::Year1,
        ]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| ScrapeError::InvalidInterval(s.to_string()))
    }
}
