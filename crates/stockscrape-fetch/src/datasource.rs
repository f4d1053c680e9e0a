//! Datasource contract and the registry of supported providers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::str::FromStr;
use std::sync::Arc;
use stockscrape_types::{Interval, Result, ScrapeError, ScrapeResult};

use crate::{ClientConfig, YahooDatasource};

/// A provider able to return ticks for a symbol, range and interval.
#[async_trait]
pub trait Datasource: Send + Sync + std::fmt::Debug {
    /// Registry name of the provider.
    fn name(&self) -> &'static str;

    /// Fetches ticks for `symbol` between `start` and `end` at `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached, answers with a
    /// non-2xx status, or returns data that cannot be normalized.
    async fn get_ticks(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: Interval,
    ) -> Result<ScrapeResult>;
}

/// Closed set of supported provider names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatasourceKind {
    /// Yahoo Finance chart API.
    #[default]
    Yahoo,
}

impl DatasourceKind {
    /// Returns the registry name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yahoo => "yahoo",
        }
    }

    /// Returns all supported providers.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Yahoo]
    }

    /// Instantiates the provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider's HTTP client cannot be created.
    pub fn build(&self, config: &ClientConfig) -> Result<Arc<dyn Datasource>> {
        match self {
            Self::Yahoo => Ok(Arc::new(YahooDatasource::new(config.clone())?)),
        }
    }
}

impl std::fmt::Display for DatasourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatasourceKind {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let supported: Vec<_> = Self::all().iter().map(Self::as_str).collect();
                ScrapeError::invalid_argument(format!(
                    "'{s}' is not a valid or supported datasource. Supported: {}",
                    supported.join(", ")
                ))
            })
    }
}
