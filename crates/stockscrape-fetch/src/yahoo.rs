//! Yahoo Finance chart datasource.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use stockscrape_types::{Interval, RawTick, Result, ScrapeError, ScrapeResult, Tick};
use tracing::{debug, warn};

use crate::client::{ClientConfig, ReqwestTransport, Transport};
use crate::datasource::{Datasource, DatasourceKind};
use crate::parse::parse_chart;
use crate::url::chart_url;

/// Datasource querying the Yahoo Finance chart endpoint.
///
/// Issues exactly one GET per call with a randomly chosen browser
/// `User-Agent`; failures are returned as-is without retrying.
#[derive(Debug, Clone)]
pub struct YahooDatasource {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl YahooDatasource {
    /// Creates a datasource with a reqwest transport built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self {
            transport: Arc::new(transport),
            config,
        })
    }

    /// Creates a datasource with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Creates a datasource over an existing transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Datasource for YahooDatasource {
    fn name(&self) -> &'static str {
        DatasourceKind::Yahoo.as_str()
    }

    async fn get_ticks(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: Interval,
    ) -> Result<ScrapeResult> {
        let url = chart_url(&self.config.base_url, symbol, start, end, interval);
        debug!(%url, "requesting yahoo chart");

        let response = self.transport.get(&url, self.config.user_agent()).await?;
        if !response.is_success() {
            warn!(status = response.status, "yahoo returned an error status");
            return Err(ScrapeError::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        let ticks = parse_chart(&response.body)?
            .into_iter()
            .map(RawTick::normalize)
            .collect::<Result<Vec<Tick>>>()?;
        debug!(count = ticks.len(), "normalized yahoo ticks");

        Ok(ScrapeResult::new(symbol, interval, ticks, start, end))
    }
}
