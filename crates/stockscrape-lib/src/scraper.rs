//! Scrape orchestration: request defaults, validation and datasource dispatch.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use stockscrape_fetch::{ClientConfig, Datasource, DatasourceKind};
use stockscrape_types::{Interval, Result, ScrapeError, ScrapeResult, parse_timestamp};
use tracing::info;

/// A date bound as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Free-form date text, parsed on resolution.
    Text(String),
    /// An already resolved instant.
    At(DateTime<Utc>),
}

impl DateInput {
    fn resolve(&self, field: &str) -> Result<DateTime<Utc>> {
        match self {
            Self::At(at) => Ok(*at),
            Self::Text(text) => parse_timestamp(text)
                .map_err(|_| ScrapeError::invalid_argument(format!("invalid {field} '{text}'"))),
        }
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(at: DateTime<Utc>) -> Self {
        Self::At(at)
    }
}

/// An interval as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalInput {
    /// Wire token such as `"1d"`.
    Token(String),
    /// A typed interval.
    Value(Interval),
}

impl IntervalInput {
    fn resolve(&self) -> Result<Interval> {
        match self {
            Self::Value(interval) => Ok(*interval),
            Self::Token(token) => token
                .parse()
                .map_err(|e: ScrapeError| ScrapeError::invalid_argument(e.to_string())),
        }
    }
}

impl From<&str> for IntervalInput {
    fn from(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

impl From<String> for IntervalInput {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

impl From<Interval> for IntervalInput {
    fn from(interval: Interval) -> Self {
        Self::Value(interval)
    }
}

/// Selects the datasource serving a request.
#[derive(Debug, Clone)]
pub enum DatasourceSelector {
    /// A registry name such as `"yahoo"`.
    Named(String),
    /// A registry entry.
    Kind(DatasourceKind),
    /// A caller-supplied provider.
    Instance(Arc<dyn Datasource>),
}

impl DatasourceSelector {
    fn resolve(&self, config: &ClientConfig) -> Result<Arc<dyn Datasource>> {
        match self {
            Self::Named(name) => name.parse::<DatasourceKind>()?.build(config),
            Self::Kind(kind) => kind.build(config),
            Self::Instance(source) => Ok(Arc::clone(source)),
        }
    }
}

impl From<&str> for DatasourceSelector {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for DatasourceSelector {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<DatasourceKind> for DatasourceSelector {
    fn from(kind: DatasourceKind) -> Self {
        Self::Kind(kind)
    }
}

impl From<Arc<dyn Datasource>> for DatasourceSelector {
    fn from(source: Arc<dyn Datasource>) -> Self {
        Self::Instance(source)
    }
}

/// Caller parameters for one scrape.
///
/// Everything except the symbol is optional; see [`ScrapeRequest::resolve`]
/// for the defaults.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    /// Ticker symbol.
    pub symbol: String,
    /// Inclusive range start.
    pub start_date: Option<DateInput>,
    /// Range end.
    pub end_date: Option<DateInput>,
    /// Day count used when no start date is given.
    pub days: Option<i64>,
    /// Sampling interval.
    pub interval: Option<IntervalInput>,
    /// Datasource override.
    pub datasource: Option<DatasourceSelector>,
}

/// A request with every default applied and every input validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// Ticker symbol as given, trimmed.
    pub symbol: String,
    /// Range start.
    pub start: DateTime<Utc>,
    /// Range end.
    pub end: DateTime<Utc>,
    /// Sampling interval.
    pub interval: Interval,
}

impl ScrapeRequest {
    /// Creates a request for `symbol` with every other parameter defaulted.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            start_date: None,
            end_date: None,
            days: None,
            interval: None,
            datasource: None,
        }
    }

    /// Sets the range start.
    #[must_use]
    pub fn with_start_date(mut self, start: impl Into<DateInput>) -> Self {
        self.start_date = Some(start.into());
        self
    }

    /// Sets the range end.
    #[must_use]
    pub fn with_end_date(mut self, end: impl Into<DateInput>) -> Self {
        self.end_date = Some(end.into());
        self
    }

    /// Sets the day count used when no start date is given.
    #[must_use]
    pub const fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    /// Sets the sampling interval.
    #[must_use]
    pub fn with_interval(mut self, interval: impl Into<IntervalInput>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    /// Sets the datasource.
    #[must_use]
    pub fn with_datasource(mut self, datasource: impl Into<DatasourceSelector>) -> Self {
        self.datasource = Some(datasource.into());
        self
    }

    /// Applies defaults relative to `now` and validates the request.
    ///
    /// The end defaults to `now`, the start to `end - max(days, 1)` days
    /// and the interval to daily.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidArgument`] for a blank symbol, an
    /// unparseable date, an unknown interval token or a start after the end.
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<ResolvedRequest> {
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            return Err(ScrapeError::invalid_argument("symbol must not be empty"));
        }

        let end = match &self.end_date {
            Some(input) => input.resolve("end date")?,
            None => now,
        };
        let start = match &self.start_date {
            Some(input) => input.resolve("start date")?,
            None => {
                let days = self.days.unwrap_or(1).max(1);
                let span = Duration::try_days(days).ok_or_else(|| {
                    ScrapeError::invalid_argument(format!("day count {days} is out of range"))
                })?;
                end.checked_sub_signed(span).ok_or_else(|| {
                    ScrapeError::invalid_argument(format!("day count {days} is out of range"))
                })?
            }
        };

        let interval = match &self.interval {
            Some(input) => input.resolve()?,
            None => Interval::default(),
        };

        if start > end {
            return Err(ScrapeError::invalid_argument(format!(
                "start date {start} is after end date {end}"
            )));
        }

        Ok(ResolvedRequest {
            symbol: symbol.to_string(),
            start,
            end,
            interval,
        })
    }
}

/// Orchestrator configuration.
#[derive(Debug, Clone, Default)]
pub struct ScrapeConfig {
    /// HTTP settings handed to registry-built datasources.
    pub client: ClientConfig,
    /// Datasource used when a request names none.
    pub default_datasource: DatasourceKind,
}

impl ScrapeConfig {
    /// Sets the HTTP settings.
    #[must_use]
    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }

    /// Sets the default datasource.
    #[must_use]
    pub const fn with_default_datasource(mut self, kind: DatasourceKind) -> Self {
        self.default_datasource = kind;
        self
    }
}

/// Resolves requests and dispatches them to a datasource.
#[derive(Debug, Clone, Default)]
pub struct Scraper {
    config: ScrapeConfig,
}

impl Scraper {
    /// Creates a scraper with the given configuration.
    #[must_use]
    pub const fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Creates a scraper with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Resolves `request` and fetches its ticks.
    ///
    /// Validation, including the datasource lookup, happens before any
    /// network traffic.
    ///
    /// # Errors
    ///
    /// Returns the resolution error, or whatever the datasource returns.
    pub async fn scrape(&self, request: ScrapeRequest) -> Result<ScrapeResult> {
        let resolved = request.resolve(Utc::now())?;
        let source = match &request.datasource {
            Some(selector) => selector.resolve(&self.config.client)?,
            None => self.config.default_datasource.build(&self.config.client)?,
        };

        info!(
            symbol = %resolved.symbol,
            start = %resolved.start,
            end = %resolved.end,
            interval = %resolved.interval,
            datasource = source.name(),
            "Scraping"
        );

        source
            .get_ticks(&resolved.symbol, resolved.start, resolved.end, resolved.interval)
            .await
    }
}

/// Scrapes with [`ScrapeConfig::default`].
///
/// # Errors
///
/// See [`Scraper::scrape`].
pub async fn scrape(request: ScrapeRequest) -> Result<ScrapeResult> {
    Scraper::with_defaults().scrape(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 16, 0, 0).unwrap()
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = ScrapeRequest::new("AAPL").resolve(now()).unwrap();
        assert_eq!(resolved.symbol, "AAPL");
        assert_eq!(resolved.end, now());
        assert_eq!(resolved.start, now() - Duration::days(1));
        assert_eq!(resolved.interval, Interval::Day1);
    }

    #[test]
    fn test_resolve_days() {
        let resolved = ScrapeRequest::new("AAPL").with_days(5).resolve(now()).unwrap();
        assert_eq!(resolved.start, now() - Duration::days(5));

        let clamped = ScrapeRequest::new("AAPL").with_days(0).resolve(now()).unwrap();
        assert_eq!(clamped.start, now() - Duration::days(1));

        let negative = ScrapeRequest::new("AAPL").with_days(-3).resolve(now()).unwrap();
        assert_eq!(negative.start, now() - Duration::days(1));
    }

    #[test]
    fn test_resolve_days_relative_to_end() {
        let resolved = ScrapeRequest::new("AAPL")
            .with_end_date("2024-01-31")
            .with_days(30)
            .resolve(now())
            .unwrap();
        assert_eq!(resolved.end, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
        assert_eq!(resolved.start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_resolve_explicit_dates() {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
        let resolved = ScrapeRequest::new("MSFT")
            .with_start_date(start)
            .with_end_date("2024-02-01T16:00:00Z")
            .with_days(99)
            .resolve(now())
            .unwrap();
        assert_eq!(resolved.start, start);
        assert_eq!(resolved.end, Utc.with_ymd_and_hms(2024, 2, 1, 16, 0, 0).unwrap());
    }

    #[test]
    fn test_resolve_interval() {
        let token = ScrapeRequest::new("AAPL").with_interval("1w").resolve(now()).unwrap();
        assert_eq!(token.interval, Interval::Week1);

        let native = ScrapeRequest::new("AAPL").with_interval("1wk").resolve(now());
        assert!(matches!(native, Err(ScrapeError::InvalidArgument(ref m)) if m.contains("1wk")));

        let typed = ScrapeRequest::new("AAPL")
            .with_interval(Interval::Minute5)
            .resolve(now())
            .unwrap();
        assert_eq!(typed.interval, Interval::Minute5);
    }

    #[test]
    fn test_resolve_rejects_invalid_input() {
        let blank = ScrapeRequest::new("   ").resolve(now());
        assert!(matches!(blank, Err(ScrapeError::InvalidArgument(_))));

        let bad_date = ScrapeRequest::new("AAPL").with_start_date("not a date").resolve(now());
        assert!(matches!(bad_date, Err(ScrapeError::InvalidArgument(_))));

        let bad_interval = ScrapeRequest::new("AAPL").with_interval("2d").resolve(now());
        assert!(matches!(bad_interval, Err(ScrapeError::InvalidArgument(_))));

        let reversed = ScrapeRequest::new("AAPL")
            .with_start_date("2024-02-01")
            .with_end_date("2024-01-01")
            .resolve(now());
        assert!(matches!(reversed, Err(ScrapeError::InvalidArgument(_))));
    }

    #[test]
    fn test_selector_unknown_name() {
        let selector = DatasourceSelector::from("bogus");
        let err = selector.resolve(&ClientConfig::default()).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidArgument(_)));
        assert!(err.to_string().contains("bogus"));
    }
}
