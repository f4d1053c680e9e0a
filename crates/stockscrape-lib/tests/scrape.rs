//! End-to-end scrape tests against canned providers.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use stockscrape_lib::{
    ClientConfig, Datasource, HttpResponse, Interval, Result, ScrapeError, ScrapeRequest,
    ScrapeResult, ScrapeResultExt, Scraper, Transport, YahooDatasource,
};

const CHART: &str = r#"{"chart":{"result":[{"timestamp":[1705329000,1705415400,1705501800],"indicators":{"quote":[{"open":[182.16,181.27,186.09],"high":[182.93,182.93,189.14],"low":[180.17,180.3,185.83],"close":[181.91,182.68,188.63],"volume":[65076600,47317400,78005800]}]}}],"error":null}}"#;

#[derive(Debug)]
struct CannedTransport {
    status: u16,
    body: &'static str,
    calls: Mutex<usize>,
}

impl CannedTransport {
    fn new(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            calls: Mutex::new(0),
        })
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn get(&self, _url: &str, _user_agent: &str) -> Result<HttpResponse> {
        *self.calls.lock().unwrap() += 1;
        Ok(HttpResponse::new(self.status, self.body))
    }
}

/// Records the arguments it was called with and returns no ticks.
#[derive(Debug, Default)]
struct RecordingDatasource {
    calls: Mutex<Vec<(String, DateTime<Utc>, DateTime<Utc>, Interval)>>,
}

#[async_trait]
impl Datasource for RecordingDatasource {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn get_ticks(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: Interval,
    ) -> Result<ScrapeResult> {
        self.calls
            .lock()
            .unwrap()
            .push((symbol.to_string(), start, end, interval));
        Ok(ScrapeResult::new(symbol, interval, Vec::new(), start, end))
    }
}

fn yahoo(transport: Arc<CannedTransport>) -> Arc<dyn Datasource> {
    Arc::new(YahooDatasource::with_transport(
        transport,
        ClientConfig::default(),
    ))
}

#[tokio::test]
async fn test_days_resolve_against_now() {
    let source = Arc::new(RecordingDatasource::default());
    let request = ScrapeRequest::new("AAPL")
        .with_days(5)
        .with_datasource(source.clone() as Arc<dyn Datasource>);

    let before = Utc::now();
    Scraper::with_defaults().scrape(request).await.unwrap();
    let after = Utc::now();

    let calls = source.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (symbol, start, end, interval) = &calls[0];
    assert_eq!(symbol, "AAPL");
    assert_eq!(*interval, Interval::Day1);
    assert!(*end >= before && *end <= after);
    assert_eq!(*end - *start, Duration::days(5));
    assert!((*start - (before - Duration::days(5))).num_seconds().abs() <= 1);
}

#[tokio::test]
async fn test_unknown_datasource_fails_before_network() {
    let request = ScrapeRequest::new("AAPL").with_datasource("bogus");
    let err = Scraper::with_defaults().scrape(request).await.unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidArgument(_)));
    assert!(err.to_string().contains("'bogus'"));
}

#[tokio::test]
async fn test_invalid_request_skips_datasource() {
    let source = Arc::new(RecordingDatasource::default());
    let request = ScrapeRequest::new("AAPL")
        .with_interval("7m")
        .with_datasource(source.clone() as Arc<dyn Datasource>);

    let err = Scraper::with_defaults().scrape(request).await.unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidArgument(_)));
    assert!(source.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_upstream_error_propagates() {
    let transport = CannedTransport::new(500, "Internal Server Error");
    let request = ScrapeRequest::new("AAPL").with_datasource(yahoo(transport.clone()));

    let err = Scraper::with_defaults().scrape(request).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Upstream { status: 500, .. }));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_scrape_to_csv_and_json() {
    let transport = CannedTransport::new(200, CHART);
    let request = ScrapeRequest::new("aapl")
        .with_start_date("2024-01-14")
        .with_end_date(Utc.with_ymd_and_hms(2024, 1, 18, 0, 0, 0).unwrap())
        .with_interval("1d")
        .with_datasource(yahoo(transport.clone()));

    let result = Scraper::with_defaults().scrape(request).await.unwrap();
    assert_eq!(transport.calls(), 1);
    assert_eq!(result.symbol, "AAPL");
    assert_eq!(result.start_date, "2024-01-14 00:00:00");
    assert_eq!(result.len(), 3);

    let csv = result.to_csv().unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    for (row, tick) in rows.iter().zip(result.ticks()) {
        assert_eq!(&row[0], tick.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
        assert_eq!(row[4].parse::<f64>().unwrap(), tick.close.unwrap());
    }

    let decoded: Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    let ticks = decoded["ticks"].as_array().unwrap();
    assert_eq!(ticks.len(), 3);
    assert_eq!(ticks[0]["timestamp"], "2024-01-15 14:30:00");
    assert_eq!(ticks[2]["volume"], 78_005_800);
}
