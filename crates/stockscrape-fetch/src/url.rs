//! Yahoo chart URL construction.

use chrono::{DateTime, Utc};
use stockscrape_types::Interval;

/// Base URL for the Yahoo Finance chart endpoint.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Builds the chart query URL for a symbol, range and interval.
///
/// URL format: `{base}/{SYMBOL}?symbol={SYMBOL}&period1={start}&period2={end}&useYfid=true&interval={token}&includePrePost=true`
///
/// The symbol is uppercased and percent-encoded; the range bounds are epoch seconds.
///
/// # Example
///
/// ```
/// use stockscrape_fetch::url::{BASE_URL, chart_url};
/// use stockscrape_types::Interval;
/// use chrono::{TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
/// let url = chart_url(BASE_URL, "aapl", start, end, Interval::Day1);
/// assert_eq!(
///     url,
///     "https://query1.finance.yahoo.com/v8/finance/chart/AAPL?symbol=AAPL&period1=1704067200&period2=1704153600&useYfid=true&interval=1d&includePrePost=true"
/// );
/// ```
#[must_use]
pub fn chart_url(
    base_url: &str,
    symbol: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    interval: Interval,
) -> String {
    let symbol = urlencoding::encode(&symbol.to_uppercase()).into_owned();
    format!(
        "{}/{symbol}?symbol={symbol}&period1={}&period2={}&useYfid=true&interval={}&includePrePost=true",
        base_url.trim_end_matches('/'),
        start.timestamp(),
        end.timestamp(),
        interval.as_str()
    )
}
