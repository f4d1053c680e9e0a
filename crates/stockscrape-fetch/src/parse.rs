//! Yahoo chart response parsing.

use serde::Deserialize;
use stockscrape_types::{RawNumber, RawTick, Result, ScrapeError};

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    open: Vec<Option<RawNumber>>,
    high: Vec<Option<RawNumber>>,
    low: Vec<Option<RawNumber>>,
    close: Vec<Option<RawNumber>>,
    volume: Vec<Option<RawNumber>>,
}

/// Extracts raw ticks from a chart response body.
///
/// Reads `chart.result[0].timestamp` and the parallel
/// `chart.result[0].indicators.quote[0]` arrays, pairing entries by index.
///
/// # Errors
///
/// Returns [`ScrapeError::MalformedResponse`] if the expected structure is
/// missing, or [`ScrapeError::LengthMismatch`] if a quote array does not have
/// one entry per timestamp.
pub fn parse_chart(body: &str) -> Result<Vec<RawTick>> {
    let response: ChartResponse = serde_json::from_str(body)
        .map_err(|e| ScrapeError::malformed(format!("unexpected chart shape: {e}")))?;

    let ChartBody { result, error } = response.chart;
    let result = result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| match error {
            Some(ChartError { code, description }) => ScrapeError::malformed(format!(
                "chart has no result ({}: {})",
                code.as_deref().unwrap_or("unknown"),
                description.as_deref().unwrap_or("no description")
            )),
            None => ScrapeError::malformed("chart has no result"),
        })?;

    let timestamps = result
        .timestamp
        .ok_or_else(|| ScrapeError::malformed("chart result has no timestamp array"))?;
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| ScrapeError::malformed("chart result has no quote indicators"))?;

    let expected = timestamps.len();
    check_len("open", quote.open.len(), expected)?;
    check_len("high", quote.high.len(), expected)?;
    check_len("low", quote.low.len(), expected)?;
    check_len("close", quote.close.len(), expected)?;
    check_len("volume", quote.volume.len(), expected)?;

    let mut opens = quote.open.into_iter();
    let mut highs = quote.high.into_iter();
    let mut lows = quote.low.into_iter();
    let mut closes = quote.close.into_iter();
    let mut volumes = quote.volume.into_iter();

    Ok(timestamps
        .into_iter()
        .map(|timestamp| {
            RawTick::new(
                timestamp,
                opens.next().flatten(),
                highs.next().flatten(),
                lows.next().flatten(),
                closes.next().flatten(),
                volumes.next().flatten(),
            )
        })
        .collect())
}

fn check_len(field: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(ScrapeError::LengthMismatch {
            field,
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockscrape_types::RawTimestamp;

    const THREE_TICKS: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "AAPL"},
                "timestamp": [1705329000, 1705415400, 1705501800],
                "indicators": {
                    "quote": [{
                        "open": [182.16, 181.27, 186.09],
                        "high": [182.93, 182.93, 189.14],
                        "low": [180.17, 180.3, 185.83],
                        "close": [181.91, 182.68, 188.63],
                        "volume": [65076600, 47317400, null]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_chart_in_order() {
        let ticks = parse_chart(THREE_TICKS).unwrap();
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[0].timestamp, RawTimestamp::Epoch(1_705_329_000.0));
        assert_eq!(ticks[2].timestamp, RawTimestamp::Epoch(1_705_501_800.0));
        assert_eq!(ticks[1].open, Some(RawNumber::Float(181.27)));
        assert_eq!(ticks[0].volume, Some(RawNumber::Int(65_076_600)));
        assert_eq!(ticks[2].volume, None);
    }

    #[test]
    fn test_parse_chart_length_mismatch() {
        let body = THREE_TICKS.replace("[182.16, 181.27, 186.09]", "[182.16, 181.27]");
        let err = parse_chart(&body).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::LengthMismatch {
                field: "open",
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_parse_chart_rejects_extra_entries() {
        let body = THREE_TICKS.replace(
            "[65076600, 47317400, null]",
            "[65076600, 47317400, null, 12000000]",
        );
        let err = parse_chart(&body).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::LengthMismatch {
                field: "volume",
                expected: 3,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_parse_chart_provider_error() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        let err = parse_chart(body).unwrap_err();
        match err {
            ScrapeError::MalformedResponse(message) => {
                assert!(message.contains("Not Found"));
                assert!(message.contains("delisted"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_chart_missing_path() {
        let missing_timestamp = r#"{"chart":{"result":[{"indicators":{"quote":[{"open":[],"high":[],"low":[],"close":[],"volume":[]}]}}],"error":null}"#;
        assert!(matches!(
            parse_chart(missing_timestamp),
            Err(ScrapeError::MalformedResponse(_))
        ));

        let empty_quote = r#"{"chart":{"result":[{"timestamp":[],"indicators":{"quote":[]}}]}}"#;
        assert!(matches!(
            parse_chart(empty_quote),
            Err(ScrapeError::MalformedResponse(_))
        ));

        assert!(matches!(
            parse_chart(r#"{"quoteResponse":{}}"#),
            Err(ScrapeError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_chart("<html>blocked</html>"),
            Err(ScrapeError::MalformedResponse(_))
        ));
    }
}
