//! JSON output format.

use std::io::Write;
use stockscrape_types::ScrapeResult;

use crate::{FormatError, Formatter};

/// JSON formatter.
///
/// Writes `{symbol, start_date, end_date, interval, ticks}` followed by a newline.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_result<W: Write + Send>(&self, result: &ScrapeResult, mut writer: W) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, result)?;
        } else {
            serde_json::to_writer(&mut writer, result)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use stockscrape_types::{Interval, Tick};

    fn sample_result() -> ScrapeResult {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
        ScrapeResult::new(
            "spy",
            Interval::Hour1,
            vec![
                Tick::new(t0, Some(475.5), Some(476.0), Some(474.25), Some(475.75), Some(1_200_000)),
                Tick::new(t0, None, None, None, None, None),
            ],
            t0,
            t0,
        )
    }

    #[test]
    fn test_json_object() {
        let output = JsonFormatter::new().render(&sample_result()).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("{\"symbol\":\"SPY\",\"start_date\":"));
        assert!(text.ends_with("}\n"));

        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded["interval"], "1h");
        assert_eq!(decoded["ticks"].as_array().unwrap().len(), 2);
        assert_eq!(decoded["ticks"][0]["close"], 475.75);
        assert_eq!(decoded["ticks"][1]["volume"], Value::Null);
    }

    #[test]
    fn test_json_matches_result_encoding() {
        let result = sample_result();
        let output = String::from_utf8(JsonFormatter::new().render(&result).unwrap()).unwrap();
        assert_eq!(output.trim_end(), result.to_json().unwrap());
    }

    #[test]
    fn test_pretty_json() {
        let output = JsonFormatter::new().with_pretty(true).render(&sample_result()).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("  ")); // Indentation
    }
}
