//! Argument parsing helpers and output writing for the stockscrape CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use std::path::{Path, PathBuf};
use stockscrape_lib::prelude::*;

/// Output format for scraped data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        self.output_format().extension()
    }

    const fn output_format(&self) -> OutputFormat {
        match self {
            Self::Csv => OutputFormat::Csv,
            Self::Json => OutputFormat::Json,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Accepts exactly the interval tokens.
pub(crate) fn interval_parser() -> impl TypedValueParser<Value = Interval> {
    PossibleValuesParser::new(Interval::all().iter().map(Interval::as_str))
        .try_map(|token| token.parse::<Interval>())
}

/// Accepts the registered datasource names.
pub(crate) fn datasource_parser() -> impl TypedValueParser<Value = DatasourceKind> {
    PossibleValuesParser::new(DatasourceKind::all().iter().map(DatasourceKind::as_str))
        .try_map(|name| name.parse::<DatasourceKind>())
}

/// Default output path: `<symbol>.<ext>`.
pub(crate) fn default_output(symbol: &str, format: Format) -> PathBuf {
    PathBuf::from(format!("{}.{}", symbol.trim(), format.extension()))
}

/// Renders a scrape result into memory.
pub(crate) fn render(result: &ScrapeResult, format: Format, pretty: bool) -> Result<Vec<u8>> {
    let bytes = match format.output_format() {
        OutputFormat::Csv => CsvFormatter::new().render(result)?,
        OutputFormat::Json => JsonFormatter::new().with_pretty(pretty).render(result)?,
    };
    Ok(bytes)
}

/// Writes rendered output, replacing any existing file.
pub(crate) fn write_output(bytes: &[u8], output: &Path) -> Result<()> {
    std::fs::write(output, bytes)
        .with_context(|| format!("Failed to write {}", output.display()))
}
