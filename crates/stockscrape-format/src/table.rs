//! Arrow table conversion.

use arrow::array::{ArrayRef, Float64Array, Int64Array, TimestampMicrosecondArray};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;
use stockscrape_types::Tick;

use crate::FormatError;

/// Creates the Arrow schema for tick data.
pub(crate) fn tick_schema() -> Schema {
    Schema::new(vec![
        Field::new(
            "timestamp",
            DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into())),
            false,
        ),
        Field::new("open", DataType::Float64, true),
        Field::new("high", DataType::Float64, true),
        Field::new("low", DataType::Float64, true),
        Field::new("close", DataType::Float64, true),
        Field::new("volume", DataType::Int64, true),
    ])
}

/// Converts ticks to an Arrow `RecordBatch`, preserving order.
pub(crate) fn ticks_to_batch(ticks: &[Tick]) -> Result<RecordBatch, FormatError> {
    let timestamps: Vec<_> = ticks
        .iter()
        .map(|t| t.timestamp.timestamp_micros())
        .collect();
    let opens: Vec<_> = ticks.iter().map(|t| t.open).collect();
    let highs: Vec<_> = ticks.iter().map(|t| t.high).collect();
    let lows: Vec<_> = ticks.iter().map(|t| t.low).collect();
    let closes: Vec<_> = ticks.iter().map(|t| t.close).collect();
    let volumes: Vec<_> = ticks.iter().map(|t| t.volume).collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(TimestampMicrosecondArray::from(timestamps).with_timezone("UTC")),
        Arc::new(Float64Array::from(opens)),
        Arc::new(Float64Array::from(highs)),
        Arc::new(Float64Array::from(lows)),
        Arc::new(Float64Array::from(closes)),
        Arc::new(Int64Array::from(volumes)),
    ];

    RecordBatch::try_new(Arc::new(tick_schema()), columns)
        .map_err(|e| FormatError::Table(e.to_string()))
}
