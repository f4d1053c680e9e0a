//! Core types for the stockscrape historical price downloader.
//!
//! This crate provides the fundamental data structures used throughout stockscrape:
//!
//! - [`Interval`] - Sampling granularity and its wire token
//! - [`Tick`] - A single OHLCV observation
//! - [`RawTick`] - Provider or caller input before normalization
//! - [`ScrapeResult`] - Ordered ticks plus request metadata
//! - [`ScrapeError`] - Error taxonomy shared by every crate

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod interval;
mod result;
mod tick;
mod timestamp;

pub use error::{Result, ScrapeError};
pub use interval::Interval;
pub use result::ScrapeResult;
pub use tick::{RawNumber, RawTick, RawTimestamp, Tick};
pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp, from_epoch_seconds, parse_timestamp};
