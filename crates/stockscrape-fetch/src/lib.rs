//! Datasources and HTTP fetching for the stockscrape historical price downloader.
//!
//! This crate provides the download pipeline:
//!
//! - [`Datasource`] - Async provider contract
//! - [`DatasourceKind`] - Registry of supported provider names
//! - [`YahooDatasource`] - Yahoo Finance chart implementation
//! - [`url::chart_url`] - Constructs chart query URLs
//! - [`parse_chart`] - Chart response parsing
//! - [`Transport`] / [`ReqwestTransport`] - HTTP seam with a reqwest backend

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod datasource;
mod parse;
pub mod url;
mod user_agent;
mod yahoo;

pub use client::{ClientConfig, HttpResponse, ReqwestTransport, Transport};
pub use datasource::{Datasource, DatasourceKind};
pub use parse::parse_chart;
pub use user_agent::{FALLBACK_USER_AGENT, USER_AGENTS, random_user_agent};
pub use yahoo::YahooDatasource;
