//! HTTP client and archive fetching for candela candlestick data manager.
//!
//! This crate provides the trade download pipeline:
//!
//! - [`url::trade_url`] - Constructs Bybit archive URLs
//! - [`DownloadClient`] - Pooled HTTP client making one attempt per request
//! - [`decompress_gzip`] - Gzip payload decompression
//! - [`parse_trades`] - CSV trade parsing
//! - [`fetch_day`] - Fetches and parses one day of trades for a symbol

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod day;
mod decompress;
mod parse;
pub mod url;

pub use client::{ClientConfig, DownloadClient, DownloadError};
pub use day::{FetchError, fetch_day};
pub use decompress::{DecompressError, decompress_gzip};
pub use parse::{ParseError, parse_trades};
