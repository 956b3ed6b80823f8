//! OHLCV aggregation for candela candlestick data manager.
//!
//! This crate turns executed trades into candlestick series:
//!
//! - [`Candle`] - OHLCV bar with taker-side volume breakdown
//! - [`aggregate_to_seconds`] - Buckets trades into one-second candles
//! - [`resample`] - Merges candles into coarser epoch-aligned buckets

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod candle;
mod resample;

pub use aggregator::aggregate_to_seconds;
pub use candle::Candle;
pub use resample::resample;
