//! Daily candle storage for candela candlestick data manager.
//!
//! This crate persists and inventories one-second candle data:
//!
//! - [`CandleStore`] - One gzipped CSV partition per symbol and day
//! - [`report`] / [`SymbolCoverage`] - Per-symbol coverage reporting
//! - [`read_candles`] / [`write_candles`] - The gzipped CSV codec

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod codec;
mod inventory;
mod store;

pub use codec::{CodecError, read_candles, write_candles};
pub use inventory::{SymbolCoverage, report};
pub use store::{CandleStore, Result, StoreError};
