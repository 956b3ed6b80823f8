//! Core types for candela candlestick data manager.
//!
//! This crate provides the fundamental data structures used throughout candela:
//!
//! - [`Trade`] - A single executed trade with timestamp, side, size, and price
//! - [`RawTrade`] - Raw archive CSV row before timestamp conversion
//! - [`Side`] - Taker side of a trade
//! - [`Symbol`] - Validated trading symbol
//! - [`Interval`] - Resampling interval in whole seconds
//! - [`DateRange`] - Inclusive day range for data retrieval

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod interval;
mod symbol;
mod trade;

pub use date_range::{DateRange, DayIterator, parse_compact_date};
pub use error::{DateParseError, DateRangeError};
pub use interval::{Interval, IntervalParseError};
pub use symbol::{Symbol, SymbolParseError};
pub use trade::{RawTrade, Side, Trade};
