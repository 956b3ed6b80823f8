//! Rust library for building OHLCV candlestick datasets from Bybit trade
//! archives.
//!
//! This is a facade crate that re-exports functionality from the candela
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use candela_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DownloadClient::with_defaults()?;
//!     let store = CandleStore::with_default_path()?;
//!
//!     let symbol: Symbol = "BTCUSD".parse()?;
//!     let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!
//!     if let Some(trades) = fetch_day(&client, &symbol, day).await? {
//!         let candles = aggregate_to_seconds(&trades);
//!         store.write(&symbol, day, &candles).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use candela_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use candela_fetch::{
    ClientConfig, DecompressError, DownloadClient, DownloadError, FetchError, ParseError,
    decompress_gzip, fetch_day, parse_trades,
};

// Re-export aggregation
#[cfg(feature = "aggregate")]
pub use candela_aggregate::{Candle, aggregate_to_seconds, resample};

// Re-export storage
#[cfg(feature = "store")]
pub use candela_store::{
    CandleStore, CodecError, StoreError, SymbolCoverage, read_candles, report, write_candles,
};

/// Prelude module for convenient imports.
///
/// ```
/// use candela_lib::prelude::*;
/// ```
pub mod prelude {
    pub use candela_types::{DateRange, Interval, RawTrade, Side, Symbol, Trade};

    #[cfg(feature = "fetch")]
    pub use candela_fetch::{ClientConfig, DownloadClient, fetch_day};

    #[cfg(feature = "aggregate")]
    pub use candela_aggregate::{Candle, aggregate_to_seconds, resample};

    #[cfg(feature = "store")]
    pub use candela_store::{CandleStore, SymbolCoverage, report};
}
