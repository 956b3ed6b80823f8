//! CSV trade parsing from archive payloads.

use candela_types::{RawTrade, Trade};
use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use thiserror::Error;

/// Errors that can occur during trade parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed CSV header or row.
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    /// Trade timestamp outside the representable range.
    #[error("Invalid trade timestamp: {0}")]
    InvalidTimestamp(f64),
}

/// Parses trades from a decompressed archive CSV.
///
/// The header row must name at least `timestamp`, `side`, `size`, and
/// `price`; any further archive columns are ignored. Rows keep their file
/// order, which is the exchange's execution order.
///
/// # Errors
///
/// Returns an error if a row cannot be deserialized or carries a timestamp
/// outside chrono's representable range.
pub async fn parse_trades(data: &[u8]) -> Result<Vec<Trade>, ParseError> {
    let mut reader = AsyncReaderBuilder::new()
        .trim(csv_async::Trim::All)
        .create_deserializer(data);

    let mut trades = Vec::new();
    let mut records = reader.deserialize::<RawTrade>();
    while let Some(record) = records.next().await {
        let raw = record?;
        let trade = raw
            .normalize()
            .ok_or(ParseError::InvalidTimestamp(raw.timestamp))?;
        trades.push(trade);
    }

    Ok(trades)
}
