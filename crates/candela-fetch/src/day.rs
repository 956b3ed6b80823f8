//! Per-day fetch pipeline.

use candela_types::{Symbol, Trade};
use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    DecompressError, DownloadClient, DownloadError, ParseError, decompress_gzip, parse_trades, url,
};

/// Errors from the per-day fetch pipeline.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Download failed.
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Payload decompression failed.
    #[error(transparent)]
    Decompress(#[from] DecompressError),

    /// Payload parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Fetches and parses one day of trades for a symbol.
///
/// Returns `Ok(None)` when the archive has no file for the day, which is
/// expected near the present and before a symbol's listing date.
///
/// # Errors
///
/// Returns an error if the download, decompression, or parsing fails. The
/// request is made once; retrying is left to the caller.
pub async fn fetch_day(
    client: &DownloadClient,
    symbol: &Symbol,
    day: NaiveDate,
) -> Result<Option<Vec<Trade>>, FetchError> {
    let url = url::trade_url(symbol.as_str(), day);
    let Some(compressed) = client.download(&url).await? else {
        return Ok(None);
    };
    let data = decompress_gzip(&compressed).await?;
    let trades = parse_trades(&data).await?;
    Ok(Some(trades))
}
