//! Gzipped CSV encoding and decoding for candle files.

use std::io::Write;
use std::path::Path;

use async_compression::tokio::bufread::GzipDecoder;
use async_compression::tokio::write::GzipEncoder;
use candela_aggregate::Candle;
use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufReader};

/// Errors that can occur while decoding a candle file.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Malformed CSV header, row, or value.
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    /// I/O failure on the underlying file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes candles in CSV form to the given writer.
fn write_csv<W: Write>(candles: &[Candle], mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "datetime,open,high,low,close,volume,buyVolume,sellVolume")?;

    for candle in candles {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            candle.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume,
            candle.buy_volume,
            candle.sell_volume
        )?;
    }

    Ok(())
}

/// Writes candles to `path` as a gzipped CSV file, replacing any existing
/// file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub async fn write_candles(path: &Path, candles: &[Candle]) -> std::io::Result<()> {
    let mut csv = Vec::with_capacity(64 + candles.len() * 80);
    write_csv(candles, &mut csv)?;

    let file = File::create(path).await?;
    let mut encoder = GzipEncoder::new(file);
    encoder.write_all(&csv).await?;
    // Finishes the gzip stream; without it the trailer is lost.
    encoder.shutdown().await?;

    Ok(())
}

/// Reads candles from a gzipped CSV file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not valid gzip, or
/// holds rows that do not deserialize as candles.
pub async fn read_candles(path: &Path) -> Result<Vec<Candle>, CodecError> {
    let file = File::open(path).await?;
    let decoder = GzipDecoder::new(BufReader::new(file));
    let mut reader = AsyncReaderBuilder::new().create_deserializer(decoder);

    let mut candles = Vec::new();
    let mut records = reader.deserialize::<Candle>();
    while let Some(record) = records.next().await {
        candles.push(record?);
    }

    Ok(candles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample_candles() -> Vec<Candle> {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 6).unwrap();
        vec![
            Candle::new(t0, 100.0, 105.0, 99.0, 99.0, 3.5, 1.5, 2.0),
            Candle::new(t1, 99.5, 101.25, 99.5, 101.25, 0.75, 0.75, 0.0),
        ]
    }

    #[test]
    fn test_write_csv_layout() {
        let mut buffer = Vec::new();
        write_csv(&sample_candles(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("datetime,open,high,low,close,volume,buyVolume,sellVolume")
        );
        assert_eq!(
            lines.next(),
            Some("2024-01-02T03:04:05Z,100,105,99,99,3.5,1.5,2")
        );
    }

    #[tokio::test]
    async fn test_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2024-01-02.csv.gz");

        let candles = sample_candles();
        write_candles(&path, &candles).await.unwrap();
        let loaded = read_candles(&path).await.unwrap();

        assert_eq!(loaded, candles);
    }

    #[tokio::test]
    async fn test_empty_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv.gz");

        write_candles(&path, &[]).await.unwrap();
        let loaded = read_candles(&path).await.unwrap();

        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_read_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.csv.gz");
        std::fs::write(&path, b"not a gzip file").unwrap();

        assert!(read_candles(&path).await.is_err());
    }
}
