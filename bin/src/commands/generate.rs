//! Generate command implementation.
//!
//! Reads stored one-second candles for a symbol over a date range, resamples
//! them to the requested interval, and writes a single gzipped CSV artifact.

use anyhow::{Context, Result, bail};
use candela_lib::prelude::*;
use candela_lib::{StoreError, write_candles};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::commands::{open_store, parse_range};

/// Builds a resampled dataset artifact from stored candles.
pub(crate) async fn generate(
    symbol: &str,
    begin: &str,
    end: &str,
    interval: &str,
    output_dir: PathBuf,
    data_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let symbol: Symbol = symbol.parse()?;
    let range = parse_range(begin, end)?;
    let interval: Interval = interval.parse()?;

    let store = open_store(data_dir)?;

    // Collect stored days; missing or unreadable days are skipped
    let mut candles = Vec::new();
    let mut used = 0usize;
    let mut missing = 0usize;

    for day in range.days() {
        match store.read(&symbol, day).await {
            Ok(day_candles) => {
                candles.extend(day_candles);
                used += 1;
            }
            Err(StoreError::PartitionNotFound { .. }) => {
                debug!("{symbol} {day}: not stored, skipping");
                missing += 1;
            }
            Err(e) => {
                warn!("{symbol} {day}: skipping unreadable partition: {e}");
                missing += 1;
            }
        }
    }

    if candles.is_empty() {
        bail!("No stored data for {symbol} in {range}");
    }

    debug!("{symbol}: {used} day(s) loaded, {missing} missing");

    // One resampling pass over the whole span keeps buckets that straddle
    // midnight intact.
    let resampled = resample(&candles, interval);

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
    let output = output_dir.join(format!("{symbol}-{begin}-{end}-{interval}.csv.gz"));

    write_candles(&output, &resampled)
        .await
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
