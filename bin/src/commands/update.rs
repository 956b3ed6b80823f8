//! Update command implementation.
//!
//! Fetches daily trade archives for a symbol and stores each published day
//! as a one-second candle partition. Days already stored are skipped, and a
//! day that fails is logged without aborting the rest of the range.

use anyhow::Result;
use candela_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, error};

use crate::commands::{open_store, parse_range};

/// Fetches and stores one-second candles for each day in the range.
pub(crate) async fn update(
    symbol: &str,
    begin: &str,
    end: &str,
    data_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let symbol: Symbol = symbol.parse()?;
    let range = parse_range(begin, end)?;

    let store = open_store(data_dir)?;
    let client = DownloadClient::with_defaults()?;

    // Setup progress bar
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(range.total_days() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} days ({percent}%) {msg}")
                .expect("Invalid progress template")
                .progress_chars("=>-"),
        );
        pb.set_message(format!("{symbol} {range}"));
        pb
    };

    // Fetch day by day; a failed day is counted and skipped, never fatal
    let mut stored = 0usize;
    let mut existing = 0usize;
    let mut unavailable = 0usize;
    let mut failed = 0usize;

    for day in range.days() {
        if store.exists(&symbol, day) {
            debug!("{symbol} {day}: already stored, skipping");
            existing += 1;
            progress.inc(1);
            continue;
        }

        match fetch_day(&client, &symbol, day).await {
            Ok(Some(trades)) => {
                let candles = aggregate_to_seconds(&trades);
                match store.write(&symbol, day, &candles).await {
                    Ok(()) => {
                        debug!("{symbol} {day}: stored {} candles", candles.len());
                        stored += 1;
                    }
                    Err(e) => {
                        error!("{symbol} {day}: store failed: {e}");
                        failed += 1;
                    }
                }
            }
            Ok(None) => {
                debug!("{symbol} {day}: no archive published");
                unavailable += 1;
            }
            Err(e) => {
                error!("{symbol} {day}: fetch failed: {e}");
                failed += 1;
            }
        }
        progress.inc(1);
    }

    progress.finish_with_message(format!(
        "{stored} stored, {existing} already present, {unavailable} unavailable, {failed} failed"
    ));

    Ok(())
}
