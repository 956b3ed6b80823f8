//! Tidy command implementation.

use anyhow::Result;
use candela_lib::prelude::*;
use std::path::PathBuf;
use tracing::debug;

use crate::commands::{open_store, parse_range};

/// Deletes stored partitions outside the kept date range.
pub(crate) async fn tidy(
    symbol: &str,
    begin: &str,
    end: &str,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let symbol: Symbol = symbol.parse()?;
    let keep = parse_range(begin, end)?;

    let store = open_store(data_dir)?;

    let days = store.days(&symbol).await?;
    if days.is_empty() {
        println!("No stored candles for {symbol}.");
        return Ok(());
    }

    let mut removed = 0usize;
    for day in days {
        if !keep.contains(day) {
            debug!("{symbol} {day}: outside kept range, deleting");
            store.delete(&symbol, day).await?;
            removed += 1;
        }
    }

    println!("Removed {removed} partition(s) outside {keep}.");

    Ok(())
}
