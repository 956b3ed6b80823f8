//! Inventory command implementation.

use anyhow::Result;
use candela_lib::prelude::*;
use std::path::PathBuf;

use crate::commands::open_store;

/// Prints per-symbol coverage of the local store.
pub(crate) async fn inventory(data_dir: Option<PathBuf>) -> Result<()> {
    let store = open_store(data_dir)?;
    let coverage = report(&store).await?;

    if coverage.is_empty() {
        println!("No candles stored yet.");
        return Ok(());
    }

    for entry in &coverage {
        println!(
            "{}: from {} to {} ({} day(s) missing)",
            entry.symbol, entry.earliest, entry.latest, entry.missing_days
        );
    }

    Ok(())
}
