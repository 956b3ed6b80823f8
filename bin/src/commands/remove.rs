//! Remove command implementation.

use anyhow::Result;
use candela_lib::prelude::*;
use inquire::Confirm;
use std::path::PathBuf;

use crate::commands::open_store;

/// Deletes every stored partition for a symbol, prompting unless `--yes`.
pub(crate) async fn remove(symbol: &str, yes: bool, data_dir: Option<PathBuf>) -> Result<()> {
    let symbol: Symbol = symbol.parse()?;
    let store = open_store(data_dir)?;

    if !yes {
        let confirmed = Confirm::new(&format!("Remove all stored candles for {symbol}?"))
            .with_default(false)
            .prompt()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = store.delete_all(&symbol).await?;
    if removed == 0 {
        println!("No stored candles for {symbol}.");
    } else {
        println!("Removed {removed} partition(s) for {symbol}.");
    }

    Ok(())
}
