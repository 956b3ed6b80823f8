//! CLI command implementations.

pub(crate) mod generate;
pub(crate) mod inventory;
pub(crate) mod remove;
pub(crate) mod tidy;
pub(crate) mod update;

use anyhow::{Context, Result};
use candela_lib::prelude::*;
use candela_lib::parse_compact_date;
use std::path::PathBuf;

/// Parses a compact `YYYYMMDD` date pair into an inclusive range.
pub(crate) fn parse_range(begin: &str, end: &str) -> Result<DateRange> {
    let begin =
        parse_compact_date(begin).with_context(|| format!("Invalid begin date: {begin}"))?;
    let end = parse_compact_date(end).with_context(|| format!("Invalid end date: {end}"))?;
    Ok(DateRange::new(begin, end)?)
}

/// Opens the candle store at the chosen data directory.
pub(crate) fn open_store(data_dir: Option<PathBuf>) -> Result<CandleStore> {
    let store = match data_dir {
        Some(dir) => CandleStore::new(dir),
        None => CandleStore::with_default_path(),
    }?;
    Ok(store)
}
