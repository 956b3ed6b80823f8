//! Store coverage reporting.

use candela_types::Symbol;
use chrono::NaiveDate;

use crate::{CandleStore, Result};

/// Coverage summary for one stored symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCoverage {
    /// The symbol.
    pub symbol: Symbol,
    /// Earliest stored day.
    pub earliest: NaiveDate,
    /// Latest stored day.
    pub latest: NaiveDate,
    /// Days between earliest and latest with no partition.
    pub missing_days: usize,
}

/// Reports coverage for every symbol in the store.
///
/// Symbols are listed in lexicographic order; a symbol directory without
/// any partition is omitted. An empty store produces an empty report.
///
/// # Errors
///
/// Returns an error if the store directories cannot be read.
pub async fn report(store: &CandleStore) -> Result<Vec<SymbolCoverage>> {
    let mut coverage = Vec::new();

    for symbol in store.symbols().await? {
        let days = store.days(&symbol).await?;
        let (Some(&earliest), Some(&latest)) = (days.first(), days.last()) else {
            continue;
        };
        let span = (latest - earliest).num_days() as usize + 1;

        coverage.push(SymbolCoverage {
            symbol,
            earliest,
            latest,
            missing_days: span - days.len(),
        });
    }

    Ok(coverage)
}
