//! Candle (OHLCV bar) data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV bar with taker-side volume breakdown.
///
/// Serialized field names match the stored CSV header (`datetime`,
/// `buyVolume`, `sellVolume`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar open time (start of the bucket).
    #[serde(rename = "datetime")]
    pub timestamp: DateTime<Utc>,
    /// Opening price (first trade in the bucket).
    pub open: f64,
    /// Highest price in the bucket.
    pub high: f64,
    /// Lowest price in the bucket.
    pub low: f64,
    /// Closing price (last trade in the bucket).
    pub close: f64,
    /// Total traded quantity.
    pub volume: f64,
    /// Traded quantity where the buyer was the taker.
    #[serde(rename = "buyVolume")]
    pub buy_volume: f64,
    /// Traded quantity where the seller was the taker.
    #[serde(rename = "sellVolume")]
    pub sell_volume: f64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        buy_volume: f64,
        sell_volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            buy_volume,
            sell_volume,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_bar() -> Candle {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Candle::new(timestamp, 100.0, 105.0, 98.0, 102.0, 10.0, 6.0, 4.0)
    }

    #[test]
    fn test_range() {
        let bar = create_test_bar();
        assert!((bar.range() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_bullish() {
        let bar = create_test_bar();
        assert!(bar.is_bullish());
        assert!(!bar.is_bearish());
    }

    #[test]
    fn test_bearish() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let bar = Candle::new(timestamp, 102.0, 105.0, 98.0, 100.0, 10.0, 6.0, 4.0);
        assert!(!bar.is_bullish());
        assert!(bar.is_bearish());
    }
}
