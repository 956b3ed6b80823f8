//! Trade data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Taker side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The buyer was the taker.
    Buy,
    /// The seller was the taker.
    Sell,
}

impl Side {
    /// Returns the side as a string slice, matching the archive spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Execution timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Taker side.
    pub side: Side,
    /// Traded quantity in base units.
    pub size: f64,
    /// Execution price.
    pub price: f64,
}

impl Trade {
    /// Creates a new trade.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, side: Side, size: f64, price: f64) -> Self {
        Self {
            timestamp,
            side,
            size,
            price,
        }
    }

    /// Returns the traded quantity if the buyer was the taker, zero otherwise.
    #[must_use]
    pub const fn buy_size(&self) -> f64 {
        match self.side {
            Side::Buy => self.size,
            Side::Sell => 0.0,
        }
    }

    /// Returns the traded quantity if the seller was the taker, zero otherwise.
    #[must_use]
    pub const fn sell_size(&self) -> f64 {
        match self.side {
            Side::Buy => 0.0,
            Side::Sell => self.size,
        }
    }
}

/// Raw trade row as read from an archive CSV (before timestamp conversion).
///
/// Archive rows carry the execution time as fractional seconds since the
/// Unix epoch. Rows may include further exchange-specific columns, which
/// are ignored on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawTrade {
    /// Execution time as fractional epoch seconds.
    pub timestamp: f64,
    /// Taker side.
    pub side: Side,
    /// Traded quantity in base units.
    pub size: f64,
    /// Execution price.
    pub price: f64,
}

impl RawTrade {
    /// Creates a new raw trade row.
    #[must_use]
    pub const fn new(timestamp: f64, side: Side, size: f64, price: f64) -> Self {
        Self {
            timestamp,
            side,
            size,
            price,
        }
    }

    /// Converts the epoch timestamp into a typed trade.
    ///
    /// Sub-second precision is kept to the microsecond, which matches the
    /// archive's resolution. Returns `None` when the timestamp is not a
    /// finite value within chrono's representable range.
    #[must_use]
    pub fn normalize(self) -> Option<Trade> {
        if !self.timestamp.is_finite() {
            return None;
        }
        let micros = (self.timestamp * 1_000_000.0).round() as i64;
        let timestamp = DateTime::from_timestamp_micros(micros)?;
        Some(Trade::new(timestamp, self.side, self.size, self.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn test_side_as_str() {
        assert_eq!(Side::Buy.as_str(), "Buy");
        assert_eq!(Side::Sell.as_str(), "Sell");
    }

    #[test]
    fn test_trade_side_split() {
        let buy = Trade::new(Utc::now(), Side::Buy, 1.5, 38000.0);
        assert!((buy.buy_size() - 1.5).abs() < 1e-10);
        assert!(buy.sell_size().abs() < 1e-10);

        let sell = Trade::new(Utc::now(), Side::Sell, 0.25, 38000.0);
        assert!(sell.buy_size().abs() < 1e-10);
        assert!((sell.sell_size() - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_raw_trade_normalize() {
        let raw = RawTrade::new(1_651_449_600.5, Side::Buy, 1.0, 38000.0);
        let trade = raw.normalize().unwrap();

        let midnight = Utc.with_ymd_and_hms(2022, 5, 2, 0, 0, 0).unwrap();
        assert_eq!(trade.timestamp, midnight + TimeDelta::milliseconds(500));
        assert_eq!(trade.side, Side::Buy);
        assert!((trade.price - 38000.0).abs() < 1e-10);
    }

    #[test]
    fn test_raw_trade_rejects_non_finite() {
        assert!(RawTrade::new(f64::NAN, Side::Buy, 1.0, 1.0).normalize().is_none());
        assert!(
            RawTrade::new(f64::INFINITY, Side::Sell, 1.0, 1.0)
                .normalize()
                .is_none()
        );
    }
}
