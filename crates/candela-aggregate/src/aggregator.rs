//! Trade-to-candle aggregation.

use std::collections::BTreeMap;

use candela_types::Trade;
use chrono::{DateTime, Utc};

use crate::Candle;

/// Aggregates trades into one-second candles.
///
/// Trades are bucketed by the whole second that contains them, and buckets
/// without trades produce no candle. Within a bucket, open and close come
/// from the first and last trade in input order, so the intra-second
/// sequence recorded by the exchange is preserved even where timestamps
/// collide. Buckets themselves are emitted in timestamp order regardless of
/// input order.
#[must_use]
pub fn aggregate_to_seconds(trades: &[Trade]) -> Vec<Candle> {
    let mut buckets: BTreeMap<i64, CandleBuilder> = BTreeMap::new();

    for trade in trades {
        buckets
            .entry(trade.timestamp.timestamp())
            .and_modify(|builder| builder.update(trade))
            .or_insert_with(|| CandleBuilder::new(trade));
    }

    buckets.into_values().map(CandleBuilder::finish).collect()
}

/// Builder for the candle of a single one-second bucket.
#[derive(Debug)]
struct CandleBuilder {
    timestamp: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    buy_volume: f64,
    sell_volume: f64,
}

impl CandleBuilder {
    /// Creates a new builder from the first trade of a bucket.
    fn new(trade: &Trade) -> Self {
        Self {
            timestamp: floor_to_second(trade.timestamp),
            open: trade.price,
            high: trade.price,
            low: trade.price,
            close: trade.price,
            volume: trade.size,
            buy_volume: trade.buy_size(),
            sell_volume: trade.sell_size(),
        }
    }

    /// Updates the builder with a later trade from the same bucket.
    fn update(&mut self, trade: &Trade) {
        self.high = self.high.max(trade.price);
        self.low = self.low.min(trade.price);
        self.close = trade.price;
        self.volume += trade.size;
        self.buy_volume += trade.buy_size();
        self.sell_volume += trade.sell_size();
    }

    /// Finishes building and returns the candle.
    const fn finish(self) -> Candle {
        Candle::new(
            self.timestamp,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.buy_volume,
            self.sell_volume,
        )
    }
}

/// Floors a timestamp to the start of its containing second.
fn floor_to_second(dt: DateTime<Utc>) -> DateTime<Utc> {
    // The whole-second floor of a valid timestamp is always representable.
    DateTime::from_timestamp(dt.timestamp(), 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use candela_types::Side;
    use chrono::{TimeDelta, TimeZone};

    fn make_trade(second: u32, millis: i64, side: Side, size: f64, price: f64) -> Trade {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, second).unwrap()
            + TimeDelta::milliseconds(millis);
        Trade::new(timestamp, side, size, price)
    }

    #[test]
    fn test_three_trades_one_bucket() {
        let trades = vec![
            make_trade(0, 100, Side::Buy, 1.0, 100.0),
            make_trade(0, 500, Side::Sell, 2.0, 105.0),
            make_trade(0, 900, Side::Buy, 0.5, 99.0),
        ];
        let candles = aggregate_to_seconds(&trades);

        assert_eq!(candles.len(), 1);
        let candle = candles[0];
        assert_eq!(
            candle.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_relative_eq!(candle.open, 100.0);
        assert_relative_eq!(candle.high, 105.0);
        assert_relative_eq!(candle.low, 99.0);
        assert_relative_eq!(candle.close, 99.0);
        assert_relative_eq!(candle.volume, 3.5);
        assert_relative_eq!(candle.buy_volume, 1.5);
        assert_relative_eq!(candle.sell_volume, 2.0);
    }

    #[test]
    fn test_buckets_split_on_second() {
        let trades = vec![
            make_trade(0, 900, Side::Buy, 1.0, 100.0),
            make_trade(1, 100, Side::Buy, 1.0, 101.0),
        ];
        let candles = aggregate_to_seconds(&trades);

        assert_eq!(candles.len(), 2);
        assert_eq!(
            candles[0].timestamp,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            candles[1].timestamp,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap()
        );
    }

    #[test]
    fn test_input_order_sets_open_close() {
        // Later millisecond offset arrives first; input order wins.
        let trades = vec![
            make_trade(0, 900, Side::Buy, 1.0, 100.0),
            make_trade(0, 100, Side::Sell, 1.0, 105.0),
        ];
        let candles = aggregate_to_seconds(&trades);

        assert_eq!(candles.len(), 1);
        assert_relative_eq!(candles[0].open, 100.0);
        assert_relative_eq!(candles[0].close, 105.0);
    }

    #[test]
    fn test_unsorted_input_sorted_output() {
        let trades = vec![
            make_trade(5, 0, Side::Buy, 1.0, 102.0),
            make_trade(2, 0, Side::Buy, 1.0, 101.0),
        ];
        let candles = aggregate_to_seconds(&trades);

        assert_eq!(candles.len(), 2);
        assert!(candles[0].timestamp < candles[1].timestamp);
        assert_relative_eq!(candles[0].close, 101.0);
    }

    #[test]
    fn test_fractional_timestamps_bucket_and_split() {
        // 0.2s and 0.7s share a bucket; 1.1s starts the next one.
        let trades = vec![
            make_trade(0, 200, Side::Buy, 1.0, 100.0),
            make_trade(0, 700, Side::Sell, 2.0, 99.0),
            make_trade(1, 100, Side::Buy, 1.0, 101.0),
        ];
        let candles = aggregate_to_seconds(&trades);

        assert_eq!(candles.len(), 2);
        let first = candles[0];
        assert_relative_eq!(first.open, 100.0);
        assert_relative_eq!(first.high, 100.0);
        assert_relative_eq!(first.low, 99.0);
        assert_relative_eq!(first.close, 99.0);
        assert_relative_eq!(first.volume, 3.0);
        assert_relative_eq!(first.buy_volume, 1.0);
        assert_relative_eq!(first.sell_volume, 2.0);

        let second = candles[1];
        assert_relative_eq!(second.open, 101.0);
        assert_relative_eq!(second.close, 101.0);
        assert_relative_eq!(second.volume, 1.0);
        assert_relative_eq!(second.buy_volume, 1.0);
        assert_relative_eq!(second.sell_volume, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_to_seconds(&[]).is_empty());
    }

    #[test]
    fn test_volume_conservation() {
        let trades = vec![
            make_trade(0, 0, Side::Buy, 1.25, 100.0),
            make_trade(0, 500, Side::Sell, 2.5, 101.0),
            make_trade(3, 0, Side::Sell, 0.75, 99.0),
            make_trade(7, 250, Side::Buy, 4.0, 100.5),
        ];
        let candles = aggregate_to_seconds(&trades);

        let traded: f64 = trades.iter().map(|t| t.size).sum();
        let total: f64 = candles.iter().map(|c| c.volume).sum();
        assert_relative_eq!(total, traded);

        for candle in &candles {
            assert_relative_eq!(candle.buy_volume + candle.sell_volume, candle.volume);
            assert!(candle.low <= candle.open && candle.open <= candle.high);
            assert!(candle.low <= candle.close && candle.close <= candle.high);
        }
    }
}
