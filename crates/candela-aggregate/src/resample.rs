//! Candle resampling to coarser intervals.

use std::collections::BTreeMap;

use candela_types::Interval;
use chrono::{DateTime, Utc};

use crate::Candle;

/// Resamples candles into the given interval.
///
/// Buckets are aligned to multiples of the interval counted from the Unix
/// epoch and cover `[start, start + interval)`. Buckets without input
/// candles are omitted rather than filled. Input must be ordered by
/// timestamp; resampling at one second reproduces the input.
#[must_use]
pub fn resample(candles: &[Candle], interval: Interval) -> Vec<Candle> {
    let width = i64::from(interval.as_secs());
    let mut buckets: BTreeMap<i64, BucketBuilder> = BTreeMap::new();

    for candle in candles {
        let start = candle.timestamp.timestamp().div_euclid(width) * width;
        buckets
            .entry(start)
            .and_modify(|builder| builder.merge(candle))
            .or_insert_with(|| BucketBuilder::new(start, candle));
    }

    buckets.into_values().map(BucketBuilder::finish).collect()
}

/// Builder merging finer candles into one bucket.
#[derive(Debug)]
struct BucketBuilder {
    timestamp: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    buy_volume: f64,
    sell_volume: f64,
}

impl BucketBuilder {
    /// Creates a new builder from the first candle of a bucket.
    fn new(start: i64, candle: &Candle) -> Self {
        Self {
            // Epoch-aligned bucket starts of stored candles stay within
            // chrono's representable range.
            timestamp: DateTime::from_timestamp(start, 0).unwrap(),
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            volume: candle.volume,
            buy_volume: candle.buy_volume,
            sell_volume: candle.sell_volume,
        }
    }

    /// Merges a later candle from the same bucket.
    fn merge(&mut self, candle: &Candle) {
        self.high = self.high.max(candle.high);
        self.low = self.low.min(candle.low);
        self.close = candle.close;
        self.volume += candle.volume;
        self.buy_volume += candle.buy_volume;
        self.sell_volume += candle.sell_volume;
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
