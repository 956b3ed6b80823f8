//! Resampling interval definitions.

use std::str::FromStr;

/// A resampling interval in whole seconds.
///
/// Output buckets are aligned to multiples of the interval counted from the
/// Unix epoch, so a 60-second interval always starts buckets on minute
/// boundaries regardless of where the data begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval(u32);

impl Interval {
    /// The native one-second interval of stored candles.
    pub const SECOND: Self = Self(1);

    /// Creates an interval from a whole number of seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if `secs` is zero.
    pub fn from_secs(secs: u32) -> Result<Self, IntervalParseError> {
        if secs == 0 {
            return Err(IntervalParseError(secs.to_string()));
        }
        Ok(Self(secs))
    }

    /// Returns the interval length in whole seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_suffix(['s', 'S']).unwrap_or(s);
        let secs: u32 = digits
            .parse()
            .map_err(|_| IntervalParseError(s.to_string()))?;
        Self::from_secs(secs).map_err(|_| IntervalParseError(s.to_string()))
    }
}

/// Error returned when parsing an invalid interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalParseError(String);

impl std::fmt::Display for IntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid interval '{}', expected a positive number of seconds",
            self.0
        )
    }
}

impl std::error::Error for IntervalParseError {}
