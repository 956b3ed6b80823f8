//! Date range and day iteration.

use chrono::NaiveDate;

use crate::{DateParseError, DateRangeError};

/// An inclusive range of days for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns an iterator over all days in the range, in order.
    #[must_use]
    pub const fn days(&self) -> DayIterator {
        DayIterator {
            current: Some(self.start),
            end: self.end,
        }
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Iterator over all days in a date range.
#[derive(Debug, Clone)]
pub struct DayIterator {
    current: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DayIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let day = self.current?;
        if day > self.end {
            return None;
        }
        self.current = day.succ_opt();
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(day) if day <= self.end => {
                let days = (self.end - day).num_days() as usize + 1;
                (days, Some(days))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DayIterator {}

/// Parses a compact `YYYYMMDD` date string.
///
/// # Errors
///
/// Returns an error unless the input is exactly eight ASCII digits naming a
/// valid calendar date.
pub fn parse_compact_date(s: &str) -> Result<NaiveDate, DateParseError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateParseError::new(s));
    }
    let year: i32 = s[0..4].parse().map_err(|_| DateParseError::new(s))?;
    let month: u32 = s[4..6].parse().map_err(|_| DateParseError::new(s))?;
    let day: u32 = s[6..8].parse().map_err(|_| DateParseError::new(s))?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateParseError::new(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_new() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start, start);
        assert_eq!(range.end, end);
    }

    #[test]
    fn test_date_range_invalid() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(DateRange::new(start, end).is_err());
    }

    #[test]
    fn test_day_iterator() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let range = DateRange::new(start, end).unwrap();
        let days: Vec<_> = range.days().collect();

        assert_eq!(days.len(), 4);
        assert_eq!(range.total_days(), 4);
        assert_eq!(days[1], NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(days[2], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(days[3], end);
    }

    #[test]
    fn test_single_day() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let range = DateRange::single_day(day);

        assert_eq!(range.days().count(), 1);
        assert!(range.contains(day));
    }

    #[test]
    fn test_parse_compact_date() {
        let parsed = parse_compact_date("20240102").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_parse_compact_date_rejects_malformed() {
        assert!(parse_compact_date("2024-01-02").is_err());
        assert!(parse_compact_date("2024012").is_err());
        assert!(parse_compact_date("202401023").is_err());
        assert!(parse_compact_date("20241302").is_err());
        assert!(parse_compact_date("20240230").is_err());
        assert!(parse_compact_date("abcdefgh").is_err());
    }
}
