//! Bybit archive URL construction.

use chrono::NaiveDate;

/// Base URL for the Bybit public trading archive.
pub const BASE_URL: &str = "https://public.bybit.com/trading";

/// Builds the URL for a symbol's daily trade archive.
///
/// URL format: `{BASE_URL}/{SYMBOL}/{SYMBOL}{YYYY-MM-DD}.csv.gz`
///
/// # Example
///
/// ```
/// use candela_fetch::url::trade_url;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let url = trade_url("BTCUSD", day);
/// assert_eq!(url, "https://public.bybit.com/trading/BTCUSD/BTCUSD2024-01-15.csv.gz");
/// ```
#[must_use]
pub fn trade_url(symbol: &str, day: NaiveDate) -> String {
    let symbol = symbol.to_uppercase();
    format!(
        "{}/{}/{}{}.csv.gz",
        BASE_URL,
        symbol,
        symbol,
        day.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_url() {
        let day = NaiveDate::from_ymd_opt(2022, 5, 2).unwrap();
        let url = trade_url("BTCUSD", day);
        assert_eq!(
            url,
            "https://public.bybit.com/trading/BTCUSD/BTCUSD2022-05-02.csv.gz"
        );
    }

    #[test]
    fn test_trade_url_uppercases() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let url = trade_url("ethusd", day);
        assert_eq!(
            url,
            "https://public.bybit.com/trading/ETHUSD/ETHUSD2024-12-31.csv.gz"
        );
    }
}
