//! Trading symbol validation.

use std::str::FromStr;

/// A validated trading symbol, stored uppercase (e.g. `BTCUSD`).
///
/// Symbols name both archive paths and store partitions, so they are
/// restricted to ASCII letters and digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol, uppercasing ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or contains characters other
    /// than ASCII letters and digits.
    pub fn new(symbol: impl Into<String>) -> Result<Self, SymbolParseError> {
        let symbol = symbol.into();
        if symbol.is_empty() || !symbol.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(SymbolParseError(symbol));
        }
        Ok(Self(symbol.to_ascii_uppercase()))
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error returned when parsing an invalid symbol string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolParseError(String);

impl std::fmt::Display for SymbolParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid symbol '{}', expected ASCII letters and digits",
            self.0
        )
    }
}

impl std::error::Error for SymbolParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_uppercases() {
        let symbol = Symbol::new("btcusd").unwrap();
        assert_eq!(symbol.as_str(), "BTCUSD");
    }

    #[test]
    fn test_symbol_parse() {
        assert_eq!("ethusd".parse::<Symbol>().unwrap().as_str(), "ETHUSD");
        assert!("".parse::<Symbol>().is_err());
        assert!("BTC/USD".parse::<Symbol>().is_err());
        assert!("BTC USD".parse::<Symbol>().is_err());
    }
}
