//! Symbol type for representing trading pair identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Symbol type - used for representing trading pair identifiers.
///
/// Wraps a `String` value with validation. Input is trimmed and normalized
/// to uppercase at construction, so `"btcusdt"` and `"BTCUSDT"` produce
/// the same symbol.
///
/// # Examples
///
/// ```
/// use vela_core::types::Symbol;
///
/// let symbol = Symbol::new("btcusdt").unwrap();
/// assert_eq!(symbol.as_str(), "BTCUSDT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new `Symbol` from a string, trimming whitespace and
    /// normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptySymbol` if the trimmed string is empty.
    /// Returns `ValidationError::InvalidSymbol` if it contains characters
    /// outside ASCII alphanumerics.
    ///
    /// # Examples
    ///
    /// ```
    /// use vela_core::types::Symbol;
    ///
    /// let symbol = Symbol::new("BTCUSDT").unwrap();
    /// assert!(Symbol::new("").is_err());
    /// assert!(Symbol::new("BTC/USDT").is_err());
    /// ```
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let s = value.as_ref().trim().to_ascii_uppercase();
        if s.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidSymbol(s));
        }
        Ok(Self(s))
    }

    /// Creates a new `Symbol` without validation or normalization.
    ///
    /// # Safety
    ///
    /// The caller must ensure the value is a valid uppercase symbol.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_new_valid() {
        let symbol = Symbol::new("BTCUSDT").unwrap();
        assert_eq!(symbol.as_str(), "BTCUSDT");
    }

    #[test]
    fn test_symbol_new_normalizes_case() {
        let symbol = Symbol::new("ethusdt").unwrap();
        assert_eq!(symbol.as_str(), "ETHUSDT");
        assert_eq!(symbol, Symbol::new("ETHUSDT").unwrap());
    }

    #[test]
    fn test_symbol_new_trims_whitespace() {
        let symbol = Symbol::new("  btcusdt  ").unwrap();
        assert_eq!(symbol.as_str(), "BTCUSDT");
    }

    #[test]
    fn test_symbol_new_empty() {
        let result = Symbol::new("");
        assert!(matches!(result, Err(ValidationError::EmptySymbol)));

        let result = Symbol::new("   ");
        assert!(matches!(result, Err(ValidationError::EmptySymbol)));
    }

    #[test]
    fn test_symbol_new_invalid_chars() {
        let result = Symbol::new("BTC-USDT");
        assert!(matches!(result, Err(ValidationError::InvalidSymbol(_))));

        let result = Symbol::new("BTC/USDT");
        assert!(matches!(result, Err(ValidationError::InvalidSymbol(_))));
    }

    #[test]
    fn test_symbol_display() {
        let symbol = Symbol::new("ETHUSDT").unwrap();
        assert_eq!(format!("{symbol}"), "ETHUSDT");
    }

    #[test]
    fn test_symbol_serde_roundtrip() {
        let symbol = Symbol::new("BTCUSDT").unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(symbol, parsed);
    }
}
