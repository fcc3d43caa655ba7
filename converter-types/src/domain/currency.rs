//! Currency codes and named currencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// ISO 4217 style currency code, always three uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses a code, trimming whitespace and normalizing to uppercase.
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let normalized = code.trim().to_ascii_uppercase();
        if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A currency code paired with its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: CurrencyCode,
    pub name: String,
}

impl Currency {
    pub fn new(code: CurrencyCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// Text shown in a search box once the currency is selected.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    /// Case-insensitive substring match on code or name.
    ///
    /// `term` must already be lowercased.
    pub(crate) fn matches(&self, term: &str) -> bool {
        self.code.as_str().to_lowercase().contains(term) || self.name.to_lowercase().contains(term)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_normalized() {
        let code: CurrencyCode = " usd ".parse().unwrap();
        assert_eq!(code.as_str(), "USD");
        assert_eq!(code.to_string(), "USD");
    }

    #[test]
    fn test_invalid_codes_rejected() {
        for bad in ["", "US", "USDT", "U$D", "12A"] {
            let result = CurrencyCode::new(bad);
            assert!(
                matches!(result, Err(DomainError::InvalidCurrencyCode(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_code_serde_roundtrip_validates() {
        let code: CurrencyCode = serde_json::from_str("\"brl\"").unwrap();
        assert_eq!(code, "BRL");
        assert!(serde_json::from_str::<CurrencyCode>("\"BRLX\"").is_err());
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"BRL\"");
    }

    #[test]
    fn test_currency_label() {
        let real = Currency::new(CurrencyCode::new("BRL").unwrap(), "Brazilian Real");
        assert_eq!(real.label(), "BRL - Brazilian Real");
    }
}
