//! Conversion quotes returned by rate providers.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::CurrencyCode;

/// Which way a conversion runs relative to the widget's selected pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Source amount to target amount.
    Forward,
    /// Target amount back to source amount.
    Reverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Reverse => f.write_str("reverse"),
        }
    }
}

/// A single fetched rate for an ordered currency pair.
///
/// `rate` is how many units of `target` one unit of `base` buys.
/// Quotes are never cached; every request produces a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionQuote {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    pub rate: f64,
    /// Provider timestamp, verbatim (RFC 2822 for ExchangeRate-API).
    pub as_of: String,
}

impl ConversionQuote {
    pub fn new(base: CurrencyCode, target: CurrencyCode, rate: f64, as_of: impl Into<String>) -> Self {
        Self {
            base,
            target,
            rate,
            as_of: as_of.into(),
        }
    }

    /// Parses `as_of` when it is a valid RFC 2822 date.
    pub fn as_of_utc(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(&self.as_of).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn test_as_of_parses_provider_timestamp() {
        let quote = ConversionQuote::new(code("USD"), code("BRL"), 5.0, "Fri, 27 Mar 2020 00:00:01 +0000");
        let parsed = quote.as_of_utc().unwrap();
        assert_eq!(parsed.timestamp(), 1_585_267_201);
    }

    #[test]
    fn test_as_of_unparseable_is_none() {
        let quote = ConversionQuote::new(code("USD"), code("BRL"), 5.0, "yesterday");
        assert!(quote.as_of_utc().is_none());
    }
}
