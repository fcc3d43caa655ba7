//! Offline Exchange Rates with Macro-Based Currency Table
//!
//! A [`RateProvider`] that never touches the network. Currencies are declared
//! once in the `define_currencies!` invocation below, which generates the
//! `StaticCurrency` enum, its lookup tables and parsing.
//!
//! # Adding a New Currency
//! Simply add a line to the `define_currencies!` macro invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     NOK => ("NOK", "Norwegian Krone", 0.094),
//! }
//! ```
//!
//! # Example
//! ```
//! use exchange_rates::{StaticCurrency, get_rate};
//!
//! let rate = get_rate(StaticCurrency::USD, StaticCurrency::BRL);
//! assert!(rate > 1.0);
//! ```

use async_trait::async_trait;
use chrono::Utc;
use converter_types::{
    Catalog, ConversionQuote, Currency, CurrencyCode, ProviderError, RateProvider,
};

/// Timestamp layout used by ExchangeRate-API's `time_last_update_utc`.
pub const PROVIDER_TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines all currencies and runtime lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the static currency table.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Variant => ("CODE", "Display name", value_in_usd),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $display:literal, $to_usd:expr)
        ),* $(,)?
    ) => {
        /// Currencies known to the offline provider, in catalog order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StaticCurrency {
            $($name),*
        }

        impl StaticCurrency {
            pub fn code(&self) -> &'static str {
                match self {
                    $(StaticCurrency::$name => $code),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(StaticCurrency::$name => $display),*
                }
            }

            /// Value of one unit in US dollars.
            pub fn to_usd_rate(&self) -> f64 {
                match self {
                    $(StaticCurrency::$name => $to_usd),*
                }
            }

            pub fn all() -> &'static [StaticCurrency] {
                &[$(StaticCurrency::$name),*]
            }
        }

        impl std::fmt::Display for StaticCurrency {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for StaticCurrency {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(StaticCurrency::$name),)*
                    _ => Err(format!("Unknown currency: {}", s)),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => ("USD", "United States Dollar", 1.0),
    BRL => ("BRL", "Brazilian Real", 0.18),
    EUR => ("EUR", "Euro", 1.087),
    GBP => ("GBP", "Pound Sterling", 1.266),
    INR => ("INR", "Indian Rupee", 0.01203),
    JPY => ("JPY", "Japanese Yen", 0.0067),
    CAD => ("CAD", "Canadian Dollar", 0.73),
    AUD => ("AUD", "Australian Dollar", 0.66),
    CHF => ("CHF", "Swiss Franc", 1.13),
    CNY => ("CNY", "Chinese Renminbi", 0.138),
    MXN => ("MXN", "Mexican Peso", 0.055),
    ARS => ("ARS", "Argentine Peso", 0.0011),
}

/// Units of `to` bought by one unit of `from`.
pub fn get_rate(from: StaticCurrency, to: StaticCurrency) -> f64 {
    if from == to {
        return 1.0;
    }
    from.to_usd_rate() / to.to_usd_rate()
}

/// The static table as a catalog.
pub fn catalog() -> Catalog {
    Catalog::new(
        StaticCurrency::all()
            .iter()
            .filter_map(|c| {
                CurrencyCode::new(c.code())
                    .ok()
                    .map(|code| Currency::new(code, c.name()))
            })
            .collect(),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────────────────────────────────────

/// Rate provider backed by the static table.
#[derive(Debug, Clone, Default)]
pub struct StaticRateProvider {
    as_of: Option<String>,
}

impl StaticRateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the timestamp reported on every quote.
    pub fn with_timestamp(mut self, as_of: impl Into<String>) -> Self {
        self.as_of = Some(as_of.into());
        self
    }

    fn timestamp(&self) -> String {
        self.as_of
            .clone()
            .unwrap_or_else(|| Utc::now().format(PROVIDER_TIME_FORMAT).to_string())
    }
}

fn lookup(code: &CurrencyCode) -> Result<StaticCurrency, ProviderError> {
    code.as_str()
        .parse()
        .map_err(|_| ProviderError::UnsupportedCurrency(code.to_string()))
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    async fn list_currencies(&self) -> Result<Catalog, ProviderError> {
        Ok(catalog())
    }

    async fn get_rate(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<ConversionQuote, ProviderError> {
        let rate = get_rate(lookup(base)?, lookup(target)?);
        tracing::debug!(%base, %target, rate, "static rate");
        Ok(ConversionQuote::new(
            base.clone(),
            target.clone(),
            rate,
            self.timestamp(),
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("USD".parse::<StaticCurrency>().unwrap(), StaticCurrency::USD);
        assert_eq!("brl".parse::<StaticCurrency>().unwrap(), StaticCurrency::BRL);
        assert!("XYZ".parse::<StaticCurrency>().is_err());
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(StaticCurrency::EUR.to_string(), "EUR");
    }

    #[test]
    fn test_same_currency_rate_is_one() {
        assert_eq!(get_rate(StaticCurrency::JPY, StaticCurrency::JPY), 1.0);
    }

    #[test]
    fn test_rates_are_reciprocal() {
        let there = get_rate(StaticCurrency::USD, StaticCurrency::BRL);
        let back = get_rate(StaticCurrency::BRL, StaticCurrency::USD);
        assert!((there * back - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_catalog_matches_table() {
        let catalog = catalog();
        assert_eq!(catalog.len(), StaticCurrency::all().len());
        assert_eq!(catalog.as_slice()[0].label(), "USD - United States Dollar");
    }

    #[tokio::test]
    async fn test_provider_quote() {
        let provider = StaticRateProvider::new().with_timestamp("Fri, 27 Mar 2020 00:00:01 +0000");
        let quote = provider.get_rate(&code("USD"), &code("EUR")).await.unwrap();
        assert_eq!(quote.base, "USD");
        assert_eq!(quote.target, "EUR");
        assert!((quote.rate - 1.0 / 1.087).abs() < 1e-12);
        assert_eq!(quote.as_of, "Fri, 27 Mar 2020 00:00:01 +0000");
    }

    #[tokio::test]
    async fn test_provider_default_timestamp_parses() {
        let quote = StaticRateProvider::new()
            .get_rate(&code("GBP"), &code("INR"))
            .await
            .unwrap();
        assert!(quote.as_of_utc().is_some());
    }

    #[tokio::test]
    async fn test_provider_unsupported_currency() {
        let result = StaticRateProvider::new()
            .get_rate(&code("USD"), &code("XYZ"))
            .await;
        assert!(matches!(result, Err(ProviderError::UnsupportedCurrency(c)) if c == "XYZ"));
    }
}
