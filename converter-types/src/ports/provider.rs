//! Exchange rate provider port.
//!
//! Implementations can be HTTP clients, static tables, mock providers, etc.

use crate::domain::{Catalog, ConversionQuote, CurrencyCode};
use crate::error::ProviderError;

/// Port trait for exchange rate providers.
///
/// Both calls are single-shot: no retry, no caching.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Lists every currency the provider can quote.
    async fn list_currencies(&self) -> Result<Catalog, ProviderError>;

    /// Gets the rate for an ordered pair.
    /// The quote's rate is how many units of `target` 1 unit of `base` buys.
    async fn get_rate(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<ConversionQuote, ProviderError>;
}
