//! Error types for the currency converter.

use crate::domain::{CurrencyCode, Direction};

/// Domain-level errors (invalid input).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    #[error("Currency not in catalog: {0}")]
    UnknownCurrency(CurrencyCode),
}

/// Rate provider errors (transport or upstream failures).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider rejected request: {0}")]
    Rejected(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

/// Failures surfaced on the converter widget.
///
/// Each variant renders as the fixed message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("Could not load the currency list. Please try again.")]
    CatalogLoad,

    #[error("{}", rate_fetch_message(.0))]
    RateFetch(Direction),
}

fn rate_fetch_message(direction: &Direction) -> &'static str {
    match direction {
        Direction::Forward => "Could not fetch the exchange rate. Check the selected currencies.",
        Direction::Reverse => "Could not perform the reverse conversion.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_messages_are_fixed() {
        assert_eq!(
            WidgetError::CatalogLoad.to_string(),
            "Could not load the currency list. Please try again."
        );
        assert_eq!(
            WidgetError::RateFetch(Direction::Reverse).to_string(),
            "Could not perform the reverse conversion."
        );
        assert_ne!(
            WidgetError::RateFetch(Direction::Forward).to_string(),
            WidgetError::RateFetch(Direction::Reverse).to_string()
        );
    }
}
