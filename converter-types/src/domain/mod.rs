//! Domain models for the currency converter.

pub mod catalog;
pub mod currency;
pub mod quote;

pub use catalog::Catalog;
pub use currency::{Currency, CurrencyCode};
pub use quote::{ConversionQuote, Direction};
