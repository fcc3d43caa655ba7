//! # Converter Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! parsing rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the workspace:
//! - `domain/` - Pure domain types (CurrencyCode, Catalog, ConversionQuote)
//! - `ports/` - Trait definitions that rate providers must implement
//! - `dto/` - Wire shapes of the ExchangeRate-API responses
//! - `error/` - Domain, provider and widget error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Catalog, ConversionQuote, Currency, CurrencyCode, Direction};
pub use dto::{PairResponse, SupportedCodesResponse};
pub use error::{DomainError, ProviderError, WidgetError};
pub use ports::RateProvider;
