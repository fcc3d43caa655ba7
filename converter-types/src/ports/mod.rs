//! Port traits (interfaces for adapters).
//!
//! The widget depends on these traits, not on a concrete HTTP client.

mod provider;

pub use provider::RateProvider;
