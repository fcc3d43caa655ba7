//! # Converter Widget
//!
//! Client-side state of the currency converter form and every transition
//! it supports: loading the catalog, fetching rates in both directions,
//! swapping, clearing, searching and dropdown handling.
//!
//! ## Architecture
//!
//! - `state` - Plain form state (amounts, selections, dropdowns, status)
//! - `widget` - The state owner, generic over `P: RateProvider`
//!
//! Rendering is left to the caller; the widget only exposes its state.

pub mod state;
pub mod widget;


pub use state::{Bounds, Dropdown, Point, Side, Status, WidgetConfig, WidgetState};
pub use widget::{ConverterWidget, RateFetch};
