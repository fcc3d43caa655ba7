//! Form state of the converter widget.

use converter_types::{Currency, CurrencyCode};
use serde::Serialize;
use std::fmt;

/// One of the two currency pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    From,
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::From => f.write_str("from"),
            Side::To => f.write_str("to"),
        }
    }
}

/// Which dropdown is open. Both open at once is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dropdown {
    #[default]
    Closed,
    Open(Side),
}

impl Dropdown {
    pub fn is_open(self, side: Side) -> bool {
        self == Dropdown::Open(side)
    }
}

/// Request lifecycle, orthogonal to the field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Loading,
    Error,
}

/// A position reported by a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding rectangle of the rendered widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Currencies selected when the catalog first loads.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub default_from: CurrencyCode,
    pub default_to: CurrencyCode,
}

impl WidgetConfig {
    pub fn new(default_from: CurrencyCode, default_to: CurrencyCode) -> Self {
        Self {
            default_from,
            default_to,
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_from: "USD".parse().expect("USD is a valid code"),
            default_to: "BRL".parse().expect("BRL is a valid code"),
        }
    }
}

/// Everything the form displays.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetState {
    pub amount_from: f64,
    pub amount_to: Option<f64>,
    pub currency_from: CurrencyCode,
    pub currency_to: CurrencyCode,
    pub search_text_from: String,
    pub search_text_to: String,
    pub dropdown: Dropdown,
    pub loading: bool,
    pub error: Option<String>,
    /// e.g. `1 USD = 5.0000 BRL`
    pub exchange_rate: String,
    pub last_update: Option<String>,
    pub filtered_from: Vec<Currency>,
    pub filtered_to: Vec<Currency>,
}

impl WidgetState {
    pub(crate) fn new(config: &WidgetConfig) -> Self {
        Self {
            amount_from: 1.0,
            amount_to: None,
            currency_from: config.default_from.clone(),
            currency_to: config.default_to.clone(),
            search_text_from: config.default_from.to_string(),
            search_text_to: config.default_to.to_string(),
            dropdown: Dropdown::Closed,
            loading: false,
            error: None,
            exchange_rate: String::new(),
            last_update: None,
            filtered_from: Vec::new(),
            filtered_to: Vec::new(),
        }
    }

    pub fn status(&self) -> Status {
        if self.loading {
            Status::Loading
        } else if self.error.is_some() {
            Status::Error
        } else {
            Status::Idle
        }
    }

    pub fn currency(&self, side: Side) -> &CurrencyCode {
        match side {
            Side::From => &self.currency_from,
            Side::To => &self.currency_to,
        }
    }

    pub fn search_text(&self, side: Side) -> &str {
        match side {
            Side::From => &self.search_text_from,
            Side::To => &self.search_text_to,
        }
    }

    pub fn filtered(&self, side: Side) -> &[Currency] {
        match side {
            Side::From => &self.filtered_from,
            Side::To => &self.filtered_to,
        }
    }

    pub(crate) fn currency_mut(&mut self, side: Side) -> &mut CurrencyCode {
        match side {
            Side::From => &mut self.currency_from,
            Side::To => &mut self.currency_to,
        }
    }

    pub(crate) fn search_text_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::From => &mut self.search_text_from,
            Side::To => &mut self.search_text_to,
        }
    }

    pub(crate) fn filtered_mut(&mut self, side: Side) -> &mut Vec<Currency> {
        match side {
            Side::From => &mut self.filtered_from,
            Side::To => &mut self.filtered_to,
        }
    }
}
