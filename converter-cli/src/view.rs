//! Plain-text rendering of the widget.

use std::fmt::Write as _;

use converter_widget::{Bounds, Dropdown, Side, Status, WidgetState};

/// Terminal cells the rendered widget occupies; clicks outside close dropdowns.
pub const BOUNDS: Bounds = Bounds {
    x: 0.0,
    y: 0.0,
    width: 80.0,
    height: 24.0,
};

/// Dropdown rows shown before truncating.
const MAX_ROWS: usize = 8;

pub fn render(state: &WidgetState) -> String {
    let mut out = String::new();
    let amount_to = state
        .amount_to
        .map(|a| format!("{:.2}", a))
        .unwrap_or_else(|| "-".to_string());

    let _ = writeln!(out, "From: [{}]  {:.2}", state.search_text_from, state.amount_from);
    let _ = writeln!(out, "To:   [{}]  {}", state.search_text_to, amount_to);
    if !state.exchange_rate.is_empty() {
        let _ = writeln!(out, "{}", state.exchange_rate);
    }
    if let Some(updated) = &state.last_update {
        let _ = writeln!(out, "Last update: {}", updated);
    }

    match state.status() {
        Status::Loading => {
            let _ = writeln!(out, "Loading...");
        }
        Status::Error => {
            let _ = writeln!(out, "Error: {}", state.error.as_deref().unwrap_or_default());
        }
        Status::Idle => {}
    }

    if let Dropdown::Open(side) = state.dropdown {
        render_dropdown(&mut out, state, side);
    }
    out
}

fn render_dropdown(out: &mut String, state: &WidgetState, side: Side) {
    let selected = state.currency(side);
    let entries = state.filtered(side);
    let _ = writeln!(out, "-- {} --", side);
    for currency in entries.iter().take(MAX_ROWS) {
        let marker = if &currency.code == selected { '*' } else { ' ' };
        let _ = writeln!(out, " {} {}", marker, currency.label());
    }
    if entries.len() > MAX_ROWS {
        let _ = writeln!(out, "   ... and {} more", entries.len() - MAX_ROWS);
    }
    if entries.is_empty() {
        let _ = writeln!(out, "   (no matches)");
    }
}
