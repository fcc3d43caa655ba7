//! Converter Widget
//!
//! Owns the form state and drives the rate provider. Every provider call is
//! split into `begin_*` (mark loading, describe the request), the awaited
//! call, and [`ConverterWidget::apply`]. Results overwrite state in the order
//! they are applied; superseded requests are neither cancelled nor ignored.

use converter_types::{
    Catalog, ConversionQuote, CurrencyCode, Direction, DomainError, ProviderError, RateProvider,
    WidgetError,
};
use tracing::{debug, info, warn};

use crate::state::{Bounds, Dropdown, Point, Side, Status, WidgetConfig, WidgetState};

/// An issued rate request whose result has not been applied yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RateFetch {
    id: u64,
    direction: Direction,
    base: CurrencyCode,
    target: CurrencyCode,
    amount: f64,
}

impl RateFetch {
    /// Monotonic per widget, for tracing only.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    /// The amount being converted, captured when the request was issued.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Display line for a rate, four decimal places.
pub fn format_rate(from: &CurrencyCode, rate: f64, to: &CurrencyCode) -> String {
    format!("1 {} = {:.4} {}", from, rate, to)
}

/// The converter form.
///
/// Generic over `P: RateProvider` so tests and offline runs can inject a
/// provider without touching the network.
pub struct ConverterWidget<P: RateProvider> {
    provider: P,
    config: WidgetConfig,
    catalog: Catalog,
    state: WidgetState,
    bounds: Option<Bounds>,
    issued: u64,
}

impl<P: RateProvider> ConverterWidget<P> {
    /// Creates a widget with an empty catalog. Call [`initialize`](Self::initialize) next.
    pub fn new(provider: P, config: WidgetConfig) -> Self {
        let state = WidgetState::new(&config);
        Self {
            provider,
            config,
            catalog: Catalog::default(),
            state,
            bounds: None,
            issued: 0,
        }
    }

    /// Sets the rendered region used to detect outside clicks.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────────

    /// Loads the catalog, selects the default pair and fetches its rate.
    pub async fn initialize(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        match self.provider.list_currencies().await {
            Ok(catalog) => {
                info!(count = catalog.len(), "currency catalog loaded");
                self.catalog = catalog;
                self.state.currency_from = self.config.default_from.clone();
                self.state.currency_to = self.config.default_to.clone();
                for side in [Side::From, Side::To] {
                    self.refresh_label(side);
                    *self.state.filtered_mut(side) = self.catalog.as_slice().to_vec();
                }
                self.refresh_rate().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to load currency catalog");
                self.fail(WidgetError::CatalogLoad);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rate requests
    // ─────────────────────────────────────────────────────────────────────────────

    /// Starts a forward fetch for the selected pair.
    pub fn begin_refresh(&mut self) -> RateFetch {
        let base = self.state.currency_from.clone();
        let target = self.state.currency_to.clone();
        let amount = self.state.amount_from;
        self.begin(Direction::Forward, base, target, amount)
    }

    /// Starts a reverse fetch, or resets `amount_from` to 1 when there is no
    /// positive target amount to convert back.
    pub fn begin_reverse(&mut self) -> Option<RateFetch> {
        match self.state.amount_to {
            Some(amount) if amount > 0.0 => {
                let base = self.state.currency_to.clone();
                let target = self.state.currency_from.clone();
                Some(self.begin(Direction::Reverse, base, target, amount))
            }
            _ => {
                debug!("no target amount, resetting source amount");
                self.state.amount_from = 1.0;
                None
            }
        }
    }

    fn begin(
        &mut self,
        direction: Direction,
        base: CurrencyCode,
        target: CurrencyCode,
        amount: f64,
    ) -> RateFetch {
        self.issued += 1;
        self.state.loading = true;
        self.state.error = None;
        debug!(id = self.issued, %direction, %base, %target, amount, "rate fetch issued");
        RateFetch {
            id: self.issued,
            direction,
            base,
            target,
            amount,
        }
    }

    /// Applies the outcome of a fetch.
    ///
    /// On failure only `loading` and `error` change.
    pub fn apply(&mut self, fetch: RateFetch, result: Result<ConversionQuote, ProviderError>) {
        let quote = match result {
            Ok(quote) => quote,
            Err(e) => {
                warn!(id = fetch.id, direction = %fetch.direction, error = %e, "rate fetch failed");
                self.fail(WidgetError::RateFetch(fetch.direction));
                return;
            }
        };

        let rate = quote.rate;
        match fetch.direction {
            Direction::Forward => {
                self.state.amount_to = Some(fetch.amount * rate);
                self.state.exchange_rate = format_rate(&fetch.base, rate, &fetch.target);
            }
            Direction::Reverse => {
                // Shown in the form's own orientation: 1 source = x target.
                self.state.amount_from = fetch.amount * rate;
                self.state.exchange_rate = format_rate(&fetch.target, 1.0 / rate, &fetch.base);
            }
        }
        self.state.last_update = Some(quote.as_of);
        self.state.loading = false;
        debug!(id = fetch.id, rate, "rate fetch applied");
    }

    /// Fetches the forward rate and recomputes `amount_to`.
    pub async fn refresh_rate(&mut self) {
        let fetch = self.begin_refresh();
        let result = self.provider.get_rate(&fetch.base, &fetch.target).await;
        self.apply(fetch, result);
    }

    /// Fetches the inverse rate and recomputes `amount_from` from `amount_to`.
    pub async fn reverse_refresh(&mut self) {
        if let Some(fetch) = self.begin_reverse() {
            let result = self.provider.get_rate(&fetch.base, &fetch.target).await;
            self.apply(fetch, result);
        }
    }

    fn fail(&mut self, err: WidgetError) {
        self.state.error = Some(err.to_string());
        self.state.loading = false;
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Form events
    // ─────────────────────────────────────────────────────────────────────────────

    /// Source amount edited. Non-positive amounts clear the result without a request.
    pub async fn set_amount_from(&mut self, amount: f64) {
        self.state.amount_from = if amount.is_finite() { amount } else { 0.0 };
        if self.state.amount_from > 0.0 {
            self.refresh_rate().await;
        } else {
            self.state.amount_to = None;
        }
    }

    /// Target amount edited.
    pub async fn set_amount_to(&mut self, amount: Option<f64>) {
        self.state.amount_to = amount.filter(|a| a.is_finite());
        self.reverse_refresh().await;
    }

    /// Exchanges source and target currencies.
    pub async fn swap(&mut self) {
        let state = &mut self.state;
        std::mem::swap(&mut state.currency_from, &mut state.currency_to);
        self.refresh_label(Side::From);
        self.refresh_label(Side::To);
        info!(from = %self.state.currency_from, to = %self.state.currency_to, "currencies swapped");
        self.refresh_rate().await;
    }

    /// Resets amounts to their defaults.
    pub async fn clear(&mut self) {
        self.state.amount_from = 1.0;
        self.state.amount_to = None;
        self.refresh_rate().await;
    }

    /// Search box input. Never changes the selection.
    pub fn search(&mut self, side: Side, text: &str) {
        *self.state.search_text_mut(side) = text.to_string();
        *self.state.filtered_mut(side) = self.catalog.filter(text);
    }

    /// Picks a currency from a dropdown.
    pub async fn select_currency(
        &mut self,
        side: Side,
        code: CurrencyCode,
    ) -> Result<(), DomainError> {
        if !self.catalog.contains(&code) {
            return Err(DomainError::UnknownCurrency(code));
        }
        info!(%side, %code, "currency selected");
        *self.state.currency_mut(side) = code;
        self.refresh_label(side);
        if self.state.dropdown.is_open(side) {
            self.state.dropdown = Dropdown::Closed;
        }
        self.refresh_rate().await;
        Ok(())
    }

    /// Opens `side` (closing the other) or closes it if already open.
    pub fn toggle_dropdown(&mut self, side: Side) {
        if self.state.dropdown.is_open(side) {
            self.state.dropdown = Dropdown::Closed;
        } else {
            self.state.dropdown = Dropdown::Open(side);
            *self.state.filtered_mut(side) = self.catalog.as_slice().to_vec();
        }
    }

    /// Pointer pressed somewhere on screen.
    ///
    /// Anything outside the widget's bounds closes both dropdowns. Without
    /// known bounds every event counts as outside.
    pub fn pointer_down(&mut self, at: Point) {
        let inside = self.bounds.is_some_and(|b| b.contains(at));
        if !inside {
            self.close_dropdowns();
        }
    }

    pub fn close_dropdowns(&mut self) {
        self.state.dropdown = Dropdown::Closed;
    }

    fn refresh_label(&mut self, side: Side) {
        let code = self.state.currency(side);
        let label = match self.catalog.find(code) {
            Some(currency) => currency.label(),
            None => code.to_string(),
        };
        *self.state.search_text_mut(side) = label;
    }
}
