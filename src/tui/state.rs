//! Pure session state for the revenue table
//!
//! All UI-facing state lives in one value and changes only through
//! `reduce`; the filtered rows and their total are derived on demand from
//! whatever the state currently holds, so there is no staged recomputation
//! ordering to get wrong.

use crate::services::Aggregator;
use crate::types::AggregatedProduct;

/// Fetch lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    /// Fetch completed; the list may legitimately be empty
    Populated,
    /// Fetch failed; rendered identically to an empty Populated state
    Failed,
}

/// Everything the table surface needs
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub phase: Phase,
    pub products: Vec<AggregatedProduct>,
    pub search: String,
}

/// State transition events
#[derive(Debug, Clone)]
pub enum AppEvent {
    FetchStarted,
    FetchSucceeded(Vec<AggregatedProduct>),
    FetchFailed,
    SearchChanged(String),
}

/// Apply an event, producing the next state.
///
/// The product list is rebuilt in full on every fetch cycle; a started or
/// failed fetch leaves no stale rows behind.
pub fn reduce(state: SessionState, event: AppEvent) -> SessionState {
    match event {
        AppEvent::FetchStarted => SessionState {
            phase: Phase::Loading,
            products: Vec::new(),
            ..state
        },
        AppEvent::FetchSucceeded(products) => SessionState {
            phase: Phase::Populated,
            products,
            ..state
        },
        AppEvent::FetchFailed => SessionState {
            phase: Phase::Failed,
            products: Vec::new(),
            ..state
        },
        AppEvent::SearchChanged(search) => SessionState { search, ..state },
    }
}

/// Filtered rows plus their running total
#[derive(Debug)]
pub struct TableView<'a> {
    pub rows: Vec<&'a AggregatedProduct>,
    pub total: f64,
}

/// Derive the displayable view from the current state, from scratch
pub fn derive_view(state: &SessionState) -> TableView<'_> {
    let rows = Aggregator::filter_by_prefix(&state.products, &state.search);
    let total = Aggregator::total_revenue(&rows);
    TableView { rows, total }
}
