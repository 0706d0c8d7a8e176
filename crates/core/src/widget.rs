//! Search widget state and the search lifecycle.
//!
//! [`WidgetState`] is a plain value that hosts render from. A search is split
//! into two steps so hosts can run the network part on whatever executor they
//! own:
//!
//! 1. [`WidgetState::begin_search`] validates the input, clears the grid, shows
//!    the loading indicator and hands back a [`PendingSearch`] ticket.
//! 2. [`WidgetState::complete`] applies the outcome for that ticket and hides
//!    the loading indicator.
//!
//! Every ticket carries a sequence number. Only the most recently issued ticket
//! may change the UI; outcomes for superseded tickets are dropped.
//!
//! [`SearchWidget`] bundles a state with a [`SearchTransport`] for hosts that
//! run one search at a time.

use tracing::{debug, error, info};

use crate::client::SearchTransport;
use crate::error::ConnectionError;
use crate::render::{count_label, no_results_message};
use crate::types::{Product, Query};

/// What the user currently sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    ResultsShown,
    Empty,
    Error,
}

/// Contents of the results area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Grid {
    #[default]
    Blank,
    Cards(Vec<Product>),
    NoResults { message: String },
    Error { message: String },
}

/// Ticket for an in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    seq: u64,
    query: Query,
}

impl PendingSearch {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

/// Result of handing an outcome back to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied(UiState),
    /// A newer search was started (or the widget was reset) in the meantime.
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    input: String,
    loading: bool,
    header_visible: bool,
    /// Last count label set. Kept while the header is hidden.
    count_label: String,
    grid: Grid,
    latest_seq: u64,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn count_label(&self) -> &str {
        &self.count_label
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn ui_state(&self) -> UiState {
        if self.loading {
            return UiState::Loading;
        }
        match self.grid {
            Grid::Blank => UiState::Idle,
            Grid::Cards(_) => UiState::ResultsShown,
            Grid::NoResults { .. } => UiState::Empty,
            Grid::Error { .. } => UiState::Error,
        }
    }

    /// Start a search for the current input.
    ///
    /// Blank input is a no-op: nothing changes and `None` is returned.
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        let query = Query::parse(&self.input)?;

        self.grid = Grid::Blank;
        self.loading = true;
        self.header_visible = false;
        self.latest_seq += 1;

        Some(PendingSearch { seq: self.latest_seq, query })
    }

    /// Replace the input with `text` and start a search for it.
    pub fn fill(&mut self, text: impl Into<String>) -> Option<PendingSearch> {
        self.set_input(text);
        self.begin_search()
    }

    /// Apply the outcome of `pending`. The loading indicator is hidden last.
    pub fn complete(
        &mut self,
        pending: &PendingSearch,
        outcome: Result<Vec<Product>, ConnectionError>,
    ) -> Completion {
        if pending.seq != self.latest_seq {
            debug!(seq = pending.seq, latest = self.latest_seq, "Dropping superseded search response");
            return Completion::Stale;
        }

        match outcome {
            Ok(products) => self.render_results(products, pending.query.as_str()),
            Err(e) => {
                self.grid = Grid::Error { message: e.user_message().to_string() };
            }
        }
        self.loading = false;

        Completion::Applied(self.ui_state())
    }

    /// Replace the grid with `products`, or with the no-results message.
    pub fn render_results(&mut self, products: Vec<Product>, query: &str) {
        if products.is_empty() {
            self.grid = Grid::NoResults { message: no_results_message(query) };
            return;
        }

        self.header_visible = true;
        self.count_label = count_label(products.len());
        self.grid = Grid::Cards(products);
    }

    /// Whether there is anything for [`reset`](Self::reset) to clear. Stays
    /// true after the input is emptied by hand while results are still shown.
    pub fn can_reset(&self) -> bool {
        !self.input.trim().is_empty() || self.ui_state() != UiState::Idle
    }

    /// Clear input and results, and orphan any in-flight search.
    pub fn reset(&mut self) {
        self.input.clear();
        self.grid = Grid::Blank;
        self.loading = false;
        self.header_visible = false;
        self.latest_seq += 1;
    }
}

/// Run `pending` against `transport`, logging the outcome.
pub async fn execute<T: SearchTransport>(
    transport: &T,
    pending: &PendingSearch,
) -> Result<Vec<Product>, ConnectionError> {
    info!(seq = pending.seq, query = pending.query.as_str(), "Searching");
    let outcome = transport.search(&pending.query).await;
    match &outcome {
        Ok(products) => debug!(seq = pending.seq, count = products.len(), "Search completed"),
        Err(e) => error!(seq = pending.seq, "Search failed: {e}"),
    }
    outcome
}

/// A widget state paired with the transport it searches through.
pub struct SearchWidget<T> {
    transport: T,
    state: WidgetState,
}

impl<T: SearchTransport> SearchWidget<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, state: WidgetState::new() }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.set_input(text);
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Search for the current input.
    ///
    /// Returns `None` if the input was blank, or if the outcome was superseded
    /// by a newer search or a reset and therefore not applied.
    pub async fn perform_search(&mut self) -> Option<UiState> {
        let pending = self.state.begin_search()?;
        let outcome = execute(&self.transport, &pending).await;
        match self.state.complete(&pending, outcome) {
            Completion::Applied(ui) => Some(ui),
            Completion::Stale => None,
        }
    }

    /// Set the input to `text`, then search for it.
    pub async fn fill_search(&mut self, text: impl Into<String>) -> Option<UiState> {
        self.state.set_input(text);
        self.perform_search().await
    }
}
