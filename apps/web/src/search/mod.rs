//! Search panel — input, suggestion chips, loading indicator, header and grid.
//!
//! [`perform_search`] and [`fill_search`] are the entry points other page
//! elements use to trigger a search.

mod loading_spinner;
mod product_card;
mod results_grid;
mod results_header;
mod search_input;
mod suggestion_chips;

use dioxus::prelude::*;
use tracing::error;
use vitrine_core::widget::execute;
use vitrine_core::{ConnectionError, HttpTransport};

use crate::state::*;
use loading_spinner::LoadingSpinner;
use results_grid::ResultsGrid;
use results_header::ResultsHeader;
use search_input::SearchInput;
use suggestion_chips::SuggestionChips;

/// Search panel spanning the content area.
#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        section {
            class: "search-panel",
            SearchInput {}
            SuggestionChips {}
        }
        section {
            class: "results-panel",
            LoadingSpinner {}
            ResultsHeader {}
            ResultsGrid {}
        }
    }
}

/// Origin that a relative endpoint is resolved against.
fn page_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    CONFIG.read().base_url.clone()
}

fn transport() -> Result<HttpTransport, ConnectionError> {
    if let Some(t) = TRANSPORT.read().as_ref() {
        return Ok(t.clone());
    }
    let t = HttpTransport::from_config(&CONFIG.read(), &page_origin())?;
    *TRANSPORT.write() = Some(t.clone());
    Ok(t)
}

/// Search for the text currently in the input. Blank input does nothing.
pub fn perform_search() {
    let Some(pending) = WIDGET.write().begin_search() else {
        return;
    };

    let transport = match transport() {
        Ok(t) => t,
        Err(e) => {
            error!("Cannot reach search backend: {e}");
            WIDGET.write().complete(&pending, Err(e));
            return;
        }
    };

    spawn(async move {
        let outcome = execute(&transport, &pending).await;
        WIDGET.write().complete(&pending, outcome);
    });
}

/// Put `text` in the input, then search for it.
pub fn fill_search(text: &str) {
    WIDGET.write().set_input(text);
    perform_search();
}

/// Clear input and results.
pub fn reset_search() {
    WIDGET.write().reset();
}
