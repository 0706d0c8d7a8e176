use dioxus::prelude::*;

use crate::state::*;

/// Result count above the grid. Hidden unless products are shown.
#[component]
pub fn ResultsHeader() -> Element {
    let widget = WIDGET.read();
    let visible = widget.header_visible();
    let count = widget.count_label();

    rsx! {
        div {
            id: "resultsHeader",
            class: if visible { "results-header" } else { "results-header hidden" },
            h2 { class: "results-title", "Résultats" }
            span { id: "resultsCount", class: "results-count", "{count}" }
        }
    }
}
