use dioxus::prelude::*;
use vitrine_core::render::LOADING_STATUS;

use crate::state::*;

/// Spinner shown while the latest search is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    let loading = WIDGET.read().is_loading();

    rsx! {
        div {
            id: "loadingSpinner",
            class: if loading { "loading-spinner" } else { "loading-spinner hidden" },
            div { class: "spinner" }
            span { class: "loading-text", "{LOADING_STATUS}" }
        }
    }
}
