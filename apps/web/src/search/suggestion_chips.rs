//! One-click preset queries.

use dioxus::prelude::*;

use super::fill_search;
use crate::state::*;

#[component]
pub fn SuggestionChips() -> Element {
    let suggestions = CONFIG.read().suggestions.clone();

    if suggestions.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "suggestions",
            span { class: "suggestions-label", "Accès rapide :" }
            div {
                class: "chips",
                for (i, text) in suggestions.into_iter().enumerate() {
                    button {
                        key: "{i}",
                        class: "chip",
                        onclick: {
                            let text = text.clone();
                            move |_| fill_search(&text)
                        },
                        "{text}"
                    }
                }
            }
        }
    }
}
