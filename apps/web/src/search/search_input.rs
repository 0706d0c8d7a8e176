//! Query input with Enter-to-search, submit and reset buttons.

use dioxus::prelude::*;

use super::{perform_search, reset_search};
use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let widget = WIDGET.read();
    let query = widget.input().to_string();
    let has_query = !query.trim().is_empty();
    let can_reset = widget.can_reset();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            div {
                class: "search-input-row",

                // Search icon
                svg {
                    class: "search-icon",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                input {
                    id: "searchInput",
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Rechercher un téléphone, un modem, un accessoire…",
                    value: "{query}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        WIDGET.write().set_input(e.value());
                    },
                    onkeypress: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            perform_search();
                        }
                    },
                }

                if can_reset {
                    button {
                        class: "search-clear",
                        title: "Réinitialiser",
                        onclick: move |_| reset_search(),
                        "\u{00D7}"
                    }
                }

                button {
                    class: "search-submit",
                    onclick: move |_| perform_search(),
                    "Rechercher"
                }
            }
        }
    }
}
