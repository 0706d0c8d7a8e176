//! Root application component — header, search panel, status bar.

use dioxus::prelude::*;
use vitrine_core::render::status_line;

use crate::search::SearchPanel;
use crate::state::*;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            header {
                class: "app-header",
                h1 { class: "app-title", "Vitrine" }
                p { class: "app-subtitle", "Téléphones, modems et accessoires" }
            }

            main {
                class: "content-area",
                SearchPanel {}
            }

            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let status = status_line(&WIDGET.read());

    rsx! {
        footer {
            class: "statusbar",
            span { class: "statusbar-status", "{status}" }
        }
    }
}
