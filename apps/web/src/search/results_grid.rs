//! Results area — product cards, the no-results message, or the connection error.

use dioxus::prelude::*;
use vitrine_core::render::cards;
use vitrine_core::widget::Grid;

use super::product_card::ProductCardView;
use crate::state::*;

#[component]
pub fn ResultsGrid() -> Element {
    let widget = WIDGET.read();

    let body = match widget.grid() {
        Grid::Blank => rsx! {},
        Grid::Cards(_) => {
            let drawn = cards(&widget, &CONFIG.read().placeholder_image);
            rsx! {
                for (i, card) in drawn.into_iter().enumerate() {
                    ProductCardView { key: "{i}", card }
                }
            }
        }
        Grid::NoResults { message } => rsx! {
            div {
                class: "empty-state",
                svg {
                    class: "empty-icon",
                    width: "40",
                    height: "40",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "1.5",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                    line { x1: "8", y1: "11", x2: "14", y2: "11" }
                }
                p { "{message}" }
            }
        },
        Grid::Error { message } => rsx! {
            p { class: "empty-state", "{message}" }
        },
    };

    rsx! {
        div {
            id: "resultsGrid",
            class: "results-grid",
            {body}
        }
    }
}
