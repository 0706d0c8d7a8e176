use dioxus::prelude::*;
use vitrine_core::render::ProductCard;

/// One product in the results grid.
///
/// Text goes through `rsx!` interpolation, so backend-supplied names and
/// categories are escaped rather than parsed as markup.
#[component]
pub fn ProductCardView(card: ProductCard) -> Element {
    // Image URL that failed to load, if any. Keyed on the URL so a reused
    // component instance retries when it is handed a different product.
    let mut failed_image = use_signal(|| None::<String>);

    let src = if failed_image.read().as_deref() == Some(card.image.as_str()) {
        card.fallback_image.clone()
    } else {
        card.image.clone()
    };
    let badge_class = format!("ai-match ai-match--{}", card.tier.as_str());
    let image = card.image.clone();

    rsx! {
        div {
            class: "card",
            img {
                class: "card-img",
                src: "{src}",
                alt: "{card.alt}",
                onerror: move |_| failed_image.set(Some(image.clone())),
            }
            div {
                class: "card-body",
                span { class: "card-cat", "{card.category}" }
                h3 { class: "card-title", "{card.name}" }
                div {
                    class: badge_class,
                    // Robot glyph
                    svg {
                        width: "14",
                        height: "14",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        rect { x: "4", y: "8", width: "16", height: "12", rx: "2" }
                        line { x1: "12", y1: "4", x2: "12", y2: "8" }
                        circle { cx: "9", cy: "14", r: "1" }
                        circle { cx: "15", cy: "14", r: "1" }
                    }
                    span { "{card.match_label}" }
                }
                span { class: "card-price", "{card.price}" }
                if let Some(desc) = &card.description {
                    p { class: "card-desc", "{desc}" }
                }
                a { class: "btn-details", href: card.details_href, "{card.details_label}" }
            }
        }
    }
}
