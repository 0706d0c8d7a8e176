//! Card view models and the localized strings the widget displays.
//!
//! Hosts never format product fields themselves; they draw a [`ProductCard`].

use crate::types::Product;
use crate::widget::{Grid, UiState, WidgetState};

pub const DETAILS_LABEL: &str = "Voir détails";
pub const DETAILS_HREF: &str = "#";
pub const IDLE_STATUS: &str = "Prêt";
pub const LOADING_STATUS: &str = "Recherche…";
pub const EMPTY_STATUS: &str = "0 produit trouvé";

/// Descriptions longer than this many characters are cut.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 80;

/// Scores above this are shown as a strong match.
const HIGH_MATCH_THRESHOLD: u8 = 75;

pub fn count_label(count: usize) -> String {
    format!("{count} produits trouvés")
}

pub fn no_results_message(query: &str) -> String {
    format!("Aucun résultat trouvé pour \"{query}\".")
}

pub fn match_label(score: u8) -> String {
    format!("Match {score}%")
}

/// Cut `text` to `max_chars` characters, appending `...` when something was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    // Char-based so multi-byte UTF-8 never gets split
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

/// One-line summary for a status bar.
pub fn status_line(state: &WidgetState) -> String {
    match state.ui_state() {
        UiState::Idle => IDLE_STATUS.to_string(),
        UiState::Loading => LOADING_STATUS.to_string(),
        UiState::ResultsShown => state.count_label().to_string(),
        UiState::Empty => EMPTY_STATUS.to_string(),
        UiState::Error => match state.grid() {
            Grid::Error { message } => message.clone(),
            _ => String::new(),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    High,
    Medium,
}

impl MatchTier {
    pub fn for_score(score: u8) -> Self {
        if score > HIGH_MATCH_THRESHOLD {
            MatchTier::High
        } else {
            MatchTier::Medium
        }
    }

    /// CSS modifier for the match badge.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::High => "high",
            MatchTier::Medium => "medium",
        }
    }
}

/// Everything a host needs to draw one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub image: String,
    /// Shown instead of `image` once it fails to load.
    pub fallback_image: String,
    pub alt: String,
    pub category: String,
    pub name: String,
    pub match_label: String,
    pub tier: MatchTier,
    pub price: String,
    pub description: Option<String>,
    pub details_href: &'static str,
    pub details_label: &'static str,
}

impl ProductCard {
    pub fn new(product: &Product, fallback_image: &str) -> Self {
        let image = match product.image.trim() {
            "" => fallback_image.to_string(),
            url => url.to_string(),
        };
        Self {
            image,
            fallback_image: fallback_image.to_string(),
            alt: product.name.clone(),
            category: product.category.clone(),
            name: product.name.clone(),
            match_label: match_label(product.score),
            tier: MatchTier::for_score(product.score),
            price: product.price.clone(),
            description: product
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(|d| truncate_chars(d, DESCRIPTION_PREVIEW_CHARS)),
            details_href: DETAILS_HREF,
            details_label: DETAILS_LABEL,
        }
    }
}

/// Cards for the current grid, in server order. Empty unless results are shown.
pub fn cards(state: &WidgetState, fallback_image: &str) -> Vec<ProductCard> {
    match state.grid() {
        Grid::Cards(products) => products.iter().map(|p| ProductCard::new(p, fallback_image)).collect(),
        _ => Vec::new(),
    }
}
