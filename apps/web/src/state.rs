//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use vitrine_core::{HttpTransport, WidgetConfig, WidgetState};

use crate::INITIAL_CONFIG;

fn initial_config() -> WidgetConfig {
    INITIAL_CONFIG
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .unwrap_or_default()
}

/// Widget configuration — set once at startup
pub static CONFIG: GlobalSignal<WidgetConfig> = Signal::global(initial_config);

/// Input text, loading flag, header and grid
pub static WIDGET: GlobalSignal<WidgetState> = Signal::global(WidgetState::new);

/// HTTP transport, built on the first search
pub static TRANSPORT: GlobalSignal<Option<HttpTransport>> = Signal::global(|| None);
