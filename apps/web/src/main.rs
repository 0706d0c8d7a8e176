//! Vitrine — Dioxus-powered product search widget.

use std::sync::Mutex;

use dioxus::prelude::*;
use vitrine_core::WidgetConfig;

mod app;
mod search;
mod state;

use app::App;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first read of `CONFIG`.
pub static INITIAL_CONFIG: Mutex<Option<WidgetConfig>> = Mutex::new(None);

/// Read `.vitrine.toml` from the working directory. Browsers have none.
fn load_config() -> WidgetConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(cwd) = std::env::current_dir() {
            return WidgetConfig::load_from_dir(&cwd);
        }
    }
    WidgetConfig::default()
}

fn main() {
    #[cfg(feature = "desktop")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vitrine=info")),
            )
            .with_target(false)
            .init();
    }

    // Browser console logging
    #[cfg(not(feature = "desktop"))]
    {
        if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
            eprintln!("logger failed to init: {e}");
        }
    }

    if let Ok(mut slot) = INITIAL_CONFIG.lock() {
        *slot = Some(load_config());
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((240, 242, 245, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Vitrine")
                            .with_inner_size(LogicalSize::new(1100.0, 850.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 600.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
