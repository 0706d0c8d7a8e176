//! Vitrine — product search front end.
//!
//! This crate holds everything that does not depend on a particular UI host:
//! the wire types exchanged with the `/search` backend, the HTTP transport,
//! the widget state machine that sequences searches, and the presentation
//! models used to draw product cards.
//!
//! # Modules
//!
//! - [`types`] — Query and product records, search request body
//! - [`error`] — Connection and config errors
//! - [`config`] — `.vitrine.toml` loading with defaults
//! - [`client`] — [`SearchTransport`] trait and its reqwest-backed implementation
//! - [`widget`] — Widget state, request sequencing, and the [`SearchWidget`] driver
//! - [`render`] — Card view models and localized labels

pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod types;
pub mod widget;

pub use client::{HttpTransport, SearchTransport};
pub use config::WidgetConfig;
pub use error::{ConfigError, ConnectionError};
pub use types::{Product, Query};
pub use widget::{SearchWidget, UiState, WidgetState};
