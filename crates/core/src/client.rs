//! Transport to the search backend.
//!
//! [`SearchTransport`] is the seam between the widget and the network, so the
//! widget can be driven by a stub in tests. [`HttpTransport`] is the real thing:
//! a reqwest client posting `{"query": ...}` as JSON. reqwest uses hyper on
//! native targets and the browser `fetch()` API on wasm32.

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::config::WidgetConfig;
use crate::error::ConnectionError;
use crate::types::{Product, Query, SearchRequest};

/// Something that can answer a product search.
#[allow(async_fn_in_trait)]
pub trait SearchTransport {
    async fn search(&self, query: &Query) -> Result<Vec<Product>, ConnectionError>;
}

/// Resolve `endpoint` against `origin` unless it is already absolute.
pub fn resolve_endpoint(endpoint: &str, origin: &str) -> Result<Url, ConnectionError> {
    match Url::parse(endpoint) {
        Ok(url) => Ok(url),
        Err(_) => Url::parse(origin)
            .and_then(|base| base.join(endpoint))
            .map_err(|e| ConnectionError::InvalidEndpoint(format!("{endpoint} (origin {origin}): {e}"))),
    }
}

/// `POST`s queries to a fixed endpoint and decodes the JSON product array.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Build a transport for `endpoint`. `timeout` is ignored on wasm32, where
    /// the browser owns request lifetimes.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, ConnectionError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = {
            let builder = builder.user_agent(concat!("vitrine/", env!("CARGO_PKG_VERSION")));
            match timeout {
                Some(t) => builder.timeout(t),
                None => builder,
            }
        };
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder
            .build()
            .map_err(|e| ConnectionError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, endpoint })
    }

    /// Build a transport from config, resolving a relative endpoint against `origin`.
    pub fn from_config(config: &WidgetConfig, origin: &str) -> Result<Self, ConnectionError> {
        let endpoint = resolve_endpoint(&config.endpoint, origin)?;
        Self::new(endpoint, Some(config.timeout()))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SearchTransport for HttpTransport {
    async fn search(&self, query: &Query) -> Result<Vec<Product>, ConnectionError> {
        debug!(endpoint = %self.endpoint, query = query.as_str(), "POST search");

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SearchRequest::new(query))
            .send()
            .await
            .map_err(|e| ConnectionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConnectionError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ConnectionError::Transport(e.to_string()))?;

        serde_json::from_slice::<Vec<Product>>(&body)
            .map_err(|e| ConnectionError::Decode(e.to_string()))
    }
}
