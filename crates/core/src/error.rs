//! Error types for Vitrine.

use std::path::PathBuf;
use thiserror::Error;

/// Text shown in place of results whenever a search cannot be completed.
pub const CONNECTION_ERROR_MESSAGE: &str = "Erreur de connexion au serveur.";

/// A search request that did not produce a product list.
///
/// The variants exist for diagnostics only. Every one of them is presented to
/// the user as the same connection error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// The endpoint could not be turned into a URL
    #[error("Invalid search endpoint: {0}")]
    InvalidEndpoint(String),
    /// The request never got a response (DNS, refused, timeout, CORS, ...)
    #[error("Request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("Server answered with status {0}")]
    Status(u16),
    /// The body was not a JSON array of products
    #[error("Malformed search response: {0}")]
    Decode(String),
}

impl ConnectionError {
    /// Localized message rendered in the results area.
    pub fn user_message(&self) -> &'static str {
        CONNECTION_ERROR_MESSAGE
    }
}

/// Errors raised when an explicitly requested config file cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
