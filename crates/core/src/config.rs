//! Widget configuration: defaults merged with overrides from `.vitrine.toml`.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ConfigError;

/// Name of the per-project config file.
pub const CONFIG_FILE_NAME: &str = ".vitrine.toml";

pub const DEFAULT_ENDPOINT: &str = "/search";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200x200?text=Djezzy";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SUGGESTIONS: &[&str] =
    &["Modem Wifi", "Routeur D-Link", "Tablette", "Kitman Hoco", "ZTE Blade", "Cable Type-C"];

/// Known keys in `.vitrine.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] =
    &["endpoint", "base_url", "placeholder_image", "suggestions", "timeout_secs"];

/// Runtime configuration shared by every host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Search URL. Relative values are resolved against the page origin or `base_url`.
    pub endpoint: String,
    /// Origin used by native hosts to resolve a relative `endpoint`.
    pub base_url: String,
    /// Image shown when a product image fails to load.
    pub placeholder_image: String,
    /// Preset queries offered as one-click chips.
    pub suggestions: Vec<String>,
    /// Request timeout for native hosts. Browsers use their own.
    pub timeout_secs: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl WidgetConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse TOML text and merge it over the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let table = content.parse::<toml::Table>()?;
        let mut config = Self::default();
        config.apply_table(&table);
        Ok(config)
    }

    /// Load an explicitly named config file. Missing or unparsable files are errors.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Load `.vitrine.toml` from `dir` if present.
    ///
    /// A missing file yields defaults silently; an unreadable or unparsable one
    /// yields defaults with a warning.
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Self::default();
        }

        debug!(path = %config_path.display(), "Loading {CONFIG_FILE_NAME}");
        match Self::load_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Apply overrides from a parsed table. Invalid values keep the current setting.
    pub fn apply_table(&mut self, table: &toml::Table) {
        warn_unknown_keys(table);

        if let Some(value) = table.get("endpoint") {
            match value.as_str().map(str::trim) {
                Some(s) if !s.is_empty() => self.endpoint = s.to_string(),
                _ => warn!("endpoint must be a non-empty string"),
            }
        }

        if let Some(value) = table.get("base_url") {
            match value.as_str().map(str::trim) {
                Some(s) if !s.is_empty() => self.base_url = s.to_string(),
                _ => warn!("base_url must be a non-empty string"),
            }
        }

        if let Some(value) = table.get("placeholder_image") {
            match value.as_str() {
                Some(s) => self.placeholder_image = s.to_string(),
                None => warn!("placeholder_image must be a string"),
            }
        }

        if let Some(value) = table.get("suggestions") {
            match value.as_array() {
                Some(items) => {
                    self.suggestions = items
                        .iter()
                        .filter_map(|v| v.as_str())
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(|s| s.to_string())
                        .collect();
                }
                None => warn!("suggestions must be an array of strings"),
            }
        }

        if let Some(value) = table.get("timeout_secs") {
            match value.as_integer() {
                Some(n) if n > 0 => self.timeout_secs = n as u64,
                _ => warn!("timeout_secs must be a positive integer"),
            }
        }
    }
}

/// Warn about keys we don't recognise, suggesting the closest known key.
fn warn_unknown_keys(table: &toml::Table) {
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
        match suggestion {
            Some(s) if edit_distance(key, s) <= 3 => {
                warn!(
                    key = key.as_str(),
                    suggestion = *s,
                    "Unknown key in {CONFIG_FILE_NAME} — did you mean '{s}'?"
                );
            }
            _ => {
                warn!(
                    key = key.as_str(),
                    "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                );
            }
        }
    }
}

/// Levenshtein distance, used for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
