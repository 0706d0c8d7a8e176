//! Core types shared across Vitrine: user queries, product records returned by
//! the search backend, and the JSON request body.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A search query that has been trimmed and is known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Trim `raw` and wrap it. Empty and whitespace-only input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Body of `POST /search`.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

impl<'a> SearchRequest<'a> {
    pub fn new(query: &'a Query) -> Self {
        Self { query: query.as_str() }
    }
}

/// A product record as returned by the backend. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    /// Pre-formatted display price, e.g. `"50000 DA"`.
    pub price: String,
    /// Image URL. May be broken or blank; hosts fall back to a placeholder.
    #[serde(default, deserialize_with = "deserialize_image")]
    pub image: String,
    /// Match percentage in `0..=100`.
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Products without a scraped image come through as `null`.
fn deserialize_image<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Scores arrive as integers, but some backends emit `92.0`. Both are
/// accepted and clamped to a percentage.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Int(i64),
        Float(f64),
    }

    let pct = match RawScore::deserialize(deserializer)? {
        RawScore::Int(n) => n.clamp(0, 100),
        RawScore::Float(f) if f.is_finite() => (f.round() as i64).clamp(0, 100),
        RawScore::Float(_) => 0,
    };
    Ok(pct as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let q = Query::parse("  samsung galaxy \n").unwrap();
        assert_eq!(q.as_str(), "samsung galaxy");
    }

    #[test]
    fn blank_queries_are_rejected() {
        assert!(Query::parse("").is_none());
        assert!(Query::parse("   ").is_none());
        assert!(Query::parse("\t\n").is_none());
    }

    #[test]
    fn request_body_shape() {
        let q = Query::parse("phone").unwrap();
        let body = serde_json::to_value(SearchRequest::new(&q)).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "phone" }));
    }

    #[test]
    fn product_without_description() {
        let raw = r#"{"name":"Galaxy","category":"Phones","price":"50000 DA","image":"http://x/img.png","score":92}"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.name, "Galaxy");
        assert_eq!(p.score, 92);
        assert_eq!(p.description, None);
    }

    #[test]
    fn float_scores_are_rounded_and_clamped() {
        let parse = |score: &str| -> u8 {
            let raw = format!(
                r#"{{"name":"n","category":"c","price":"p","image":"i","score":{score}}}"#
            );
            serde_json::from_str::<Product>(&raw).unwrap().score
        };
        assert_eq!(parse("91.6"), 92);
        assert_eq!(parse("140"), 100);
        assert_eq!(parse("-3"), 0);
    }

    #[test]
    fn null_or_missing_image_becomes_blank() {
        let raw = r#"{"name":"n","category":"c","price":"p","image":null,"score":40}"#;
        assert_eq!(serde_json::from_str::<Product>(raw).unwrap().image, "");
        let raw = r#"{"name":"n","category":"c","price":"p","score":40}"#;
        assert_eq!(serde_json::from_str::<Product>(raw).unwrap().image, "");
    }

    #[test]
    fn missing_score_is_an_error() {
        let raw = r#"{"name":"n","category":"c","price":"p","image":"i"}"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());
    }
}
