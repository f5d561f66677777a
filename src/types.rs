//! Core types for search results.

use serde::{Deserialize, Serialize};

/// A single search result in canonical, backend-agnostic shape.
///
/// Produced by the gateway after field-name adaptation and consumed
/// read-only by the formatter. `title`, `url`, and `content` are always
/// present: a record missing them cannot be constructed, so the formatter
/// never has to defend against partial records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page. Not required to be unique.
    pub title: String,
    /// The URL of the result. Deduplication key for the formatter.
    pub url: String,
    /// A short snippet summarising the page content.
    pub content: String,
    /// Full page text, when the backend supplied it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_construction() {
        let result = SearchResult {
            title: "Example".into(),
            url: "https://example.com".into(),
            content: "An example page".into(),
            raw_content: None,
        };
        assert_eq!(result.title, "Example");
        assert_eq!(result.url, "https://example.com");
        assert!(result.raw_content.is_none());
    }

    #[test]
    fn search_result_serde_round_trip() {
        let result = SearchResult {
            title: "Test".into(),
            url: "https://test.com".into(),
            content: "snippet".into(),
            raw_content: Some("full page text".into()),
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: SearchResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, result);
    }

    #[test]
    fn raw_content_defaults_to_none() {
        let json = r#"{"title":"T","url":"https://t.com","content":"c"}"#;
        let decoded: SearchResult = serde_json::from_str(json).expect("deserialize");
        assert!(decoded.raw_content.is_none());
    }

    #[test]
    fn absent_raw_content_not_serialized() {
        let result = SearchResult {
            title: "T".into(),
            url: "https://t.com".into(),
            content: "c".into(),
            raw_content: None,
        };
        let json = serde_json::to_string(&result).expect("serialize");
        assert!(!json.contains("raw_content"));
    }

    #[test]
    fn missing_required_field_rejected() {
        let json = r#"{"title":"T","content":"c"}"#;
        let decoded = serde_json::from_str::<SearchResult>(json);
        assert!(decoded.is_err());
    }
}
