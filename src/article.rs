use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A single news article as delivered by the feed.
///
/// Only `title` and `description` are read by the summary pipeline. The
/// remaining fields are carried through untouched for list rendering, and
/// anything the feed sends that we don't model lands in `extra` so the record
/// can be re-serialized without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, rename = "pubDate", skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArticleRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Title text, empty when the feed omitted it.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Description text, empty when the feed omitted it.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Parses records from either a bare JSON array or a saved API page with a
/// `results` array.
pub fn records_from_json_str(json: &str) -> Result<Vec<ArticleRecord>> {
    let value: Value = serde_json::from_str(json).context("Invalid JSON")?;
    let records = match value {
        Value::Array(_) => value,
        Value::Object(mut object) => match object.remove("results") {
            Some(results @ Value::Array(_)) => results,
            Some(Value::Null) | None => Value::Array(Vec::new()),
            Some(other) => bail!("Expected `results` to be an array, found {}", other),
        },
        other => bail!("Expected an array of articles, found {}", other),
    };
    serde_json::from_value(records).context("Malformed article record")
}

pub fn load_records(path: &Path) -> Result<Vec<ArticleRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    records_from_json_str(&json).with_context(|| format!("Failed to load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_read_as_empty() {
        let record: ArticleRecord = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(record.title(), "");
        assert_eq!(record.description(), "");
    }

    #[test]
    fn test_passthrough_fields_survive() {
        let raw = r#"{
            "title": "Storm hits coast",
            "link": "https://example.com/storm",
            "source_id": "wire",
            "pubDate": "2025-01-02 03:04:05",
            "country": ["us"]
        }"#;
        let record: ArticleRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.pub_date.as_deref(), Some("2025-01-02 03:04:05"));
        assert_eq!(record.extra.get("country"), Some(&serde_json::json!(["us"])));

        let round: Value = serde_json::to_value(&record).unwrap();
        assert_eq!(round["pubDate"], "2025-01-02 03:04:05");
        assert_eq!(round["country"], serde_json::json!(["us"]));
    }

    #[test]
    fn test_records_from_array_or_page() {
        let array = records_from_json_str(r#"[{"title": "A"}, {"description": "only"}]"#).unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[1].title(), "");

        let page = records_from_json_str(
            r#"{"status": "success", "results": [{"title": "B"}], "nextPage": null}"#,
        )
        .unwrap();
        assert_eq!(page[0].title(), "B");

        assert!(records_from_json_str(r#"{"status": "success"}"#).unwrap().is_empty());
        assert!(records_from_json_str(r#""just a string""#).is_err());
        assert!(records_from_json_str(r#"{"results": {"message": "bad key"}}"#).is_err());
    }
}
