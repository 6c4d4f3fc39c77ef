//! Raw session record as supplied by the schedule data source.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionGenError};

/// Keys every session record must carry.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "title",
    "name",
    "abstract",
    "bio",
    "starts_at",
    "ends_at",
    "category",
    "room",
];

/// One conference talk, exactly as the data source describes it.
///
/// Values are kept verbatim; all normalization happens in
/// [`SessionPresenter`](super::SessionPresenter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub title: String,
    /// Speaker name
    pub name: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub bio: String,
    /// ISO-8601 UTC timestamp, e.g. `2012-04-23T17:30:00Z`
    pub starts_at: String,
    /// ISO-8601 UTC timestamp
    pub ends_at: String,
    pub category: String,
    pub room: String,
}

impl SessionRecord {
    /// Builds a record from a string map, failing on the first missing key.
    ///
    /// Keys outside [`REQUIRED_FIELDS`] are ignored.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self> {
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|key| !map.contains_key(**key)) {
            return Err(SessionGenError::missing_field(*missing));
        }

        let field = |key: &str| map.get(key).cloned().unwrap_or_default();

        Ok(Self {
            title: field("title"),
            name: field("name"),
            abstract_text: field("abstract"),
            bio: field("bio"),
            starts_at: field("starts_at"),
            ends_at: field("ends_at"),
            category: field("category"),
            room: field("room"),
        })
    }

    /// Parses the JSON object form of a record.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<&HashMap<String, String>> for SessionRecord {
    type Error = SessionGenError;

    fn try_from(map: &HashMap<String, String>) -> Result<Self> {
        Self::from_map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_map() -> HashMap<String, String> {
        REQUIRED_FIELDS
            .iter()
            .map(|key| (key.to_string(), format!("{} value", key)))
            .collect()
    }

    #[test]
    fn test_from_map_copies_every_field() {
        let record = SessionRecord::from_map(&full_map()).unwrap();
        assert_eq!(record.title, "title value");
        assert_eq!(record.abstract_text, "abstract value");
        assert_eq!(record.room, "room value");
    }

    #[test]
    fn test_from_map_reports_missing_key() {
        let mut map = full_map();
        map.remove("ends_at");

        let err = SessionRecord::try_from(&map).unwrap_err();
        assert_eq!(err, SessionGenError::missing_field("ends_at"));
    }

    #[test]
    fn test_from_map_accepts_empty_values() {
        let mut map = full_map();
        map.insert("title".to_string(), String::new());

        let record = SessionRecord::from_map(&map).unwrap();
        assert_eq!(record.title, "");
    }

    #[test]
    fn test_from_json_str_uses_abstract_key() {
        let json = r#"{
            "title": "Rich Hickey",
            "name": "Rich Hickey",
            "abstract": "Clojure",
            "bio": "Developer",
            "starts_at": "2012-04-23T17:30:00Z",
            "ends_at": "2012-04-23T18:00:00Z",
            "category": "keynote",
            "room": "Salon HJK"
        }"#;

        let record = SessionRecord::from_json_str(json).unwrap();
        assert_eq!(record.abstract_text, "Clojure");
        assert_eq!(record.category, "keynote");
    }

    #[test]
    fn test_from_json_str_missing_key_is_serialization_error() {
        let err = SessionRecord::from_json_str(r#"{"title": "Only a title"}"#).unwrap_err();
        assert!(err.is_serialization());
    }
}
