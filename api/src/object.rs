//! Defines the MWDB objects displayed by the UI.

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identifier of an MWDB object (its SHA256 for files, a content hash otherwise).
///
/// The UI never looks inside it, it is only passed back to the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The kinds of object MWDB stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIs)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    File,
    StaticConfig,
    TextBlob,
}

impl ObjectType {
    /// Human readable name, used as the title of the object view.
    pub fn title(&self) -> &'static str {
        match self {
            Self::File => "File",
            Self::StaticConfig => "Config",
            Self::TextBlob => "Blob",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub tag: String,
}

/// The subset of an object's details the object view works with.
///
/// `favorite` is computed by the server for the user owning the API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub upload_time: DateTime<Utc>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_summary_from_file_response() {
        let value = json!({
            "id": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            "type": "file",
            "upload_time": "2021-03-04T10:11:12.123456+00:00",
            "favorite": true,
            "tags": [{"tag": "feed:malwarebazaar"}, {"tag": "emotet"}],
            "file_name": "sample.exe",
            "file_size": 1024,
            "parents": [],
        });

        let object: ObjectSummary = serde_json::from_value(value).unwrap();

        assert_eq!(
            object.id.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert!(object.object_type.is_file());
        assert!(object.favorite);
        assert_eq!(object.tags.len(), 2);
        assert_eq!(object.tags[1].tag, "emotet");
        assert_eq!(object.file_name.as_deref(), Some("sample.exe"));
    }

    #[test]
    fn favorite_and_tags_default_when_absent() {
        let value = json!({
            "id": "42",
            "type": "text_blob",
            "upload_time": "2021-03-04T10:11:12Z",
        });

        let object: ObjectSummary = serde_json::from_value(value).unwrap();

        assert!(!object.favorite);
        assert!(object.tags.is_empty());
        assert_eq!(object.file_name, None);
        assert_eq!(object.object_type.title(), "Blob");
    }

    #[test]
    fn object_type_names_match_the_wire_format() {
        let parsed: ObjectType = serde_json::from_value(json!("static_config")).unwrap();
        assert_eq!(parsed, ObjectType::StaticConfig);
        assert_eq!(serde_json::to_value(ObjectType::TextBlob).unwrap(), json!("text_blob"));
        assert!(serde_json::from_value::<ObjectType>(json!("StaticConfig")).is_err());
    }

    #[test]
    fn object_id_is_transparent() {
        let id: ObjectId = serde_json::from_value(json!("abc")).unwrap();
        assert_eq!(id, ObjectId::from("abc"));
        assert_eq!(id.to_string(), "abc");
    }
}
