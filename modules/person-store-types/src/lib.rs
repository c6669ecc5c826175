//! Shared types for the person store service and its HTTP clients.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =====================================================
// Domain Types
// =====================================================

/// One person record as stored and served.
///
/// Keys outside the fixed shape are kept in `extra` and flattened back
/// into the JSON object on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub graduation_year: Option<i64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Record-shaped payload for create and update, every field optional.
///
/// For the nullable fields the outer `Option` tells whether the key was
/// sent at all, the inner one whether it was `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonPatch {
    /// Accepted so it does not end up in `extra`; the path id always wins.
    #[serde(default, skip_serializing)]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub graduation_year: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub address: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub city: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub zip: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub country: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub avatar: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonPatch {
    /// Builder-style start for a patch carrying both names.
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Default::default()
        }
    }

    /// True when both `first_name` and `last_name` are present and non-empty.
    pub fn has_required_names(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.first_name) && filled(&self.last_name)
    }
}

// =====================================================
// Response Types
// =====================================================

/// `{"message": "..."}` body used for confirmations and every error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountResponse {
    #[serde(rename = "data count")]
    pub data_count: usize,
}

// =====================================================
// Service Status
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
    pub record_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let patch: PersonPatch = serde_json::from_value(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "city": null
        }))
        .unwrap();

        assert_eq!(patch.city, Some(None));
        assert_eq!(patch.zip, None);
        assert!(patch.extra.is_empty());
    }

    #[test]
    fn test_patch_keeps_unknown_keys_and_swallows_id() {
        let patch: PersonPatch = serde_json::from_value(json!({
            "id": "ignored",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "nickname": "Countess"
        }))
        .unwrap();

        assert_eq!(patch.extra.get("nickname"), Some(&json!("Countess")));
        assert!(!patch.extra.contains_key("id"));
    }

    #[test]
    fn test_required_names() {
        assert!(PersonPatch::named("Ada", "Lovelace").has_required_names());
        assert!(!PersonPatch::named("", "Lovelace").has_required_names());
        assert!(!PersonPatch::named("Ada", "").has_required_names());
        assert!(!PersonPatch::default().has_required_names());
    }

    #[test]
    fn test_person_serializes_full_shape_with_extras() {
        let mut extra = Map::new();
        extra.insert("nickname".to_string(), json!("Countess"));
        let person = Person {
            id: "p1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            graduation_year: None,
            address: None,
            city: Some("London".to_string()),
            zip: None,
            country: None,
            avatar: None,
            extra,
        };

        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["id"], json!("p1"));
        assert_eq!(value["graduation_year"], Value::Null);
        assert_eq!(value["city"], json!("London"));
        assert_eq!(value["nickname"], json!("Countess"));
    }

    #[test]
    fn test_count_response_key() {
        let value = serde_json::to_value(CountResponse { data_count: 5 }).unwrap();
        assert_eq!(value, json!({ "data count": 5 }));
    }
}
