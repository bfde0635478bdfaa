use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::raw_list::normalized_list;
use super::PublishStatus;

/// A service offering as published on the public site.
///
/// `features` is one of the loosely-typed fields: the backend may return a
/// native array, a JSON-encoded string, or a comma separated string. It is
/// resolved to the canonical list during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub display_order: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields for creating or replacing a service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub display_order: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_features_normalize_from_any_shape() {
        let body = r#"{
            "id": 1,
            "slug": "web-development",
            "title": "Web Development",
            "description": "Sites and apps",
            "features": "[\"SSR\",\"CMS integration\"]",
            "status": "published",
            "created_at": "2025-01-10T08:00:00Z",
            "updated_at": "2025-01-11T08:00:00Z"
        }"#;

        let service: Service = serde_json::from_str(body).unwrap();
        assert_eq!(service.features, vec!["SSR", "CMS integration"]);
        assert_eq!(service.status, PublishStatus::Published);
        assert_eq!(service.display_order, 0);
    }
}
