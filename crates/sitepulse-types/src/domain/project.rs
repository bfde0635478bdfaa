use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::raw_list::normalized_list;
use super::PublishStatus;

/// A portfolio project.
///
/// `technologies` and `gallery` are loosely-typed on the wire and resolved
/// to canonical lists at ingress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields for creating or replacing a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_tolerates_malformed_technology_array() {
        let body = r#"{
            "id": 7,
            "slug": "shop-rebuild",
            "title": "Shop Rebuild",
            "description": "Storefront relaunch",
            "category": "ecommerce",
            "technologies": "[\"React\"\"Node.js\"]",
            "gallery": "a.jpg, b.jpg",
            "featured": true,
            "created_at": "2025-02-01T00:00:00Z",
            "updated_at": "2025-02-02T00:00:00Z"
        }"#;

        let project: Project = serde_json::from_str(body).unwrap();
        assert_eq!(project.technologies, vec!["React", "Node.js"]);
        assert_eq!(project.gallery, vec!["a.jpg", "b.jpg"]);
        assert!(project.featured);
    }
}
