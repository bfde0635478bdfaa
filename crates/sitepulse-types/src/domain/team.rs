use serde::{Deserialize, Serialize};

/// A team member card on the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub display_order: u32,
}

/// Editable fields for a team member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMemberDraft {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub display_order: u32,
}

/// A customer quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u64,
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub published: bool,
}

/// Editable fields for a testimonial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialDraft {
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub published: bool,
}
