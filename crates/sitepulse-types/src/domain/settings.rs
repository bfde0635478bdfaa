use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Site-wide settings managed from the admin console.
///
/// `social_links` is an open map (platform name to URL) so new networks
/// need no schema change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
}
