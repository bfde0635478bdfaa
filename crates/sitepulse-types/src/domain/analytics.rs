use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::telemetry::{Browser, DeviceType};

/// One stitched visitor session as reported by the analytics endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorSession {
    pub session_id: String,
    pub landing_page: String,
    pub browser: Browser,
    pub device_type: DeviceType,
    pub page_count: u64,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

/// Aggregated view counts for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageViewRow {
    pub page: String,
    pub views: u64,
    pub unique_sessions: u64,
}

/// Mobile/desktop share of sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceSplit {
    pub mobile: u64,
    pub desktop: u64,
}

/// Headline analytics for the admin viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_sessions: u64,
    pub total_page_views: u64,
    pub device_split: DeviceSplit,
    #[serde(default)]
    pub top_pages: Vec<PageViewRow>,
}

/// Counters for the admin dashboard landing view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub services: u64,
    pub projects: u64,
    pub posts: u64,
    pub team_members: u64,
    pub testimonials: u64,
    pub unread_contacts: u64,
    pub sessions_last_30_days: u64,
}
