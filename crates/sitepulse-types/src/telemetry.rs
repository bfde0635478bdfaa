use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default user-agent pattern used to call a visit mobile.
///
/// An approximation by design: the collector wants a coarse device split,
/// not exact hardware detection. Override via `DeviceType::classify_with`
/// when a different heuristic is needed.
pub const DEFAULT_MOBILE_PATTERN: &str =
    r"(?i)mobile|android|iphone|ipad|ipod|blackberry|iemobile|opera mini";

static DEFAULT_MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_MOBILE_PATTERN).expect("default mobile pattern is valid"));

/// Coarse browser family reported to the collector.
///
/// Serialized capitalized to match the collector contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Browser {
    Chrome,
    Firefox,
    Other,
}

impl Browser {
    /// Coarse classification by user-agent substring.
    ///
    /// Chromium derivatives (Edge, Opera, Brave) all carry "Chrome" and are
    /// intentionally counted as Chrome.
    pub fn classify(user_agent: &str) -> Self {
        if user_agent.contains("Firefox") {
            Browser::Firefox
        } else if user_agent.contains("Chrome") {
            Browser::Chrome
        } else {
            Browser::Other
        }
    }
}

/// Coarse device class reported to the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    Mobile,
    Desktop,
}

impl DeviceType {
    pub fn classify(user_agent: &str) -> Self {
        Self::classify_with(&DEFAULT_MOBILE_RE, user_agent)
    }

    pub fn classify_with(mobile_pattern: &Regex, user_agent: &str) -> Self {
        if mobile_pattern.is_match(user_agent) {
            DeviceType::Mobile
        } else {
            DeviceType::Desktop
        }
    }
}

/// One qualifying route change, sent to the collector and then forgotten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEvent {
    pub session_id: String,
    pub landing_page: String,
    pub current_page: String,
    pub referrer: String,
    pub browser: Browser,
    pub device_type: DeviceType,
}

/// Page-load timing sample, same fire-and-forget lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEvent {
    pub page_url: String,
    pub page_title: String,
    pub load_time: f64,
    pub dom_content_loaded: f64,
    pub ttfb: f64,
    pub user_agent: String,
}

/// Caller-observed context for a navigation, before classification.
#[derive(Debug, Clone, Default)]
pub struct PageVisit {
    /// Referrer as observed by the caller; `None` becomes "direct".
    pub referrer: Option<String>,
    pub user_agent: String,
}

impl PageVisit {
    pub fn referrer_or_direct(&self) -> String {
        match self.referrer.as_deref() {
            Some(r) if !r.trim().is_empty() => r.to_string(),
            _ => "direct".to_string(),
        }
    }
}

/// Caller-observed page-load timings (millisecond values).
#[derive(Debug, Clone, Default)]
pub struct PageTiming {
    pub page_url: String,
    pub page_title: String,
    pub load_time: f64,
    pub dom_content_loaded: f64,
    pub ttfb: f64,
    pub user_agent: String,
}

impl PageTiming {
    pub fn to_event(&self) -> PerformanceEvent {
        PerformanceEvent {
            page_url: self.page_url.clone(),
            page_title: self.page_title.clone(),
            load_time: self.load_time,
            dom_content_loaded: self.dom_content_loaded,
            ttfb: self.ttfb,
            user_agent: self.user_agent.clone(),
        }
    }
}
