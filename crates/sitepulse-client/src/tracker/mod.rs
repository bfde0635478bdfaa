// Navigation and performance tracking. Strictly best-effort: nothing in
// here may block a caller or surface a network failure.

mod debounce;
mod identity;
mod sink;

pub use identity::SessionIdentity;
pub use sink::{EventSink, HttpCollector, RecordingSink};

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use sitepulse_core::{Clock, IdSource, KeyStore, SystemClock, UuidSource};
use sitepulse_types::{
    Browser, DEFAULT_MOBILE_PATTERN, DeviceType, NavigationEvent, PageTiming, PageVisit,
};

use crate::config::ClientConfig;
use crate::error::Result;

use debounce::DebounceState;

static DEFAULT_MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_MOBILE_PATTERN).expect("default mobile pattern is valid"));

/// Tracker knobs. The defaults mirror the collector's expectations; both
/// the window and the device heuristic are approximations, not semantics.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub admin_prefix: String,
    pub debounce_window_ms: u64,
    /// Regex overriding the default mobile user-agent heuristic.
    pub mobile_pattern: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            admin_prefix: "/admin".to_string(),
            debounce_window_ms: 5_000,
            mobile_pattern: None,
        }
    }
}

impl From<&ClientConfig> for TrackerConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            admin_prefix: config.admin_prefix.clone(),
            debounce_window_ms: config.debounce_window_ms,
            mobile_pattern: config.mobile_pattern.clone(),
        }
    }
}

/// What the tracker did with one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    /// Event built and handed to the sink (send failures are contained).
    Sent,
    /// Path is under the admin prefix; nothing happened.
    SkippedAdmin,
    /// Same path re-fired inside the debounce window.
    SkippedDuplicate,
    /// No collector configured; tracking is off.
    Disabled,
}

/// Observes route changes and emits collector events.
///
/// All state is owned by the instance: identity reads go through the
/// injected store, time through the injected clock, and the debounce
/// record lives inside the tracker. Two trackers never interfere.
pub struct Tracker<S> {
    sink: Option<S>,
    identity: SessionIdentity,
    clock: Arc<dyn Clock>,
    debounce: DebounceState,
    admin_prefix: String,
    window_ms: u64,
    mobile_re: Regex,
}

impl Tracker<HttpCollector> {
    /// Build the production tracker. A missing collector base disables
    /// tracking rather than producing failing requests.
    pub fn from_config(config: &ClientConfig, store: Arc<dyn KeyStore>) -> Result<Self> {
        let sink = match config.collector_base.as_deref() {
            Some(base) => Some(HttpCollector::new(base, config.timeout_secs)?),
            None => None,
        };

        Ok(Self::with_parts(
            sink,
            store,
            Arc::new(SystemClock),
            Arc::new(UuidSource),
            TrackerConfig::from(config),
        ))
    }
}

impl<S: EventSink> Tracker<S> {
    pub fn with_parts(
        sink: Option<S>,
        store: Arc<dyn KeyStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdSource>,
        config: TrackerConfig,
    ) -> Self {
        let mobile_re = match config.mobile_pattern.as_deref() {
            Some(pattern) => match Regex::new(pattern) {
                Ok(re) => re,
                Err(e) => {
                    warn!(pattern, error = %e, "invalid mobile pattern, using default");
                    DEFAULT_MOBILE_RE.clone()
                }
            },
            None => DEFAULT_MOBILE_RE.clone(),
        };

        Self {
            sink,
            identity: SessionIdentity::new(store, ids),
            clock,
            debounce: DebounceState::new(),
            admin_prefix: config.admin_prefix,
            window_ms: config.debounce_window_ms,
            mobile_re,
        }
    }

    /// Report a route change.
    ///
    /// The admin check runs first and short-circuits everything else for
    /// that path. Duplicates inside the window are dropped silently with
    /// no state change. A qualifying change resolves identity, builds the
    /// payload, records the debounce state, and fires the sink; sink
    /// failures are logged and swallowed.
    pub async fn track_navigation(&self, path: &str, visit: &PageVisit) -> TrackOutcome {
        if self.is_admin_path(path) {
            return TrackOutcome::SkippedAdmin;
        }
        let Some(sink) = self.sink.as_ref() else {
            return TrackOutcome::Disabled;
        };

        let now = self.clock.now_millis();
        if self.debounce.is_duplicate(path, now, self.window_ms) {
            return TrackOutcome::SkippedDuplicate;
        }
        self.debounce.record(path, now);

        let event = NavigationEvent {
            session_id: self.identity.session_id(),
            landing_page: self.identity.landing_page(path),
            current_page: path.to_string(),
            referrer: visit.referrer_or_direct(),
            browser: Browser::classify(&visit.user_agent),
            device_type: DeviceType::classify_with(&self.mobile_re, &visit.user_agent),
        };

        match sink.send_navigation(&event).await {
            Ok(()) => debug!(page = path, "navigation event sent"),
            Err(e) => warn!(page = path, error = %e, "navigation event dropped"),
        }
        TrackOutcome::Sent
    }

    /// Report a page-load timing sample. Same admin and disabled gating as
    /// navigation, no debounce (one sample per load by construction).
    pub async fn track_performance(&self, path: &str, timing: &PageTiming) -> TrackOutcome {
        if self.is_admin_path(path) {
            return TrackOutcome::SkippedAdmin;
        }
        let Some(sink) = self.sink.as_ref() else {
            return TrackOutcome::Disabled;
        };

        let event = timing.to_event();
        match sink.send_performance(&event).await {
            Ok(()) => debug!(page = path, "performance event sent"),
            Err(e) => warn!(page = path, error = %e, "performance event dropped"),
        }
        TrackOutcome::Sent
    }

    /// The sink, when tracking is enabled. Lets harnesses inspect a
    /// recording sink after driving the tracker.
    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    fn is_admin_path(&self, path: &str) -> bool {
        path.starts_with(&self.admin_prefix)
    }
}
