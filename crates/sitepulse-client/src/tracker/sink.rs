use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use sitepulse_types::{NavigationEvent, PerformanceEvent};

use crate::error::{Error, Result};

/// Destination for telemetry events.
///
/// A trait seam so the tracker's decision logic (admin gating, debounce,
/// identity) is exercisable without a network.
pub trait EventSink: Send + Sync {
    fn send_navigation(&self, event: &NavigationEvent)
    -> impl Future<Output = Result<()>> + Send;

    fn send_performance(&self, event: &PerformanceEvent)
    -> impl Future<Output = Result<()>> + Send;
}

/// POSTs events to the configured collector endpoints as JSON.
///
/// No retries and no caller-visible failures: the tracker logs and moves
/// on. Response bodies are never consumed beyond the status line.
pub struct HttpCollector {
    http: reqwest::Client,
    base: String,
}

impl HttpCollector {
    pub fn new(collector_base: &str, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base: collector_base.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<()> {
        let response = self
            .http
            .post(format!("{}{}", self.base, path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                message: "collector rejected event".to_string(),
            });
        }
        Ok(())
    }
}

impl EventSink for HttpCollector {
    async fn send_navigation(&self, event: &NavigationEvent) -> Result<()> {
        self.post_json("/analytics/track", event).await
    }

    async fn send_performance(&self, event: &PerformanceEvent) -> Result<()> {
        self.post_json("/analytics/performance", event).await
    }
}

/// In-memory sink for harnesses: records every event, optionally failing
/// each send to exercise the contained-failure path.
#[derive(Default)]
pub struct RecordingSink {
    navigations: Mutex<Vec<NavigationEvent>>,
    performances: Mutex<Vec<PerformanceEvent>>,
    fail_sends: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    pub fn navigations(&self) -> Vec<NavigationEvent> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn performances(&self) -> Vec<PerformanceEvent> {
        self.performances.lock().unwrap().clone()
    }

    fn outcome(&self) -> Result<()> {
        if self.fail_sends {
            Err(Error::Status {
                status: 503,
                message: "collector unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl EventSink for RecordingSink {
    async fn send_navigation(&self, event: &NavigationEvent) -> Result<()> {
        self.navigations.lock().unwrap().push(event.clone());
        self.outcome()
    }

    async fn send_performance(&self, event: &PerformanceEvent) -> Result<()> {
        self.performances.lock().unwrap().push(event.clone());
        self.outcome()
    }
}
