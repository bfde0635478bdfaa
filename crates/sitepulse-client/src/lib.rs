pub mod auth;
pub mod config;
pub mod error;
pub mod resources;
pub mod tracker;
pub mod transport;

pub use auth::{PrefixPolicy, UnauthorizedAction, UnauthorizedPolicy};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use tracker::{TrackOutcome, Tracker, TrackerConfig};

use std::sync::Arc;

use sitepulse_core::KeyStore;

use resources::{
    AnalyticsApi, ContactsApi, DashboardApi, MediaApi, PostsApi, ProjectsApi, ServicesApi,
    SettingsApi, TeamApi, TestimonialsApi,
};
use tracker::HttpCollector;
use transport::Transport;

/// Entry point: one shared transport, scoped resource services on demand.
///
/// `context_path` is the logical route the caller operates from; it drives
/// the unauthorized policy (admin surfaces keep their credentials and get
/// the raw error, public surfaces are redirected to login).
pub struct Client {
    transport: Arc<Transport>,
    config: ClientConfig,
    store: Arc<dyn KeyStore>,
}

impl Client {
    /// Connect with the public-surface context ("/").
    pub fn connect(config: ClientConfig, store: Arc<dyn KeyStore>) -> Result<Self> {
        Self::connect_at(config, store, "/")
    }

    /// Connect with an explicit surface context, e.g. "/admin/dashboard".
    pub fn connect_at(
        config: ClientConfig,
        store: Arc<dyn KeyStore>,
        context_path: &str,
    ) -> Result<Self> {
        let policy = Arc::new(PrefixPolicy::new(config.admin_prefix.clone()));
        let transport = Transport::new(&config, store.clone(), policy, context_path)?;

        Ok(Self {
            transport: Arc::new(transport),
            config,
            store,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn services(&self) -> ServicesApi {
        ServicesApi::new(self.transport.clone())
    }

    pub fn projects(&self) -> ProjectsApi {
        ProjectsApi::new(self.transport.clone())
    }

    pub fn posts(&self) -> PostsApi {
        PostsApi::new(self.transport.clone())
    }

    pub fn team(&self) -> TeamApi {
        TeamApi::new(self.transport.clone())
    }

    pub fn testimonials(&self) -> TestimonialsApi {
        TestimonialsApi::new(self.transport.clone())
    }

    pub fn media(&self) -> MediaApi {
        MediaApi::new(self.transport.clone())
    }

    pub fn contacts(&self) -> ContactsApi {
        ContactsApi::new(self.transport.clone())
    }

    pub fn settings(&self) -> SettingsApi {
        SettingsApi::new(self.transport.clone())
    }

    pub fn analytics(&self) -> AnalyticsApi {
        AnalyticsApi::new(self.transport.clone())
    }

    pub fn dashboard(&self) -> DashboardApi {
        DashboardApi::new(self.transport.clone())
    }

    /// Build the tracker for this client's configuration and store.
    pub fn tracker(&self) -> Result<Tracker<HttpCollector>> {
        Tracker::from_config(&self.config, self.store.clone())
    }
}
