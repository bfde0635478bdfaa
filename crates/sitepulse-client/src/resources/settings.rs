use std::sync::Arc;

use reqwest::Method;

use sitepulse_types::SiteSettings;

use crate::error::Result;
use crate::transport::Transport;

pub struct SettingsApi {
    transport: Arc<Transport>,
}

impl SettingsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self) -> Result<SiteSettings> {
        let builder = self.transport.request(Method::GET, "/settings");
        self.transport.send_enveloped("/settings", builder).await
    }

    /// Settings are replaced wholesale, never patched field by field.
    pub async fn update(&self, settings: &SiteSettings) -> Result<SiteSettings> {
        let builder = self
            .transport
            .request(Method::PUT, "/settings")
            .json(settings);
        self.transport.send_enveloped("/settings", builder).await
    }
}
