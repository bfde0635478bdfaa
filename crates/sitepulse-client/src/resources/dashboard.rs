use std::sync::Arc;

use reqwest::Method;

use sitepulse_types::DashboardStats;

use crate::error::Result;
use crate::transport::Transport;

pub struct DashboardApi {
    transport: Arc<Transport>,
}

impl DashboardApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        let builder = self.transport.request(Method::GET, "/dashboard");
        self.transport.send_enveloped("/dashboard", builder).await
    }
}
