use std::sync::Arc;

use reqwest::Method;

use sitepulse_types::{Paginated, PublishStatus, Service, ServiceDraft};

use crate::error::Result;
use crate::transport::Transport;

use super::{PageFilter, Params};

/// Filters for listing services.
#[derive(Debug, Clone, Default)]
pub struct ServiceQuery {
    paging: PageFilter,
    status: Option<PublishStatus>,
    search: Option<String>,
}

impl ServiceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.paging.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.paging.per_page = Some(per_page);
        self
    }

    pub fn status(mut self, status: PublishStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.paging.push_params(&mut params);
        if let Some(status) = self.status {
            params.push(("status", status.to_string()));
        }
        if let Some(ref search) = self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

pub struct ServicesApi {
    transport: Arc<Transport>,
}

impl ServicesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self, query: ServiceQuery) -> Result<Paginated<Service>> {
        let builder = self
            .transport
            .request(Method::GET, "/services")
            .query(&query.to_params());
        self.transport.send_raw("/services", builder).await
    }

    pub async fn get(&self, slug: &str) -> Result<Service> {
        let route = format!("/services/{}", slug);
        let builder = self.transport.request(Method::GET, &route);
        self.transport.send_enveloped(&route, builder).await
    }

    pub async fn create(&self, draft: &ServiceDraft) -> Result<Service> {
        let builder = self.transport.request(Method::POST, "/services").json(draft);
        self.transport.send_enveloped("/services", builder).await
    }

    pub async fn update(&self, id: u64, draft: &ServiceDraft) -> Result<Service> {
        let route = format!("/services/{}", id);
        let builder = self.transport.request(Method::PUT, &route).json(draft);
        self.transport.send_enveloped(&route, builder).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        let route = format!("/services/{}", id);
        let builder = self.transport.request(Method::DELETE, &route);
        self.transport.send_no_content(&route, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_marshals_only_set_filters() {
        let params = ServiceQuery::new()
            .page(2)
            .status(PublishStatus::Published)
            .to_params();

        assert_eq!(
            params,
            vec![
                ("page", "2".to_string()),
                ("status", "published".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_query_marshals_nothing() {
        assert!(ServiceQuery::new().to_params().is_empty());
    }
}
