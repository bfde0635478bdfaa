use std::sync::Arc;

use reqwest::Method;

use sitepulse_types::{Paginated, Project, ProjectDraft, PublishStatus};

use crate::error::Result;
use crate::transport::Transport;

use super::{PageFilter, Params};

/// Filters for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    paging: PageFilter,
    category: Option<String>,
    featured: Option<bool>,
    status: Option<PublishStatus>,
    search: Option<String>,
}

impl ProjectQuery {
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

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
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
        if let Some(ref category) = self.category {
            params.push(("category", category.clone()));
        }
        if let Some(featured) = self.featured {
            params.push(("featured", featured.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.to_string()));
        }
        if let Some(ref search) = self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

pub struct ProjectsApi {
    transport: Arc<Transport>,
}

impl ProjectsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self, query: ProjectQuery) -> Result<Paginated<Project>> {
        let builder = self
            .transport
            .request(Method::GET, "/projects")
            .query(&query.to_params());
        self.transport.send_raw("/projects", builder).await
    }

    pub async fn get(&self, slug: &str) -> Result<Project> {
        let route = format!("/projects/{}", slug);
        let builder = self.transport.request(Method::GET, &route);
        self.transport.send_enveloped(&route, builder).await
    }

    pub async fn create(&self, draft: &ProjectDraft) -> Result<Project> {
        let builder = self.transport.request(Method::POST, "/projects").json(draft);
        self.transport.send_enveloped("/projects", builder).await
    }

    pub async fn update(&self, id: u64, draft: &ProjectDraft) -> Result<Project> {
        let route = format!("/projects/{}", id);
        let builder = self.transport.request(Method::PUT, &route).json(draft);
        self.transport.send_enveloped(&route, builder).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        let route = format!("/projects/{}", id);
        let builder = self.transport.request(Method::DELETE, &route);
        self.transport.send_no_content(&route, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_marshals_all_filters() {
        let params = ProjectQuery::new()
            .page(1)
            .per_page(12)
            .category("ecommerce")
            .featured(true)
            .search("shop")
            .to_params();

        assert_eq!(
            params,
            vec![
                ("page", "1".to_string()),
                ("per_page", "12".to_string()),
                ("category", "ecommerce".to_string()),
                ("featured", "true".to_string()),
                ("search", "shop".to_string()),
            ]
        );
    }
}
