use std::sync::Arc;

use reqwest::Method;

use sitepulse_types::{Paginated, Post, PostDraft, PublishStatus};

use crate::error::Result;
use crate::transport::Transport;

use super::{PageFilter, Params};

/// Filters for listing blog posts.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    paging: PageFilter,
    tag: Option<String>,
    status: Option<PublishStatus>,
    search: Option<String>,
}

impl PostQuery {
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

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
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
        if let Some(ref tag) = self.tag {
            params.push(("tag", tag.clone()));
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

pub struct PostsApi {
    transport: Arc<Transport>,
}

impl PostsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self, query: PostQuery) -> Result<Paginated<Post>> {
        let builder = self
            .transport
            .request(Method::GET, "/posts")
            .query(&query.to_params());
        self.transport.send_raw("/posts", builder).await
    }

    pub async fn get(&self, slug: &str) -> Result<Post> {
        let route = format!("/posts/{}", slug);
        let builder = self.transport.request(Method::GET, &route);
        self.transport.send_enveloped(&route, builder).await
    }

    pub async fn create(&self, draft: &PostDraft) -> Result<Post> {
        let builder = self.transport.request(Method::POST, "/posts").json(draft);
        self.transport.send_enveloped("/posts", builder).await
    }

    pub async fn update(&self, id: u64, draft: &PostDraft) -> Result<Post> {
        let route = format!("/posts/{}", id);
        let builder = self.transport.request(Method::PUT, &route).json(draft);
        self.transport.send_enveloped(&route, builder).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        let route = format!("/posts/{}", id);
        let builder = self.transport.request(Method::DELETE, &route);
        self.transport.send_no_content(&route, builder).await
    }
}
