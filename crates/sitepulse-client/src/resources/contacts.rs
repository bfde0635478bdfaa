use std::sync::Arc;

use reqwest::Method;

use sitepulse_types::{ContactDraft, ContactMessage, Paginated};

use crate::error::{Error, Result};
use crate::transport::Transport;

use super::{PageFilter, Params};

pub struct ContactsApi {
    transport: Arc<Transport>,
}

impl ContactsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Public contact-form submission. The draft is validated before any
    /// request goes out; server-side rejections still come back as status
    /// errors carrying the server's message.
    pub async fn submit(&self, draft: &ContactDraft) -> Result<ContactMessage> {
        draft.validate().map_err(Error::InvalidInput)?;

        let builder = self.transport.request(Method::POST, "/contact").json(draft);
        self.transport.send_enveloped("/contact", builder).await
    }

    /// Admin inbox listing.
    pub async fn list(&self, page: Option<u32>, per_page: Option<u32>) -> Result<Paginated<ContactMessage>> {
        let paging = PageFilter { page, per_page };
        let mut params = Params::new();
        paging.push_params(&mut params);

        let builder = self
            .transport
            .request(Method::GET, "/contact")
            .query(&params);
        self.transport.send_raw("/contact", builder).await
    }

    pub async fn mark_read(&self, id: u64) -> Result<ContactMessage> {
        let route = format!("/contact/{}/read", id);
        let builder = self.transport.request(Method::PUT, &route);
        self.transport.send_enveloped(&route, builder).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        let route = format!("/contact/{}", id);
        let builder = self.transport.request(Method::DELETE, &route);
        self.transport.send_no_content(&route, builder).await
    }
}
