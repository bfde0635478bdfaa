use std::sync::Arc;

use reqwest::Method;

use sitepulse_types::{MediaItem, Paginated};

use crate::error::Result;
use crate::transport::Transport;

use super::{PageFilter, Params};

/// Media library reads and deletes. Uploading bytes is the file store's
/// job and stays outside this client.
pub struct MediaApi {
    transport: Arc<Transport>,
}

impl MediaApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self, page: Option<u32>, per_page: Option<u32>) -> Result<Paginated<MediaItem>> {
        let paging = PageFilter { page, per_page };
        let mut params = Params::new();
        paging.push_params(&mut params);

        let builder = self.transport.request(Method::GET, "/media").query(&params);
        self.transport.send_raw("/media", builder).await
    }

    pub async fn get(&self, id: u64) -> Result<MediaItem> {
        let route = format!("/media/{}", id);
        let builder = self.transport.request(Method::GET, &route);
        self.transport.send_enveloped(&route, builder).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        let route = format!("/media/{}", id);
        let builder = self.transport.request(Method::DELETE, &route);
        self.transport.send_no_content(&route, builder).await
    }
}
