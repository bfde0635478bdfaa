use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use sitepulse_client::{Client, ClientConfig};
use sitepulse_core::{FileStore, resolve_data_dir};

use crate::types::OutputFormat;

/// Shared state for handler execution: resolved data directory, effective
/// configuration, the durable store, and the output format.
pub struct AppContext {
    pub data_dir: PathBuf,
    pub config: ClientConfig,
    pub store: Arc<FileStore>,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(data_dir: Option<&str>, format: OutputFormat) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir)?;
        let store = Arc::new(FileStore::open(&data_dir)?);
        let config = ClientConfig::load(&data_dir)?;

        Ok(Self {
            data_dir,
            config,
            store,
            format,
        })
    }

    /// Connect a client operating from the given surface path. Admin
    /// surfaces get in-place auth errors, public surfaces the
    /// redirect-and-clear behavior.
    pub fn client_at(&self, context_path: &str) -> Result<Client> {
        Ok(Client::connect_at(
            self.config.clone(),
            self.store.clone(),
            context_path,
        )?)
    }
}
