// src/state.rs
use std::sync::Arc;

use crate::config::{Config, PageConfig};
use crate::services::backend_client::BackendClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub backend: BackendClient,
    pub page: PageConfig,
}

impl AppState {
    pub fn new(backend: BackendClient, page: PageConfig) -> Self {
        Self { backend, page }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let backend = BackendClient::new(&config.backend_url, config.backend_timeout)?;
        Ok(Self::new(backend, config.page.clone()))
    }
}
