//! Shared application state for all routes. Immutable after startup.

use crate::config::ResourceRegistry;
use crate::service::BackendClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub registry: Arc<ResourceRegistry>,
}

impl AppState {
    pub fn new(backend: BackendClient, registry: ResourceRegistry) -> Self {
        AppState {
            backend,
            registry: Arc::new(registry),
        }
    }
}
