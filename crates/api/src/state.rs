use std::sync::Arc;

use kinoteka_db::CatalogStore;
use serde::Serialize;

use crate::config::ServerConfig;
use crate::response::Pretty;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog persistence, injected at startup.
    pub store: Arc<dyn CatalogStore>,
    /// Server configuration (JSON indent and PATCH mode are read per request).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Wrap a response body using the configured JSON indentation.
    pub fn json<T: Serialize>(&self, value: T) -> Pretty<T> {
        Pretty::new(value).with_indent(self.config.json_indent)
    }
}
