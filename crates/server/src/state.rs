use crate::config::ServerConfig;
use std::sync::Arc;
use store::ProductStore;
use subtle::ConstantTimeEq;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Product collection (shared across requests)
    pub store: Arc<ProductStore>,
}

impl ServerState {
    /// Create new server state with the seed products
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, ProductStore::seeded())
    }

    /// Create server state around an existing store
    pub fn with_store(config: ServerConfig, store: ProductStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Check if API key is valid
    ///
    /// Exact, constant-time match against the configured key. Nothing is
    /// valid when no key is configured.
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        match self.config.api_key.as_deref() {
            Some(expected) if self.config.has_api_key() => {
                bool::from(expected.as_bytes().ct_eq(key.as_bytes()))
            }
            _ => false,
        }
    }
}
