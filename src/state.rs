use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::storage::PhotoStorage;
use crate::store::InventoryStore;

/// The shared application state.
///
/// Cloned into every handler by Axum. All members are cheap handles onto
/// the same underlying data.
#[derive(Clone)]
pub struct AppState {
    /// The inventory list.
    pub store: InventoryStore,
    /// Photo files in the cache directory.
    pub photos: PhotoStorage,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Counters exposed on `/metrics`.
    pub metrics: Metrics,
}

impl AppState {
    /// Creates a state with an empty store rooted at the configured cache directory.
    pub fn new(config: AppConfig) -> Self {
        let photos = PhotoStorage::new(config.server.cache_dir.clone());
        Self { store: InventoryStore::new(), photos, config: Arc::new(config), metrics: Metrics::new() }
    }
}
