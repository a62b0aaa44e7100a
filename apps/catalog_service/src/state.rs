// apps/catalog_service/src/state.rs
use crate::config::AppConfig;
use product_catalog::CatalogStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: CatalogStore,   // Handle onto the shared in-memory catalog
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: CatalogStore, config: Arc<AppConfig>) -> Self {
    Self { store, config }
  }

  /// Builds the catalog the config asks for: the sample products or nothing.
  pub fn from_config(config: Arc<AppConfig>) -> Self {
    let store = if config.seed_catalog {
      CatalogStore::seeded()
    } else {
      CatalogStore::new()
    };
    Self::new(store, config)
  }
}
