// apps/product_api/src/state.rs
use crate::config::{AppConfig, StoreBackend};
use crate::db::{self, PgProductStore};
use crate::errors::{AppError, Result as AppResult};
use product_catalog::{InMemoryProductStore, ProductStore};
use std::sync::Arc;

/// Process-wide state handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ProductStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: Arc<dyn ProductStore>, config: Arc<AppConfig>) -> Self {
    Self { store, config }
  }

  /// Opens the configured store backend. For Postgres this creates the connection pool.
  pub async fn build(config: Arc<AppConfig>) -> AppResult<Self> {
    let store: Arc<dyn ProductStore> = match config.store_backend {
      StoreBackend::Postgres => {
        let db_config = config
          .database
          .as_ref()
          .ok_or_else(|| AppError::Config("Postgres backend selected without a connection string".to_string()))?;
        let pool = db::connect_pool(db_config).await?;
        Arc::new(PgProductStore::new(pool))
      }
      StoreBackend::Memory => {
        tracing::warn!("Using the in-memory product store; data is lost when the process exits.");
        Arc::new(InMemoryProductStore::new())
      }
    };

    tracing::info!(backend = store.backend_name(), "Product store ready.");
    Ok(Self::new(store, config))
  }
}
