// apps/product_api/src/db/mod.rs

//! Postgres access: pool construction and the `ProductStore` implementation.
//!
//! The service never creates or migrates its table. It expects:
//!
//! ```sql
//! CREATE TABLE products (
//!   id SERIAL PRIMARY KEY,
//!   pname TEXT,
//!   pdesc TEXT,
//!   mrp INTEGER,
//!   stBidPrice INTEGER
//! );
//! ```

pub mod product_store;

pub use product_store::PgProductStore;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::errors::Result as AppResult;

/// Opens the bounded pool shared by every request.
///
/// Fails fast: one connection is established eagerly so a bad URL or an
/// unreachable server is reported at startup rather than on the first request.
pub async fn connect_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(config.max_connections)
    .acquire_timeout(config.acquire_timeout)
    .connect(&config.url)
    .await?;

  tracing::info!(
    max_connections = config.max_connections,
    "Successfully connected to the database."
  );
  Ok(pool)
}
