// product_catalog/src/store.rs

//! The storage seam between HTTP handlers and a concrete backend.

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::model::{Product, ProductInput};

/// One method per CRUD statement. Every call is independent: no transaction
/// spans two calls and nothing is retried.
///
/// Absent rows are not errors. `get` answers `None`, `update`/`delete` answer `0`.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Short backend name for logs (`"postgres"`, `"memory"`).
  fn backend_name(&self) -> &'static str;

  /// Stores a new product and returns the id assigned by the backend.
  async fn insert(&self, input: &ProductInput) -> CatalogResult<i64>;

  async fn get(&self, id: i64) -> CatalogResult<Option<Product>>;

  /// Every stored product. Order is backend-defined.
  async fn list(&self) -> CatalogResult<Vec<Product>>;

  /// Replaces all mutable fields of product `id`. Returns the affected row count.
  async fn update(&self, id: i64, input: &ProductInput) -> CatalogResult<u64>;

  /// Returns the affected row count.
  async fn delete(&self, id: i64) -> CatalogResult<u64>;
}
