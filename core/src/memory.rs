// product_catalog/src/memory.rs

//! Process-local `ProductStore` used by tests and by servers started without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{event, instrument, Level};

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Product, ProductInput};
use crate::store::ProductStore;

#[derive(Debug)]
struct Table {
  rows: BTreeMap<i64, Product>,
  // Like a SERIAL column: ids of deleted rows are never handed out again.
  next_id: i64,
}

/// Ordered map behind a `parking_lot::RwLock`. Ids start at 1.
#[derive(Debug)]
pub struct InMemoryProductStore {
  table: RwLock<Table>,
}

impl InMemoryProductStore {
  pub fn new() -> Self {
    Self {
      table: RwLock::new(Table {
        rows: BTreeMap::new(),
        next_id: 1,
      }),
    }
  }

  pub fn len(&self) -> usize {
    self.table.read().rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.table.read().rows.is_empty()
  }
}

impl Default for InMemoryProductStore {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
  fn backend_name(&self) -> &'static str {
    "memory"
  }

  #[instrument(name = "InMemoryProductStore::insert", skip_all, err(Display))]
  async fn insert(&self, input: &ProductInput) -> CatalogResult<i64> {
    let mut table = self.table.write();
    let id = table.next_id;
    table.next_id = id
      .checked_add(1)
      .ok_or_else(|| CatalogError::Internal("product id space exhausted".to_string()))?;
    table.rows.insert(id, Product::from_input(id, input));
    event!(Level::INFO, product_id = id, "Inserted a single record.");
    Ok(id)
  }

  #[instrument(name = "InMemoryProductStore::get", skip(self))]
  async fn get(&self, id: i64) -> CatalogResult<Option<Product>> {
    let found = self.table.read().rows.get(&id).cloned();
    if found.is_none() {
      event!(Level::DEBUG, "No rows were returned.");
    }
    Ok(found)
  }

  #[instrument(name = "InMemoryProductStore::list", skip(self))]
  async fn list(&self) -> CatalogResult<Vec<Product>> {
    Ok(self.table.read().rows.values().cloned().collect())
  }

  #[instrument(name = "InMemoryProductStore::update", skip(self, input))]
  async fn update(&self, id: i64, input: &ProductInput) -> CatalogResult<u64> {
    let rows_affected = match self.table.write().rows.get_mut(&id) {
      Some(product) => {
        product.apply(input);
        1
      }
      None => 0,
    };
    event!(Level::INFO, rows_affected, "Total rows/record affected.");
    Ok(rows_affected)
  }

  #[instrument(name = "InMemoryProductStore::delete", skip(self))]
  async fn delete(&self, id: i64) -> CatalogResult<u64> {
    let rows_affected = u64::from(self.table.write().rows.remove(&id).is_some());
    event!(Level::INFO, rows_affected, "Total rows/record affected.");
    Ok(rows_affected)
  }
}
