// apps/product_api/src/db/product_store.rs

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, info, instrument};

use product_catalog::{CatalogError, CatalogResult, Product, ProductInput, ProductStore};

// Integer columns are cast so INTEGER and BIGINT schemas both decode as i64.
// Postgres folds the unquoted stBidPrice column name to lower case.
const SELECT_COLUMNS: &str =
  "id::BIGINT AS id, pname, pdesc, mrp::BIGINT AS mrp, stBidPrice::BIGINT AS st_bid_price";

/// Row shape as Postgres returns it. Text columns are nullable in the table.
#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  pname: Option<String>,
  pdesc: Option<String>,
  mrp: Option<i64>,
  st_bid_price: Option<i64>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.pname.unwrap_or_default(),
      description: row.pdesc.unwrap_or_default(),
      mrp: row.mrp.unwrap_or_default(),
      starting_bid_price: row.st_bid_price.unwrap_or_default(),
    }
  }
}

/// `ProductStore` over a shared `PgPool`. Every method runs exactly one
/// parameterized statement on a connection borrowed from the pool.
#[derive(Debug, Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  fn backend_name(&self) -> &'static str {
    "postgres"
  }

  #[instrument(name = "PgProductStore::insert", skip_all, err(Display))]
  async fn insert(&self, input: &ProductInput) -> CatalogResult<i64> {
    let id: i64 = sqlx::query_scalar(
      "INSERT INTO products (pname, pdesc, mrp, stBidPrice) VALUES ($1, $2, $3, $4) RETURNING id::BIGINT",
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.mrp)
    .bind(input.starting_bid_price)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| CatalogError::backend("insert", e))?;

    info!(product_id = id, "Inserted a single record.");
    Ok(id)
  }

  #[instrument(name = "PgProductStore::get", skip(self), err(Display))]
  async fn get(&self, id: i64) -> CatalogResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products WHERE id = $1", SELECT_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| CatalogError::backend("select_one", e))?;

    if row.is_none() {
      debug!("No rows were returned.");
    }
    Ok(row.map(Product::from))
  }

  #[instrument(name = "PgProductStore::list", skip(self), err(Display))]
  async fn list(&self) -> CatalogResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products", SELECT_COLUMNS))
      .fetch_all(&self.pool)
      .await
      .map_err(|e| CatalogError::backend("select_all", e))?;

    debug!(count = rows.len(), "Fetched products.");
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "PgProductStore::update", skip(self, input), err(Display))]
  async fn update(&self, id: i64, input: &ProductInput) -> CatalogResult<u64> {
    let rows_affected = sqlx::query("UPDATE products SET pname = $2, pdesc = $3, mrp = $4, stBidPrice = $5 WHERE id = $1")
      .bind(id)
      .bind(&input.name)
      .bind(&input.description)
      .bind(input.mrp)
      .bind(input.starting_bid_price)
      .execute(&self.pool)
      .await
      .map_err(|e| CatalogError::backend("update", e))?
      .rows_affected();

    info!(rows_affected, "Total rows/record affected.");
    Ok(rows_affected)
  }

  #[instrument(name = "PgProductStore::delete", skip(self), err(Display))]
  async fn delete(&self, id: i64) -> CatalogResult<u64> {
    let rows_affected = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| CatalogError::backend("delete", e))?
      .rows_affected();

    info!(rows_affected, "Total rows/record affected.");
    Ok(rows_affected)
  }
}
