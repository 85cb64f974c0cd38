// product_catalog/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  /// The storage backend could not run `operation` (connection, statement or row decode failure).
  #[error("Storage backend failed during '{operation}'. Source: {source}")]
  Backend {
    operation: &'static str,
    #[source]
    source: AnyhowError,
  },

  #[error("Internal catalog error: {0}")]
  Internal(String),
}

impl CatalogError {
  /// Wraps any backend error (driver, pool, IO) for the named store operation.
  pub fn backend<E>(operation: &'static str, err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    CatalogError::Backend {
      operation,
      source: AnyhowError::new(err),
    }
  }
}

impl From<AnyhowError> for CatalogError {
  fn from(err: AnyhowError) -> Self {
    // Avoid Backend(Backend(..)) when a CatalogError already travelled through anyhow.
    match err.downcast::<CatalogError>() {
      Ok(catalog_err) => catalog_err,
      Err(err) => CatalogError::Backend {
        operation: "unknown",
        source: err,
      },
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
