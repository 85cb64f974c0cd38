// src/lib.rs

//! product_catalog: the storage-facing half of the product CRUD service.
//!
//! A single entity, [`Product`], with five operations behind the
//! [`ProductStore`] trait:
//!  - insert (the store assigns the id),
//!  - get by id and list all,
//!  - full-replace update and delete, both reporting affected rows.
//!
//! The HTTP server plugs a Postgres-backed store into the same trait;
//! [`InMemoryProductStore`] covers tests and database-less runs.

pub mod error;
pub mod memory;
pub mod model;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult};
pub use crate::memory::InMemoryProductStore;
pub use crate::model::{MutationResponse, Product, ProductInput};
pub use crate::store::ProductStore;
