// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use once_cell::sync::Lazy;
use product_catalog::{InMemoryProductStore, ProductInput, ProductStore};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Common Inputs ---
pub fn widget() -> ProductInput {
  ProductInput::new("Widget", "A widget", 100, 50)
}

pub fn gadget() -> ProductInput {
  ProductInput::new("Gadget", "A gadget", 250, 120)
}

/// A store pre-filled with `inputs`, returning the assigned ids in insertion order.
pub async fn seeded_store(inputs: &[ProductInput]) -> (InMemoryProductStore, Vec<i64>) {
  let store = InMemoryProductStore::new();
  let mut ids = Vec::with_capacity(inputs.len());
  for input in inputs {
    ids.push(store.insert(input).await.expect("in-memory insert"));
  }
  (store, ids)
}
