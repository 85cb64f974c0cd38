// tests/memory_store_tests.rs
mod common;

use std::collections::HashSet;
use std::sync::Arc;

use common::*;
use product_catalog::{InMemoryProductStore, Product, ProductInput, ProductStore};

#[tokio::test]
async fn test_insert_then_get_round_trips_fields() {
  setup_tracing();
  let store = InMemoryProductStore::new();

  let id = store.insert(&widget()).await.unwrap();
  assert_eq!(id, 1);

  let fetched = store.get(id).await.unwrap().expect("product should exist");
  assert_eq!(fetched, Product::from_input(1, &widget()));
}

#[tokio::test]
async fn test_get_missing_is_none_not_error() {
  setup_tracing();
  let store = InMemoryProductStore::new();
  assert_eq!(store.get(42).await.unwrap(), None);
}

#[tokio::test]
async fn test_update_replaces_all_fields_and_reports_one() {
  setup_tracing();
  let (store, ids) = seeded_store(&[widget()]).await;

  let replacement = ProductInput::new("Widget2", "", -5, 0);
  assert_eq!(store.update(ids[0], &replacement).await.unwrap(), 1);

  let fetched = store.get(ids[0]).await.unwrap().unwrap();
  assert_eq!(fetched, Product::from_input(ids[0], &replacement));
}

#[tokio::test]
async fn test_update_missing_reports_zero() {
  setup_tracing();
  let (store, _) = seeded_store(&[widget()]).await;
  assert_eq!(store.update(999, &gadget()).await.unwrap(), 0);
  assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_delete_reports_affected_rows() {
  setup_tracing();
  let (store, ids) = seeded_store(&[widget(), gadget()]).await;

  assert_eq!(store.delete(ids[0]).await.unwrap(), 1);
  assert_eq!(store.get(ids[0]).await.unwrap(), None);
  assert_eq!(store.delete(ids[0]).await.unwrap(), 0);
  assert_eq!(store.delete(999).await.unwrap(), 0);
  assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
  setup_tracing();
  let (store, ids) = seeded_store(&[widget(), gadget()]).await;
  store.delete(ids[1]).await.unwrap();

  let next = store.insert(&widget()).await.unwrap();
  assert_eq!(next, 3);
}

#[tokio::test]
async fn test_list_returns_exactly_live_products() {
  setup_tracing();
  let (store, ids) = seeded_store(&[widget(), gadget(), widget()]).await;
  store.delete(ids[1]).await.unwrap();

  let listed: HashSet<i64> = store.list().await.unwrap().into_iter().map(|p| p.id).collect();
  let expected: HashSet<i64> = [ids[0], ids[2]].into_iter().collect();
  assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_list_empty_store() {
  setup_tracing();
  let store = InMemoryProductStore::new();
  assert!(store.list().await.unwrap().is_empty());
  assert!(store.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_get_unique_ids() {
  setup_tracing();
  let store: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::new());

  let tasks: Vec<_> = (0..32)
    .map(|i| {
      let store = store.clone();
      tokio::spawn(async move { store.insert(&ProductInput::new(format!("p{}", i), "", i, 0)).await })
    })
    .collect();

  let mut ids = HashSet::new();
  for task in tasks {
    ids.insert(task.await.unwrap().unwrap());
  }
  assert_eq!(ids.len(), 32);
  assert_eq!(store.list().await.unwrap().len(), 32);
}
