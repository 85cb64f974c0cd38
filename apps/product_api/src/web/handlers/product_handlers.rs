// apps/product_api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use super::cors_ok;
use crate::errors::AppError;
use crate::state::AppState;
use product_catalog::{MutationResponse, Product, ProductInput};

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<Option<ProductInput>>,
) -> Result<HttpResponse, AppError> {
  // A literal `null` body is the zero-valued input.
  let input = payload.into_inner().unwrap_or_default();
  let id = app_state.store.insert(&input).await?;

  info!("Product {} created.", id);
  Ok(cors_ok(Some("POST")).json(MutationResponse::created(id)))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.store.get(product_id).await? {
    Some(product) => Ok(cors_ok(None).json(product)),
    None if app_state.config.strict_not_found => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
    None => {
      // Missing rows answer with the zero-valued product, not an error.
      info!("Product with ID {} not found; returning empty product.", product_id);
      Ok(cors_ok(None).json(Product::default()))
    }
  }
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.store.list().await?;

  info!("Successfully fetched {} products.", products.len());
  Ok(cors_ok(None).json(products))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<Option<ProductInput>>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let input = payload.into_inner().unwrap_or_default();
  let rows_affected = app_state.store.update(product_id, &input).await?;

  info!(rows_affected, "Product update finished.");
  Ok(cors_ok(Some("PUT")).json(MutationResponse::updated(product_id, rows_affected)))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let rows_affected = app_state.store.delete(product_id).await?;

  info!(rows_affected, "Product delete finished.");
  Ok(cors_ok(Some("DELETE")).json(MutationResponse::deleted(product_id, rows_affected)))
}
