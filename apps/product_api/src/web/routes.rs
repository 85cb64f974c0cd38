// apps/product_api/src/web/routes.rs

use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::product_handlers;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
  AppError::Validation(format!("Unable to decode the request body: {}", err)).into()
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> error::Error {
  AppError::Validation(format!("Product id must be an integer: {}", err)).into()
}

/// Registers the product routes plus the extractor configs that turn bad input into 400s.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Bodies are decoded as JSON whatever Content-Type the client declares.
    .app_data(
      web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(json_error_handler),
    )
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .route("/health", web::get().to(health_check_handler))
    .service(web::resource("/product").route(web::post().to(product_handlers::create_product_handler)))
    .service(
      web::resource("/product/{id}")
        .route(web::get().to(product_handlers::get_product_handler))
        .route(web::put().to(product_handlers::update_product_handler))
        .route(web::delete().to(product_handlers::delete_product_handler)),
    )
    .service(web::resource("/products").route(web::get().to(product_handlers::list_products_handler)));
}
