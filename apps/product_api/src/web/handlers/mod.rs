// apps/product_api/src/web/handlers/mod.rs

pub mod product_handlers;

use actix_web::http::header;
use actix_web::{HttpResponse, HttpResponseBuilder};

/// 200 response carrying the advisory CORS headers every endpoint announces.
///
/// `allowed_method` adds the method/headers pair announced by mutating endpoints.
pub(crate) fn cors_ok(allowed_method: Option<&'static str>) -> HttpResponseBuilder {
  let mut builder = HttpResponse::Ok();
  builder.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
  if let Some(method) = allowed_method {
    builder.insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, method));
    builder.insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"));
  }
  builder
}
