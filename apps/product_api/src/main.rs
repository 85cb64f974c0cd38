// apps/product_api/src/main.rs

mod config;
mod db;
mod errors;
mod state;
mod web;

use crate::config::{AppConfig, LogFormat};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  let builder = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))) // RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Config decides the log format, so it is loaded before the subscriber exists.
  let config_result = AppConfig::from_env();
  init_tracing(
    config_result
      .as_ref()
      .map(|cfg| cfg.log_format)
      .unwrap_or(LogFormat::Pretty),
  );

  tracing::info!("Starting product API server...");

  let app_config = match config_result {
    Ok(cfg) => {
      tracing::info!(backend = ?cfg.store_backend, "Application configuration loaded successfully.");
      Arc::new(cfg)
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::other(e.to_string()));
    }
  };

  let app_state = match AppState::build(app_config.clone()).await {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialise the product store.");
      return Err(std::io::Error::other(e.to_string()));
    }
  };

  let server_address = app_config.bind_address();
  tracing::info!("Starting server on {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
