// apps/product_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which `ProductStore` the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
  Postgres,
  Memory,
}

impl FromStr for StoreBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
      "memory" => Ok(StoreBackend::Memory),
      other => Err(AppError::Config(format!(
        "Invalid STORE_BACKEND '{}': expected 'postgres' or 'memory'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Invalid LOG_FORMAT '{}'", other))),
    }
  }
}

#[derive(Clone)]
pub struct DatabaseConfig {
  pub url: String,
  pub max_connections: u32,
  pub acquire_timeout: Duration,
}

// The connection string carries credentials.
impl fmt::Debug for DatabaseConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DatabaseConfig")
      .field("url", &"[REDACTED]")
      .field("max_connections", &self.max_connections)
      .field("acquire_timeout", &self.acquire_timeout)
      .finish()
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub store_backend: StoreBackend,
  /// `None` only when `store_backend` is `Memory` and no URL was given.
  pub database: Option<DatabaseConfig>,
  /// Answer get-one on a missing id with 404 instead of the zero-valued product.
  pub strict_not_found: bool,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any variable source. `lookup` returns `None` for unset variables.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| lookup(var_name).filter(|value| !value.trim().is_empty());

    let parse_env = |var_name: &str, default: &str| -> String { get_env(var_name).unwrap_or_else(|| default.to_string()) };

    let server_host = parse_env("SERVER_HOST", "0.0.0.0");
    let server_port = parse_env("SERVER_PORT", "8000")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let store_backend = parse_env("STORE_BACKEND", "postgres").parse::<StoreBackend>()?;

    let max_connections = parse_env("DB_MAX_CONNECTIONS", "10")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;
    if max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }
    let acquire_timeout = parse_env("DB_ACQUIRE_TIMEOUT_SECS", "5")
      .parse::<u64>()
      .map(Duration::from_secs)
      .map_err(|e| AppError::Config(format!("Invalid DB_ACQUIRE_TIMEOUT_SECS: {}", e)))?;

    let database_url = get_env("POSTGRES_URL").or_else(|| get_env("DATABASE_URL"));
    let database = match (store_backend, database_url) {
      (_, Some(url)) => Some(DatabaseConfig {
        url,
        max_connections,
        acquire_timeout,
      }),
      (StoreBackend::Memory, None) => None,
      (StoreBackend::Postgres, None) => {
        return Err(AppError::Config(
          "Missing environment variable 'POSTGRES_URL' (or 'DATABASE_URL')".to_string(),
        ))
      }
    };

    let strict_not_found = parse_env("STRICT_NOT_FOUND", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid STRICT_NOT_FOUND value: {}", e)))?;

    let log_format = parse_env("LOG_FORMAT", "pretty").parse::<LogFormat>()?;

    Ok(Self {
      server_host,
      server_port,
      store_backend,
      database,
      strict_not_found,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
