// apps/catalog_service/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use product_catalog::query::DEFAULT_LIMIT;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Start with the sample grocery catalog instead of an empty one.
  pub seed_catalog: bool,

  /// Page size used when a listing request has no usable `limit`.
  pub default_page_limit: usize,

  /// Largest accepted JSON request body, in bytes.
  pub json_body_limit: usize,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 3001,
      seed_catalog: true,
      default_page_limit: DEFAULT_LIMIT,
      json_body_limit: 1024 * 1024,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any key/value source. Unset keys take their defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = Self::default();

    let get_env = |var_name: &str, default: String| lookup(var_name).unwrap_or(default);

    let server_host = get_env("SERVER_HOST", defaults.server_host);
    let server_port = parse_var::<u16>("SERVER_PORT", get_env("SERVER_PORT", defaults.server_port.to_string()))?;
    let seed_catalog = parse_var::<bool>("SEED_CATALOG", get_env("SEED_CATALOG", defaults.seed_catalog.to_string()))?;
    let default_page_limit = parse_var::<usize>(
      "DEFAULT_PAGE_LIMIT",
      get_env("DEFAULT_PAGE_LIMIT", defaults.default_page_limit.to_string()),
    )?;
    let json_body_limit = parse_var::<usize>(
      "JSON_BODY_LIMIT",
      get_env("JSON_BODY_LIMIT", defaults.json_body_limit.to_string()),
    )?;

    if default_page_limit == 0 {
      return Err(AppError::Config("DEFAULT_PAGE_LIMIT must be at least 1".to_string()));
    }

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      seed_catalog,
      default_page_limit,
      json_body_limit,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_var<T>(var_name: &str, raw: String) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", var_name, raw, e)))
}
