// apps/catalog_service/src/main.rs

use actix_web::{App, HttpServer};
use anyhow::Context;
use catalog_service::web::configure_app;
use catalog_service::{AppConfig, AppState};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))) // RUST_LOG overrides the INFO default
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting product catalog server...");

  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);

  let app_state = AppState::from_config(app_config.clone());
  tracing::info!(
    products = app_state.store.len(),
    seeded = app_config.seed_catalog,
    "Catalog initialised."
  );

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app(app_state.clone()))
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")?;

  tracing::info!("Server stopped.");
  Ok(())
}
