// apps/catalog_service/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod params;
pub mod routes;

pub use routes::{configure_app, configure_app_routes};
