// apps/catalog_service/src/lib.rs

//! HTTP surface of the product catalog: routing, request coercion, error
//! mapping and configuration. The catalog logic itself lives in `product_catalog`.

pub mod config;
pub mod errors;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::AppError;
pub use crate::state::AppState;
