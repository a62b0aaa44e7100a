// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use actix_web::test::TestRequest;
use catalog_service::{AppConfig, AppState};
use product_catalog::CatalogStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::Level;

/// Builds the full application around `store` and returns a callable test service.
macro_rules! test_app {
  ($store:expr) => {
    actix_web::test::init_service(
      actix_web::App::new().configure(catalog_service::web::configure_app(crate::common::state_for($store))),
    )
    .await
  };
}
pub(crate) use test_app;

pub fn state_for(store: CatalogStore) -> AppState {
  setup_tracing();
  AppState::new(store, Arc::new(AppConfig::default()))
}

// --- Request builders mirroring the API client the acceptance suite used ---
pub fn get(uri: &str) -> TestRequest {
  TestRequest::get().uri(uri)
}

pub fn post_json(uri: &str, body: &Value) -> TestRequest {
  TestRequest::post().uri(uri).set_json(body)
}

pub fn put_json(uri: &str, body: &Value) -> TestRequest {
  TestRequest::put().uri(uri).set_json(body)
}

pub fn delete(uri: &str) -> TestRequest {
  TestRequest::delete().uri(uri)
}

// --- Payloads ---
pub fn valid_product() -> Value {
  json!({
    "name": "Test Organic Bananas",
    "price": 2.99,
    "description": "Fresh organic bananas, perfect for snacking",
    "image": "https://placehold.co/300x200.png",
    "dataAiHint": "fruit organic banana",
    "category": "fruits",
    "inStock": true
  })
}

/// `valid_product()` with the given keys replaced (or added).
pub fn product_with(overrides: Value) -> Value {
  let mut body = valid_product();
  if let (Some(target), Some(extra)) = (body.as_object_mut(), overrides.as_object()) {
    for (k, v) in extra {
      target.insert(k.clone(), v.clone());
    }
  }
  body
}

pub fn without(key: &str) -> Value {
  let mut body = valid_product();
  if let Some(obj) = body.as_object_mut() {
    obj.remove(key);
  }
  body
}

pub fn ids(list_body: &Value) -> Vec<String> {
  list_body["products"]
    .as_array()
    .map(|items| items.iter().filter_map(|p| p["id"].as_str().map(str::to_string)).collect())
    .unwrap_or_default()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
