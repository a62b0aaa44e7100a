// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use product_catalog::{CatalogStore, NewProduct, Product};
use tracing::Level;

pub const IMAGE: &str = "https://placehold.co/300x200.png";

// --- Common Inputs ---
pub fn product_input(name: &str, price: f64) -> NewProduct {
  NewProduct::new(name, price, format!("Test description for {}", name), IMAGE, "test")
}

pub fn categorised_input(name: &str, price: f64, category: &str) -> NewProduct {
  product_input(name, price).with_category(category)
}

/// Store pre-seeded with the eight sample grocery items.
pub fn seeded_store() -> CatalogStore {
  CatalogStore::seeded()
}

/// Store holding `count` generated products named "Generated 1".."Generated N".
pub fn store_with_generated(count: usize) -> (CatalogStore, Vec<Product>) {
  let store = CatalogStore::new();
  let created = (1..=count)
    .map(|i| store.create(product_input(&format!("Generated {}", i), 1.0 + i as f64)).unwrap())
    .collect();
  (store, created)
}

pub fn prices(products: &[Product]) -> Vec<f64> {
  let mut prices: Vec<f64> = products.iter().map(|p| p.price).collect();
  prices.sort_by(|a, b| a.partial_cmp(b).unwrap());
  prices
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
