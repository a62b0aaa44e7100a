// core/src/store/catalog.rs

//! The authoritative product collection and the only code that mutates it.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::id::IdAllocator;
use crate::categories;
use crate::error::{CatalogError, CatalogResult};
use crate::model::{check_new_product, check_patch, check_product, NewProduct, Product, ProductPatch};
use crate::query::{self, Pagination, ProductFilters, ProductPage};

#[derive(Debug, Default)]
struct Catalog {
  // insertion order; updates never move an entry
  products: Vec<Product>,
  ids: IdAllocator,
}

impl Catalog {
  fn position(&self, id: &str) -> Option<usize> {
    self.products.iter().position(|p| p.id == id)
  }
}

/// Shared handle to an in-memory catalog.
///
/// Clones point at the same collection. Reads take the shared side of a
/// `parking_lot::RwLock`, mutations the exclusive side, so every operation
/// observes a fully settled catalog and commits before the next mutation
/// starts. Guards never escape this type, so callers in async code cannot hold
/// one across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore(Arc<RwLock<Catalog>>);

impl CatalogStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a store that already holds `products`, keeping their ids and timestamps.
  ///
  /// A product is skipped when its id is already present, when it breaks a
  /// stored-product rule (see [`check_product`]), or when its numeric id leaves
  /// no room for the counter to move past it.
  pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
    let mut catalog = Catalog::default();
    for product in products {
      if catalog.position(&product.id).is_some() {
        warn!(product_id = %product.id, "Skipping preloaded product with duplicate ID.");
        continue;
      }
      let issues = check_product(&product);
      if !issues.is_empty() {
        let error = CatalogError::Validation { issues };
        warn!(product_id = %product.id, %error, "Skipping invalid preloaded product.");
        continue;
      }
      if !catalog.ids.reserve(&product.id) {
        warn!(product_id = %product.id, "Skipping preloaded product with an unreservable ID.");
        continue;
      }
      catalog.products.push(product);
    }
    debug!(count = catalog.products.len(), "Catalog preloaded.");
    CatalogStore(Arc::new(RwLock::new(catalog)))
  }

  /// Builds a store holding the sample grocery catalog from [`crate::seed`].
  pub fn seeded() -> Self {
    let store = Self::new();
    for input in crate::seed::sample_products() {
      // sample data is known-good; a failure here is a bug in the seed table
      if let Err(e) = store.create(input) {
        warn!(error = %e, "Seed product rejected.");
      }
    }
    info!(count = store.len(), "Catalog seeded with sample products.");
    store
  }

  #[instrument(name = "CatalogStore::create", skip(self, input), fields(name = ?input.name), err(Display))]
  pub fn create(&self, input: NewProduct) -> CatalogResult<Product> {
    let issues = check_new_product(&input);
    if !issues.is_empty() {
      return Err(CatalogError::Validation { issues });
    }

    let mut catalog = self.0.write();
    let id = catalog.ids.next_id().ok_or(CatalogError::IdsExhausted)?;
    let now = Utc::now();
    let product = Product {
      id,
      name: input.name.unwrap_or_default(),
      price: input.price.unwrap_or_default(),
      description: input.description.unwrap_or_default(),
      image: input.image.unwrap_or_default(),
      data_ai_hint: input.data_ai_hint.unwrap_or_default(),
      category: input.category,
      in_stock: input.in_stock.unwrap_or(true),
      created_at: now,
      updated_at: now,
    };
    catalog.products.push(product.clone());
    debug!(product_id = %product.id, total = catalog.products.len(), "Product created.");
    Ok(product)
  }

  pub fn get(&self, id: &str) -> CatalogResult<Product> {
    let catalog = self.0.read();
    catalog
      .position(id)
      .map(|idx| catalog.products[idx].clone())
      .ok_or_else(|| CatalogError::not_found(id))
  }

  #[instrument(name = "CatalogStore::update", skip(self, patch), fields(product_id = %id, fields = ?patch.touched_fields()), err(Display))]
  pub fn update(&self, id: &str, patch: ProductPatch) -> CatalogResult<Product> {
    let mut catalog = self.0.write();
    let idx = catalog.position(id).ok_or_else(|| CatalogError::not_found(id))?;

    let issues = check_patch(&patch);
    if !issues.is_empty() {
      return Err(CatalogError::Validation { issues });
    }

    let product = &mut catalog.products[idx];
    patch.apply_to(product);
    product.updated_at = advance(product.updated_at);
    debug!(product_id = %product.id, "Product updated.");
    Ok(product.clone())
  }

  /// Removes the product for good and hands it back.
  #[instrument(name = "CatalogStore::delete", skip(self), err(Display))]
  pub fn delete(&self, id: &str) -> CatalogResult<Product> {
    let mut catalog = self.0.write();
    let idx = catalog.position(id).ok_or_else(|| CatalogError::not_found(id))?;
    let removed = catalog.products.remove(idx);
    debug!(product_id = %removed.id, total = catalog.products.len(), "Product deleted.");
    Ok(removed)
  }

  /// Every live product, unfiltered, in creation order.
  pub fn list(&self) -> Vec<Product> {
    self.0.read().products.clone()
  }

  pub fn len(&self) -> usize {
    self.0.read().products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.read().products.is_empty()
  }

  /// Filters and paginates the current snapshot. See [`crate::query`].
  pub fn query(&self, filters: &ProductFilters, pagination: Pagination) -> ProductPage {
    let catalog = self.0.read();
    query::run(&catalog.products, filters, pagination)
  }

  /// Distinct categories of the live products. See [`crate::categories`].
  pub fn categories(&self) -> Vec<String> {
    categories::distinct(&self.0.read().products)
  }
}

// `updated_at` must move forward even when the clock has not ticked since the last write.
fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
  let now = Utc::now();
  if now > previous {
    now
  } else {
    previous + Duration::microseconds(1)
  }
}
