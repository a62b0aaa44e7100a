// core/src/query/mod.rs

//! Read-only filtering and pagination over a catalog snapshot.
//!
//! Nothing here mutates products. [`run`] is called by
//! [`CatalogStore::query`](crate::CatalogStore::query) while the store's read
//! lock is held, so the snapshot cannot change mid-query.

pub mod filter;
pub mod page;

pub use filter::ProductFilters;
pub use page::{PageMeta, Pagination, ProductPage, DEFAULT_LIMIT, DEFAULT_PAGE};

use crate::model::Product;
use tracing::trace;

/// Applies `filters`, then cuts the `pagination` window out of what is left.
///
/// A page past the end yields no products but still reports the filtered
/// `total` and `total_pages`.
pub fn run(products: &[Product], filters: &ProductFilters, pagination: Pagination) -> ProductPage {
  let matcher = filters.matcher();
  let matched: Vec<&Product> = products.iter().filter(|&p| matcher(p)).collect();
  let total = matched.len();

  let window: Vec<Product> = matched
    .into_iter()
    .skip(pagination.offset())
    .take(pagination.limit())
    .cloned()
    .collect();

  trace!(total, returned = window.len(), page = pagination.page(), "Query evaluated.");

  ProductPage {
    products: window,
    pagination: PageMeta {
      total,
      page: pagination.page(),
      limit: pagination.limit(),
      total_pages: pagination.total_pages(total),
    },
  }
}
