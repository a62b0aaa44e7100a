// core/src/query/page.rs

use serde::{Deserialize, Serialize};

use crate::model::Product;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPagination")]
pub struct Pagination {
  page: usize,
  limit: usize,
}

// Deserialized values go through `Pagination::new` like every other source.
#[derive(Deserialize)]
struct RawPagination {
  #[serde(default)]
  page: usize,
  #[serde(default)]
  limit: usize,
}

impl From<RawPagination> for Pagination {
  fn from(raw: RawPagination) -> Self {
    Pagination::new(raw.page, raw.limit)
  }
}

impl Pagination {
  /// Zero for either value falls back to its default rather than failing.
  pub fn new(page: usize, limit: usize) -> Self {
    Self {
      page: if page == 0 { DEFAULT_PAGE } else { page },
      limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
    }
  }

  pub fn page(&self) -> usize {
    self.page
  }

  pub fn limit(&self) -> usize {
    self.limit
  }

  /// Index of the first item on this page within the filtered set.
  pub fn offset(&self) -> usize {
    self.page.saturating_sub(1).saturating_mul(self.limit)
  }

  pub fn total_pages(&self, total: usize) -> usize {
    total.div_ceil(self.limit.max(1))
  }
}

impl Default for Pagination {
  fn default() -> Self {
    Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
  /// Size of the filtered set, independent of the page window.
  pub total: usize,
  pub page: usize,
  pub limit: usize,
  pub total_pages: usize,
}

/// One page of a filtered product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
  pub products: Vec<Product>,
  pub pagination: PageMeta,
}

impl ProductPage {
  pub fn total(&self) -> usize {
    self.pagination.total
  }

  pub fn total_pages(&self) -> usize {
    self.pagination.total_pages
  }

  pub fn ids(&self) -> Vec<&str> {
    self.products.iter().map(|p| p.id.as_str()).collect()
  }
}
