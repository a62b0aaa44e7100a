// apps/catalog_service/src/web/params.rs

//! Lenient coercion of listing query strings into catalog filters.

use product_catalog::{Pagination, ProductFilters};
use serde::Deserialize;

/// Raw `GET /api/products` query parameters.
///
/// Everything arrives as text. A value that does not parse is dropped, as if
/// the caller had not sent it.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
  pub category: Option<String>,
  pub min_price: Option<String>,
  pub max_price: Option<String>,
  pub in_stock: Option<String>,
  pub search: Option<String>,
  pub page: Option<String>,
  pub limit: Option<String>,
}

impl ListProductsQuery {
  pub fn into_query(self, default_limit: usize) -> (ProductFilters, Pagination) {
    let filters = ProductFilters {
      category: self.category.filter(|c| !c.trim().is_empty()),
      min_price: self.min_price.as_deref().and_then(parse_price),
      max_price: self.max_price.as_deref().and_then(parse_price),
      in_stock: self.in_stock.as_deref().and_then(parse_bool),
      search: self.search,
    };

    let page = self.page.as_deref().and_then(parse_count).unwrap_or(1);
    let limit = self.limit.as_deref().and_then(parse_count).unwrap_or(default_limit);
    (filters, Pagination::new(page, limit))
  }
}

fn parse_price(raw: &str) -> Option<f64> {
  raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_bool(raw: &str) -> Option<bool> {
  let raw = raw.trim();
  if raw.eq_ignore_ascii_case("true") {
    Some(true)
  } else if raw.eq_ignore_ascii_case("false") {
    Some(false)
  } else {
    None
  }
}

// zero counts as "not supplied"
fn parse_count(raw: &str) -> Option<usize> {
  raw.trim().parse::<usize>().ok().filter(|&n| n > 0)
}
