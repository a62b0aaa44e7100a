// core/src/query/filter.rs

use serde::{Deserialize, Serialize};

use crate::model::Product;

/// Optional predicates a product must all satisfy to appear in a query result.
///
/// An unset field places no constraint. A blank `search` is treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilters {
  pub category: Option<String>,
  pub min_price: Option<f64>,
  pub max_price: Option<f64>,
  pub in_stock: Option<bool>,
  pub search: Option<String>,
}

impl ProductFilters {
  pub fn category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  pub fn min_price(mut self, min: f64) -> Self {
    self.min_price = Some(min);
    self
  }

  pub fn max_price(mut self, max: f64) -> Self {
    self.max_price = Some(max);
    self
  }

  pub fn in_stock(mut self, in_stock: bool) -> Self {
    self.in_stock = Some(in_stock);
    self
  }

  pub fn search(mut self, term: impl Into<String>) -> Self {
    self.search = Some(term.into());
    self
  }

  pub fn is_empty(&self) -> bool {
    self.category.is_none()
      && self.min_price.is_none()
      && self.max_price.is_none()
      && self.in_stock.is_none()
      && self.search_term().is_none()
  }

  fn search_term(&self) -> Option<&str> {
    self.search.as_deref().filter(|s| !s.trim().is_empty())
  }

  /// Compiles the filters into a reusable predicate. The search term is lowercased once here.
  pub fn matcher(&self) -> impl Fn(&Product) -> bool + '_ {
    let needle = self.search_term().map(str::to_lowercase);
    move |product: &Product| {
      if let Some(category) = &self.category {
        if product.category.as_deref() != Some(category.as_str()) {
          return false;
        }
      }
      if let Some(min) = self.min_price {
        if product.price < min {
          return false;
        }
      }
      if let Some(max) = self.max_price {
        if product.price > max {
          return false;
        }
      }
      if let Some(in_stock) = self.in_stock {
        if product.in_stock != in_stock {
          return false;
        }
      }
      match &needle {
        Some(needle) => text_matches(product, needle),
        None => true,
      }
    }
  }

  pub fn matches(&self, product: &Product) -> bool {
    (self.matcher())(product)
  }
}

// `needle` is already lowercase.
fn text_matches(product: &Product, needle: &str) -> bool {
  [&product.name, &product.description, &product.data_ai_hint]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
