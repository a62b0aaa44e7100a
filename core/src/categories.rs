// core/src/categories.rs

//! Category index, derived from the live products on every call and never stored.

use std::collections::HashSet;

use crate::model::Product;

/// Distinct, non-blank categories in first-seen order.
pub fn distinct(products: &[Product]) -> Vec<String> {
  let mut seen = HashSet::new();
  products
    .iter()
    .filter_map(|p| p.category.as_deref())
    .filter(|c| !c.trim().is_empty())
    .filter(|c| seen.insert(*c))
    .map(str::to_string)
    .collect()
}
