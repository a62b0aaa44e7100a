// core/src/model/product.rs

//! The product entity and the two shapes callers use to change it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product as held by the catalog.
///
/// `id`, `created_at` and `updated_at` are owned by the store; callers never
/// construct a `Product` directly outside of tests and seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: String,
  pub name: String,
  pub price: f64,
  pub description: String,
  pub image: String,
  pub data_ai_hint: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  pub in_stock: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Creation input.
///
/// Every field is optional so that a missing field surfaces as a field-level
/// validation issue rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProduct {
  pub name: Option<String>,
  pub price: Option<f64>,
  pub description: Option<String>,
  pub image: Option<String>,
  pub data_ai_hint: Option<String>,
  pub category: Option<String>,
  pub in_stock: Option<bool>,
}

impl NewProduct {
  /// Shorthand for a fully populated input. `category` and `in_stock` stay unset.
  pub fn new(
    name: impl Into<String>,
    price: f64,
    description: impl Into<String>,
    image: impl Into<String>,
    data_ai_hint: impl Into<String>,
  ) -> Self {
    Self {
      name: Some(name.into()),
      price: Some(price),
      description: Some(description.into()),
      image: Some(image.into()),
      data_ai_hint: Some(data_ai_hint.into()),
      category: None,
      in_stock: None,
    }
  }

  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  pub fn with_in_stock(mut self, in_stock: bool) -> Self {
    self.in_stock = Some(in_stock);
    self
  }
}

/// Merge-update input. `None` leaves the stored field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub price: Option<f64>,
  pub description: Option<String>,
  pub image: Option<String>,
  pub data_ai_hint: Option<String>,
  pub category: Option<String>,
  pub in_stock: Option<bool>,
}

impl ProductPatch {
  pub fn is_empty(&self) -> bool {
    self == &ProductPatch::default()
  }

  /// Field names this patch would overwrite.
  pub fn touched_fields(&self) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if self.name.is_some() {
      fields.push("name");
    }
    if self.price.is_some() {
      fields.push("price");
    }
    if self.description.is_some() {
      fields.push("description");
    }
    if self.image.is_some() {
      fields.push("image");
    }
    if self.data_ai_hint.is_some() {
      fields.push("dataAiHint");
    }
    if self.category.is_some() {
      fields.push("category");
    }
    if self.in_stock.is_some() {
      fields.push("inStock");
    }
    fields
  }

  /// Writes every supplied field onto `product`. Does not touch `updated_at`.
  pub(crate) fn apply_to(self, product: &mut Product) {
    if let Some(name) = self.name {
      product.name = name;
    }
    if let Some(price) = self.price {
      product.price = price;
    }
    if let Some(description) = self.description {
      product.description = description;
    }
    if let Some(image) = self.image {
      product.image = image;
    }
    if let Some(hint) = self.data_ai_hint {
      product.data_ai_hint = hint;
    }
    if let Some(category) = self.category {
      product.category = Some(category);
    }
    if let Some(in_stock) = self.in_stock {
      product.in_stock = in_stock;
    }
  }
}
