// core/src/model/validation.rs

//! Field-level checks for creation and merge-update inputs.

use serde::{Deserialize, Serialize};

use super::{NewProduct, Product, ProductPatch};

/// One rejected field, as reported in the `details` array of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
  pub field: String,
  pub message: String,
  pub code: String,
}

impl FieldIssue {
  fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
    Self {
      field: field.to_string(),
      message: message.into(),
      code: code.to_string(),
    }
  }

  fn required(field: &str) -> Self {
    Self::new(field, "required", format!("{} is required", field))
  }

  fn empty(field: &str) -> Self {
    Self::new(field, "empty", format!("{} must not be empty", field))
  }

  fn invalid_price(value: f64) -> Self {
    Self::new("price", "invalid_price", format!("price must be greater than 0 (got {})", value))
  }
}

// Only the empty string counts as empty; whitespace is the caller's business.
fn check_text(field: &str, value: Option<&str>, required: bool, issues: &mut Vec<FieldIssue>) {
  match value {
    None if required => issues.push(FieldIssue::required(field)),
    Some(text) if text.is_empty() => issues.push(FieldIssue::empty(field)),
    _ => {}
  }
}

fn check_price(value: Option<f64>, required: bool, issues: &mut Vec<FieldIssue>) {
  match value {
    None if required => issues.push(FieldIssue::required("price")),
    // NaN fails `> 0.0` as well
    Some(price) if !(price.is_finite() && price > 0.0) => issues.push(FieldIssue::invalid_price(price)),
    _ => {}
  }
}

/// Collects every problem with a creation input. An empty vector means the input is acceptable.
pub fn check_new_product(input: &NewProduct) -> Vec<FieldIssue> {
  let mut issues = Vec::new();
  check_text("name", input.name.as_deref(), true, &mut issues);
  check_price(input.price, true, &mut issues);
  check_text("description", input.description.as_deref(), true, &mut issues);
  if input.image.is_none() {
    issues.push(FieldIssue::required("image"));
  }
  if input.data_ai_hint.is_none() {
    issues.push(FieldIssue::required("dataAiHint"));
  }
  issues
}

/// Collects problems with the fields a patch supplies. Absent fields are never an issue.
pub fn check_patch(patch: &ProductPatch) -> Vec<FieldIssue> {
  let mut issues = Vec::new();
  check_text("name", patch.name.as_deref(), false, &mut issues);
  check_price(patch.price, false, &mut issues);
  check_text("description", patch.description.as_deref(), false, &mut issues);
  issues
}

/// Checks an already-built product against the invariants every stored product keeps:
/// the creation rules plus `updated_at >= created_at`.
pub fn check_product(product: &Product) -> Vec<FieldIssue> {
  let mut issues = Vec::new();
  check_text("name", Some(&product.name), true, &mut issues);
  check_price(Some(product.price), true, &mut issues);
  check_text("description", Some(&product.description), true, &mut issues);
  if product.updated_at < product.created_at {
    issues.push(FieldIssue::new(
      "updatedAt",
      "invalid_timestamp",
      "updatedAt must not be earlier than createdAt",
    ));
  }
  issues
}
