// core/src/model/mod.rs

//! Catalog data model: the product entity, its inputs, and their validation.

pub mod product;
pub mod validation;

pub use product::{NewProduct, Product, ProductPatch};
pub use validation::{check_new_product, check_patch, check_product, FieldIssue};
