// src/lib.rs

//! product_catalog: an in-memory product catalog.
//!
//! The catalog offers:
//!  - A shared store that assigns ids and timestamps and is the only writer.
//!  - Merge updates: a patch overwrites only the fields it carries.
//!  - Filtered, case-insensitive search with inclusive price bounds.
//!  - 1-based pagination that reports the filtered total.
//!  - A category index recomputed from the live products on every call.

pub mod categories;
pub mod error;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult};
pub use crate::model::{FieldIssue, NewProduct, Product, ProductPatch};
pub use crate::query::{PageMeta, Pagination, ProductFilters, ProductPage};
pub use crate::store::CatalogStore;

/*
    Typical use:
    1. Build a store: `CatalogStore::new()` (empty) or `CatalogStore::seeded()`.
    2. Share it: clones are handles onto the same collection.
    3. Write through `create`, `update` and `delete`; every call commits
       atomically under the store's write lock.
    4. Read through `get`, `list`, `query(&filters, pagination)` and
       `categories()`; reads run concurrently with each other.
*/
