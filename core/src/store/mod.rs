// core/src/store/mod.rs

pub mod catalog;
pub mod id;

pub use catalog::CatalogStore;
pub use id::IdAllocator;
