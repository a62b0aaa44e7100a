// apps/catalog_service/src/web/handlers/mod.rs

// Declare handler modules
pub mod category_handlers;
pub mod product_handlers;
