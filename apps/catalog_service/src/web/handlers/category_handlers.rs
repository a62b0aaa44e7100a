// apps/catalog_service/src/web/handlers/category_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{debug, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = app_state.store.categories();
  debug!(count = categories.len(), "Derived categories.");
  Ok(HttpResponse::Ok().json(json!({ "categories": categories })))
}
