// apps/catalog_service/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use product_catalog::{NewProduct, ProductPatch};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::params::ListProductsQuery;

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let (filters, pagination) = query_params.into_inner().into_query(app_state.config.default_page_limit);
  let page = app_state.store.query(&filters, pagination);

  info!(
    total = page.pagination.total,
    returned = page.products.len(),
    page = page.pagination.page,
    "Listed products."
  );
  Ok(HttpResponse::Ok().json(page))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.store.get(&path.into_inner())?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.store.create(payload.into_inner())?;
  info!(product_id = %product.id, "Product created.");
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<ProductPatch>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.store.update(&path.into_inner(), payload.into_inner())?;
  info!(product_id = %product.id, "Product updated.");
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let removed = app_state.store.delete(&path.into_inner())?;
  info!(product_id = %removed.id, "Product deleted.");
  Ok(HttpResponse::NoContent().finish())
}
