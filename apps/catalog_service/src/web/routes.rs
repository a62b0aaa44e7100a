// apps/catalog_service/src/web/routes.rs

use actix_web::web;
use chrono::Utc;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::{category_handlers, product_handlers};

// Liveness only; the catalog is in-process so there is nothing downstream to probe.
async fn health_check_handler(app_state: web::Data<AppState>) -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({
    "status": "ok",
    "service": "product-service",
    "products": app_state.store.len(),
    "timestamp": Utc::now().to_rfc3339(),
  }))
}

/// JSON body settings: size limit from config, and unreadable bodies answered as 400 `{error}`.
pub fn json_config(limit: usize) -> web::JsonConfig {
  web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
    AppError::bad_request(format!("Invalid JSON body: {}", err)).into()
  })
}

/// Registers shared state, body handling and every `/api` route. Used by `main.rs` and the tests.
pub fn configure_app(app_state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
  move |cfg: &mut web::ServiceConfig| {
    let json_limit = app_state.config.json_body_limit;
    cfg
      .app_data(web::Data::new(app_state))
      .app_data(json_config(json_limit))
      .configure(configure_app_routes);
  }
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      .route(
        "/categories",
        web::get().to(category_handlers::list_categories_handler),
      )
      .service(
        web::scope("/products")
          .service(
            web::resource("")
              .route(web::get().to(product_handlers::list_products_handler))
              .route(web::post().to(product_handlers::create_product_handler)),
          )
          .service(
            web::resource("/{product_id}")
              .route(web::get().to(product_handlers::get_product_handler))
              .route(web::put().to(product_handlers::update_product_handler))
              .route(web::delete().to(product_handlers::delete_product_handler)),
          ),
      ),
  );
}
