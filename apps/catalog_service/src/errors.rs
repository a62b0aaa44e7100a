// apps/catalog_service/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use product_catalog::{CatalogError, FieldIssue};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {message}")]
  Validation { message: String, details: Vec<FieldIssue> },

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  /// A 400 with no field-level details, e.g. for an unreadable request body.
  pub fn bad_request(message: impl Into<String>) -> Self {
    AppError::Validation {
      message: message.into(),
      details: Vec::new(),
    }
  }
}

impl From<CatalogError> for AppError {
  fn from(err: CatalogError) -> Self {
    match err {
      CatalogError::NotFound { .. } => AppError::NotFound(err.to_string()),
      CatalogError::Validation { issues } => AppError::Validation {
        message: "Validation failed".to_string(),
        details: issues,
      },
      CatalogError::IdsExhausted => AppError::Internal(err.to_string()),
    }
  }
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience in handlers
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(format!("{:#}", err))
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation { .. } => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with client error");
    }

    let body = match self {
      AppError::Validation { message, details } if details.is_empty() => json!({ "error": message }),
      AppError::Validation { message, details } => json!({ "error": message, "details": details }),
      AppError::NotFound(m) => json!({ "error": m }),
      AppError::Config(m) => json!({ "error": "Configuration issue", "message": m }),
      AppError::Internal(m) => json!({ "error": "An internal error occurred", "message": m }),
    };
    HttpResponse::build(status).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
