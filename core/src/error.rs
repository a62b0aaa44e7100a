// core/src/error.rs
use thiserror::Error;

use crate::model::FieldIssue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Product with ID {id} not found")]
    NotFound { id: String },

    #[error("Validation failed: {}", summarize(.issues))]
    Validation { issues: Vec<FieldIssue> },

    #[error("No product IDs left to assign")]
    IdsExhausted,
}

impl CatalogError {
    pub fn not_found(id: impl Into<String>) -> Self {
        CatalogError::NotFound { id: id.into() }
    }

    /// Field names named by a validation failure, in report order. Empty for `NotFound`.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            CatalogError::Validation { issues } => issues.iter().map(|i| i.field.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
