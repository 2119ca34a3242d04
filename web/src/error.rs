use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        // Duplicates answer 303, matching the documented wire contract.
        let status_code = match &self {
            Self::Storage(StorageError::DuplicateIdentityCode(_)) => StatusCode::SEE_OTHER,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::SEE_OTHER,
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            Self::Storage(e @ StorageError::DuplicateIdentityCode(_)) => {
                json!({
                    "detail": e.to_string()
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                tracing::warn!("Constraint violation: {}", msg);
                json!({
                    "detail": "Integrity constraint violated"
                })
            }
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "detail": "Resource not found"
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "detail": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "detail": "Validation failed",
                    "errors": field_errors
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
