/// Error types for Post Service
///
/// This module defines all error types that can occur in the post-service.
/// Errors are converted to appropriate HTTP responses for API clients.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

/// Result type for post-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// A single rejected input field, reported inside the 400 errors array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub msg: String,
    pub param: String,
}

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Request input failed validation
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Missing or invalid identity
    #[error("{0}")]
    Unauthorized(String),

    /// Resource not found (also covers malformed identifiers)
    #[error("{0}")]
    NotFound(String),

    /// Caller does not own the resource
    #[error("{0}")]
    Forbidden(String),

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }))
            }
            AppError::Unauthorized(msg) | AppError::NotFound(msg) | AppError::Forbidden(msg) => {
                HttpResponse::build(self.status_code()).json(serde_json::json!({ "msg": msg }))
            }
            AppError::Database(_) | AppError::Internal(_) => {
                // Clients get a generic body; the cause stays in the server log.
                tracing::error!("request failed: {}", self);
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "msg": "Server Error" }))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    msg: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                    param: field.to_string(),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.param.cmp(&b.param));
        AppError::Validation(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            AppError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("no token".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("Post not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Forbidden("User not authorized".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn not_found_body_is_a_msg_object() {
        let resp = AppError::NotFound("Post not found".into()).error_response();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "msg": "Post not found" }));
    }

    #[actix_web::test]
    async fn server_errors_hide_the_cause() {
        let resp = AppError::Internal("connection refused at 10.0.0.3".into()).error_response();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "msg": "Server Error" }));
    }

    #[actix_web::test]
    async fn validation_body_is_an_errors_array() {
        let err = AppError::Validation(vec![FieldError {
            msg: "Text is required".into(),
            param: "text".into(),
        }]);
        let resp = err.error_response();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "errors": [{ "msg": "Text is required", "param": "text" }] })
        );
    }
}
