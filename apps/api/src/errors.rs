use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation("body", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::validation("query", rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation("path", rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Validation { field, message } => json!({
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": message,
                    "field": field
                }
            }),
            AppError::NotFound(msg) => error_body("NOT_FOUND", msg),
            AppError::Conflict(msg) => error_body("CONFLICT", msg),
            AppError::Unauthorized => error_body("UNAUTHORIZED", "Authentication required"),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                error_body("DATABASE_ERROR", "A database error occurred")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                error_body("INTERNAL_ERROR", "An internal server error occurred")
            }
        };

        (status, Json(body)).into_response()
    }
}

fn error_body(code: &str, message: &str) -> serde_json::Value {
    json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::validation("answers[0].choice", "unknown choice 'maybe'");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("answers[0].choice"));
    }

    #[test]
    fn test_internal_maps_to_500() {
        let err = AppError::Internal(anyhow::anyhow!("scorer exploded"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    }
}
