use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use motorpool_core::AppError;

use crate::dto::{ErrorResponse, ValidationErrorResponse};

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            // Validation carries the full message list in its own shape.
            AppError::Validation(messages) => {
                let body = ValidationErrorResponse { messages };
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            err => {
                let (status, error_type) = match &err {
                    AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                    AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
                    AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
                    AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
                    AppError::TokenError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "token_error"),
                    AppError::DatabaseError(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
                    }
                    AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
                };

                let body = ErrorResponse {
                    error: error_type.to_string(),
                    message: err.to_string(),
                };

                (status, axum::Json(body)).into_response()
            }
        }
    }
}
