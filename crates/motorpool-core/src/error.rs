use thiserror::Error;

/// Application-wide error types for Motorpool.
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more DTO fields failed validation. Carries every violation.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Missing or invalid credentials/token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but the role is not allowed for the route.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Lookup by id found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Token signing or verification failed.
    #[error("Token error: {0}")]
    TokenError(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Startup/environment configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if this error is caused by the caller's request
    /// rather than by server-side state.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::Unauthorized(_)
                | AppError::Forbidden(_)
                | AppError::NotFound(_)
        )
    }
}
