//! Application-wide error types.
//!
//! Workflow transitions have their own error taxonomy in the core crate;
//! everything else (record CRUD, query parsing, auth, configuration) is
//! expressed as an [`AppError`].

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types for requests outside the workflow engine.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller is not authenticated.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request input broke a rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database could not serve the request.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Database(_) => 503,
            Self::Config(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true if the details must not be shown to the caller.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Config(_))
    }

    /// Text carried by the error, without the category prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Unauthorized(s)
            | Self::NotFound(s)
            | Self::Validation(s)
            | Self::Database(s)
            | Self::Config(s) => s,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
