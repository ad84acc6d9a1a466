//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use newsdesk_core::auth::AuthError;
use newsdesk_core::db::ConnectionError;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Account is inactive")]
    AccountDisabled,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Database unavailable: {0}")]
    DbUnavailable(#[from] ConnectionError),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, state) = match &self {
            AppError::Validation(m) => {
                (StatusCode::BAD_REQUEST, "validation_error", m.clone(), None)
            }
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.clone(), None),
            AppError::Unauthorized(m) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", m.clone(), None)
            }
            AppError::AccountDisabled => (
                StatusCode::FORBIDDEN,
                "account_disabled",
                "Your account is inactive. Please contact support.".to_string(),
                None,
            ),
            AppError::Forbidden(m) => (StatusCode::FORBIDDEN, "forbidden", m.clone(), None),
            // The underlying cause stays in the logs; the body reports the
            // connection state only.
            AppError::DbUnavailable(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "db_unavailable",
                "Database connection is not ready".to_string(),
                Some(e.state.to_string()),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
                None,
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            state,
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Validation("email or username already in use".into())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::Validation("referenced row does not exist".into())
            }
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::MalformedToken
            | AuthError::TokenExpired
            | AuthError::InvalidSignature => AppError::Unauthorized(e.to_string()),
            AuthError::AccountDisabled => AppError::AccountDisabled,
            AuthError::Validation(msg) => AppError::Validation(msg),
            AuthError::Db(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}
