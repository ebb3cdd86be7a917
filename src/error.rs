//! Crate-wide error type and HTTP response mapping.
//!
//! Every fallible operation in the crate returns [`AppError`]. Errors
//! propagate unchanged to the request layer, where [`IntoResponse`] maps
//! them to status codes. The only place an error is absorbed rather than
//! returned to a caller is the expiration sweeper task, which logs and
//! waits for the next tick.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application error taxonomy.
///
/// - [`InvalidUrl`](Self::InvalidUrl) - input URL fails the pattern check (user-correctable)
/// - [`TooShort`](Self::TooShort) - input URL rejected by the segment-count policy
/// - [`KeyExhaustion`](Self::KeyExhaustion) - key-generation retry budget exhausted (fatal)
/// - [`NotFound`](Self::NotFound) - no link matches the short key
/// - [`Inactive`](Self::Inactive) - link exists but has expired
/// - [`Conflict`](Self::Conflict) - uniqueness-constraint violation from the store
/// - [`Internal`](Self::Internal) - database or other infrastructure failure
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },
    #[error("{message}")]
    TooShort { message: String, details: Value },
    #[error("{message}")]
    KeyExhaustion { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Inactive { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }
    pub fn too_short(message: impl Into<String>, details: Value) -> Self {
        Self::TooShort {
            message: message.into(),
            details,
        }
    }
    pub fn key_exhaustion(message: impl Into<String>, details: Value) -> Self {
        Self::KeyExhaustion {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn inactive(message: impl Into<String>, details: Value) -> Self {
        Self::Inactive {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for a uniqueness-constraint violation reported by the store.
    ///
    /// Used as the retry predicate in the link-creation collision loop.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::InvalidUrl { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_url", message, details)
            }
            AppError::TooShort { message, details } => {
                (StatusCode::BAD_REQUEST, "url_too_short", message, details)
            }
            AppError::KeyExhaustion { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "key_exhaustion",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Inactive { message, details } => {
                (StatusCode::GONE, "link_inactive", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({ "source": e.to_string() }))
    }
}
