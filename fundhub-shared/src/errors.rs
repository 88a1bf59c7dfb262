use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::clients::db::StoreError;
use crate::types::ErrorBody;

/// Body returned for every validation failure.
pub const MISSING_PARAMETERS: &str = "Missing required parameters";

/// Body returned for every server-side failure. Causes are logged, never sent.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Application error codes following the pattern E{service}{sequence}
///
/// Ranges:
/// - E0xxx: Shared/infrastructure errors
/// - E1xxx: Notification errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Shared (E0xxx)
    InternalError,
    NotFound,

    // Notification (E1xxx)
    InvalidPagination,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InternalError => "E0001",
            Self::NotFound => "E0002",
            Self::InvalidPagination => "E1001",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidPagination => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Known { code: ErrorCode, message: String },

    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),

    #[error("validation error: {0}")]
    Validation(String),
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Known {
            code,
            message: message.into(),
        }
    }

    /// The fixed 400 every request-shape failure collapses into.
    pub fn missing_parameters() -> Self {
        Self::Validation(MISSING_PARAMETERS.to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Known { code, .. } => code.status_code(),
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::Known { code, message } => {
                if status.is_server_error() {
                    tracing::error!(code = code.code(), error = %message, "request failed");
                    ErrorBody::new(INTERNAL_SERVER_ERROR)
                } else {
                    tracing::debug!(code = code.code(), error = %message, "request rejected");
                    ErrorBody::new(message.as_str())
                }
            }
            AppError::Persistence(err) => {
                tracing::error!(error = %err, "persistence error");
                ErrorBody::new(INTERNAL_SERVER_ERROR)
            }
            AppError::Validation(msg) => {
                tracing::debug!(error = %msg, "validation failed");
                ErrorBody::new(msg.as_str())
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
