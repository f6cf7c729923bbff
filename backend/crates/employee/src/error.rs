//! Employee Error Types
//!
//! Employee-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Every variant leaves the service as a
//! `{message, status}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx_error, kind::ErrorKind};
use thiserror::Error;

/// Employee-specific result type alias
pub type EmployeeResult<T> = Result<T, EmployeeError>;

#[derive(Debug, Error)]
pub enum EmployeeError {
    /// Missing body, `{}` or `null`
    #[error("Request body can not be empty!")]
    EmptyBody,

    /// Body sent with a non-JSON content type
    #[error("Content-Type must be application/json")]
    UnsupportedContentType,

    /// Body is JSON but not a valid employee payload
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body is too large")]
    PayloadTooLarge,

    #[error("Employee not found")]
    NotFound,

    /// Existence check passed but the write matched nothing
    #[error("Unable to update employee")]
    UpdateFailed,

    /// Existence check passed but nothing was deleted
    #[error("Unable to delete employee")]
    DeleteFailed,

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EmployeeError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EmployeeError::EmptyBody
            | EmployeeError::InvalidBody(_)
            | EmployeeError::DeleteFailed => ErrorKind::BadRequest,
            EmployeeError::UnsupportedContentType => ErrorKind::UnprocessableEntity,
            EmployeeError::PayloadTooLarge => ErrorKind::PayloadTooLarge,
            EmployeeError::NotFound => ErrorKind::NotFound,
            EmployeeError::UpdateFailed | EmployeeError::Internal(_) => {
                ErrorKind::InternalServerError
            }
            EmployeeError::Store(e) => classify_sqlx_error(e).0,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to the client-facing error. Store and internal details stay
    /// in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            EmployeeError::Store(e) => {
                let (kind, message) = classify_sqlx_error(e);
                AppError::new(kind, message)
            }
            EmployeeError::Internal(_) => AppError::internal("Internal server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            EmployeeError::Store(e) if self.kind().is_server_error() => {
                tracing::error!(error = %e, "Employee store error");
            }
            EmployeeError::Store(e) => {
                tracing::warn!(error = %e, "Employee store rejected request");
            }
            EmployeeError::Internal(msg) => {
                tracing::error!(message = %msg, "Employee internal error");
            }
            EmployeeError::UpdateFailed | EmployeeError::DeleteFailed => {
                tracing::warn!(error = %self, "Employee write affected no records");
            }
            _ => {
                tracing::debug!(error = %self, "Employee request rejected");
            }
        }
    }
}

impl From<EmployeeError> for AppError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::Store(e) => AppError::from(e),
            other => other.to_app_error(),
        }
    }
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
