//! Error conversions - From implementations for common error types
//!
//! Store failures keep a meaningful status when one exists; the message is
//! always generic so driver details never reach clients.

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

/// Classify a store failure into a kind and a client-safe message.
///
/// Borrowing variant of `From<sqlx::Error>` for callers that keep the error.
#[cfg(feature = "sqlx")]
pub fn classify_sqlx_error(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => (
            ErrorKind::ServiceUnavailable,
            "Database connection pool exhausted",
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            // Class 22 - Data Exception
            Some("22P02") => (ErrorKind::BadRequest, "Invalid input syntax"),
            // Class 23 - Integrity Constraint Violation
            Some("23502") => (ErrorKind::BadRequest, "Required field is null"),
            Some("23505") => (ErrorKind::Conflict, "Duplicate key value"),
            Some("23514") => (ErrorKind::BadRequest, "Check constraint violation"),
            // Class 42 - Syntax Error or Access Rule Violation
            Some("42501") => (ErrorKind::Forbidden, "Insufficient privilege"),
            // Class 53 - Insufficient Resources
            Some("53000" | "53100" | "53200" | "53300") => {
                (ErrorKind::ServiceUnavailable, "Database resource exhausted")
            }
            // Class 57 - Operator Intervention
            Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                (ErrorKind::ServiceUnavailable, "Database unavailable")
            }
            _ => (ErrorKind::InternalServerError, "Database error"),
        },
        sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = classify_sqlx_error(&err);
        AppError::new(kind, message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_body())).into_response()
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::body::ErrorBody {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
