//! Employee Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Employee entity, partial-update patch, repository trait
//! - `application/` - One use case per resource operation
//! - `infra/` - PostgreSQL document collection and in-memory collection
//! - `presentation/` - HTTP handlers, DTOs, body extraction, router
//!
//! ## Error Model
//! - Handlers return `EmployeeResult`; every failure leaves as `{message, status}`
//! - Store errors keep a meaningful status but never their driver message
//! - Framework rejections are normalized by `presentation::middleware`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{EmployeeError, EmployeeResult};
pub use infra::memory::InMemoryEmployeeRepository;
pub use infra::postgres::PgEmployeeRepository;
pub use presentation::router::employee_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    body::ErrorBody,
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
