//! Presentation Layer
//!
//! HTTP handlers, DTOs, body extraction, error normalization and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
