//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - The unified error type and its `{message, status}` wire shape
//! - Typed ID wrappers for store-generated identifiers
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod body;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
