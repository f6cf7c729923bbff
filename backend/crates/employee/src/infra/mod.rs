//! Infrastructure Layer
//!
//! Repository implementations: PostgreSQL as a JSONB document store, and an
//! in-process collection for tests and database-less runs.

pub mod memory;
pub mod postgres;
