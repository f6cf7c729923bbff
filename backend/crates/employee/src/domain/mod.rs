//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Employee, NewEmployee, EmployeePatch)
//! - Repository traits (interfaces)

pub mod entity;
pub mod repository;
