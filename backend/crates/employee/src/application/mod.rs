//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! One use case per resource operation.

pub mod create_employee;
pub mod delete_employee;
pub mod get_employee;
pub mod list_employees;
pub mod update_employee;

pub use create_employee::CreateEmployeeUseCase;
pub use delete_employee::DeleteEmployeeUseCase;
pub use get_employee::GetEmployeeUseCase;
pub use list_employees::ListEmployeesUseCase;
pub use update_employee::UpdateEmployeeUseCase;
