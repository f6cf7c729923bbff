//! Repository Traits
//!
//! Interface to the employee collection. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::{Employee, EmployeePatch, NewEmployee};
use crate::error::EmployeeResult;
use kernel::id::EmployeeId;

/// Employee collection trait
#[trait_variant::make(EmployeeRepository: Send)]
pub trait LocalEmployeeRepository {
    /// Insert a document; the store assigns the identifier
    async fn insert_one(&self, employee: &NewEmployee) -> EmployeeResult<Employee>;

    /// All documents, oldest first
    async fn find_all(&self) -> EmployeeResult<Vec<Employee>>;

    /// Find a document by identifier
    async fn find_one(&self, id: &EmployeeId) -> EmployeeResult<Option<Employee>>;

    /// Set the fields present in `patch`. Returns the matched count.
    async fn update_one(&self, id: &EmployeeId, patch: &EmployeePatch) -> EmployeeResult<u64>;

    /// Returns the deleted count
    async fn delete_one(&self, id: &EmployeeId) -> EmployeeResult<u64>;
}
