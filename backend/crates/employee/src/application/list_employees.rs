//! List Employees Use Case

use crate::domain::entity::Employee;
use crate::domain::repository::EmployeeRepository;
use crate::error::EmployeeResult;
use std::sync::Arc;

pub struct ListEmployeesUseCase<R>
where
    R: EmployeeRepository,
{
    repo: Arc<R>,
}

impl<R> ListEmployeesUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every stored employee; an empty collection is not an error
    pub async fn execute(&self) -> EmployeeResult<Vec<Employee>> {
        let employees = self.repo.find_all().await?;

        tracing::debug!(count = employees.len(), "Listed employees");

        Ok(employees)
    }
}
