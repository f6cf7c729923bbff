//! Create Employee Use Case

use crate::domain::entity::{Employee, NewEmployee};
use crate::domain::repository::EmployeeRepository;
use crate::error::EmployeeResult;
use std::sync::Arc;

pub struct CreateEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    repo: Arc<R>,
}

impl<R> CreateEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: NewEmployee) -> EmployeeResult<Employee> {
        let employee = self.repo.insert_one(&input).await?;

        tracing::info!(employee_id = %employee.id, "Employee created");

        Ok(employee)
    }
}
