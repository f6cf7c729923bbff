//! Get Employee Use Case

use crate::domain::entity::Employee;
use crate::domain::repository::EmployeeRepository;
use crate::error::{EmployeeError, EmployeeResult};
use kernel::id::EmployeeId;
use std::sync::Arc;

pub struct GetEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    repo: Arc<R>,
}

impl<R> GetEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: EmployeeId) -> EmployeeResult<Employee> {
        self.repo
            .find_one(&id)
            .await?
            .ok_or(EmployeeError::NotFound)
    }
}
