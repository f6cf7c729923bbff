//! Delete Employee Use Case

use crate::domain::repository::EmployeeRepository;
use crate::error::{EmployeeError, EmployeeResult};
use kernel::id::EmployeeId;
use std::sync::Arc;

pub struct DeleteEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: EmployeeId) -> EmployeeResult<()> {
        if self.repo.find_one(&id).await?.is_none() {
            return Err(EmployeeError::NotFound);
        }

        let deleted = self.repo.delete_one(&id).await?;
        if deleted == 0 {
            return Err(EmployeeError::DeleteFailed);
        }

        tracing::info!(employee_id = %id, "Employee deleted successfully!");

        Ok(())
    }
}
