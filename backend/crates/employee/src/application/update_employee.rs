//! Update Employee Use Case

use crate::domain::entity::EmployeePatch;
use crate::domain::repository::EmployeeRepository;
use crate::error::{EmployeeError, EmployeeResult};
use kernel::id::EmployeeId;
use std::sync::Arc;

pub struct UpdateEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateEmployeeUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Existence check, then partial merge of `patch` into the stored record
    pub async fn execute(&self, id: EmployeeId, patch: EmployeePatch) -> EmployeeResult<()> {
        if patch.is_empty() {
            return Err(EmployeeError::EmptyBody);
        }

        if self.repo.find_one(&id).await?.is_none() {
            return Err(EmployeeError::NotFound);
        }

        let matched = self.repo.update_one(&id, &patch).await?;
        if matched == 0 {
            return Err(EmployeeError::UpdateFailed);
        }

        tracing::info!(employee_id = %id, "Employee updated successfully!");

        Ok(())
    }
}
