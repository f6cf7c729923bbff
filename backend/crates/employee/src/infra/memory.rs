//! In-memory employee collection for tests/dev.

use crate::domain::entity::{Employee, EmployeePatch, NewEmployee};
use crate::domain::repository::EmployeeRepository;
use crate::error::EmployeeResult;
use kernel::id::EmployeeId;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local collection. Clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeRepository {
    records: Arc<RwLock<Vec<Employee>>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert_one(&self, employee: &NewEmployee) -> EmployeeResult<Employee> {
        let stored = Employee::from_document(EmployeeId::new(), employee.clone().into_document());
        self.records.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> EmployeeResult<Vec<Employee>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_one(&self, id: &EmployeeId) -> EmployeeResult<Option<Employee>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|employee| employee.id == *id)
            .cloned())
    }

    async fn update_one(&self, id: &EmployeeId, patch: &EmployeePatch) -> EmployeeResult<u64> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|employee| employee.id == *id) {
            Some(employee) => {
                employee.apply(patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, id: &EmployeeId) -> EmployeeResult<u64> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|employee| employee.id != *id);
        Ok((before - records.len()) as u64)
    }
}
