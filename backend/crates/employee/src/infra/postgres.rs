//! PostgreSQL Repository Implementation
//!
//! One table acts as the `employees` collection: a database-generated UUID
//! key beside a JSONB document.

use crate::domain::entity::{Employee, EmployeeDocument, EmployeePatch, NewEmployee};
use crate::domain::repository::EmployeeRepository;
use crate::error::EmployeeResult;
use kernel::id::EmployeeId;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

/// PostgreSQL-backed employee collection
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the collection if it does not exist yet
    pub async fn ensure_collection(&self) -> EmployeeResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                employee_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                document JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("Employees collection ready");

        Ok(())
    }
}

impl EmployeeRepository for PgEmployeeRepository {
    async fn insert_one(&self, employee: &NewEmployee) -> EmployeeResult<Employee> {
        let document = employee.clone().into_document();

        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (document)
            VALUES ($1)
            RETURNING employee_id, document
            "#,
        )
        .bind(Json(&document))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(employee_id = %row.employee_id, "Employee document inserted");

        Ok(row.into_employee())
    }

    async fn find_all(&self) -> EmployeeResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT employee_id, document
            FROM employees
            ORDER BY created_at, employee_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
    }

    async fn find_one(&self, id: &EmployeeId) -> EmployeeResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT employee_id, document
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EmployeeRow::into_employee))
    }

    async fn update_one(&self, id: &EmployeeId, patch: &EmployeePatch) -> EmployeeResult<u64> {
        // `||` on JSONB overwrites matching top-level keys and keeps the rest
        let matched = sqlx::query(
            r#"
            UPDATE employees
            SET document = document || $2
            WHERE employee_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(Json(patch))
        .execute(&self.pool)
        .await?
        .rows_affected();

        tracing::debug!(employee_id = %id, matched, "Employee document updated");

        Ok(matched)
    }

    async fn delete_one(&self, id: &EmployeeId) -> EmployeeResult<u64> {
        let deleted = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(employee_id = %id, deleted, "Employee document deleted");

        Ok(deleted)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    employee_id: Uuid,
    document: Json<EmployeeDocument>,
}

impl EmployeeRow {
    fn into_employee(self) -> Employee {
        Employee::from_document(EmployeeId::from_uuid(self.employee_id), self.document.0)
    }
}
