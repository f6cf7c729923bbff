//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::error::app_error::AppError;
use kernel::id::EmployeeId;
use std::sync::Arc;

use crate::application::{
    CreateEmployeeUseCase, DeleteEmployeeUseCase, GetEmployeeUseCase, ListEmployeesUseCase,
    UpdateEmployeeUseCase,
};
use crate::domain::repository::EmployeeRepository;
use crate::error::{EmployeeError, EmployeeResult};
use crate::presentation::dto::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use crate::presentation::extract::JsonBody;

/// Shared state for employee handlers
#[derive(Clone)]
pub struct EmployeeAppState<R>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /employees
pub async fn list_employees<R>(
    State(state): State<EmployeeAppState<R>>,
) -> EmployeeResult<Json<Vec<EmployeeResponse>>>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListEmployeesUseCase::new(state.repo.clone());

    let employees = use_case.execute().await?;

    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// GET /employees/{id}
pub async fn get_employee<R>(
    State(state): State<EmployeeAppState<R>>,
    Path(id): Path<String>,
) -> EmployeeResult<Json<EmployeeResponse>>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
{
    let id = parse_employee_id(&id)?;

    let use_case = GetEmployeeUseCase::new(state.repo.clone());

    let employee = use_case.execute(id).await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// POST /employees
pub async fn create_employee<R>(
    State(state): State<EmployeeAppState<R>>,
    JsonBody(req): JsonBody<CreateEmployeeRequest>,
) -> EmployeeResult<impl IntoResponse>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateEmployeeUseCase::new(state.repo.clone());

    let employee = use_case.execute(req.into()).await?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// PUT /employees/{id}
pub async fn update_employee<R>(
    State(state): State<EmployeeAppState<R>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateEmployeeRequest>,
) -> EmployeeResult<StatusCode>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
{
    let id = parse_employee_id(&id)?;

    let use_case = UpdateEmployeeUseCase::new(state.repo.clone());

    use_case.execute(id, req.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /employees/{id}
pub async fn delete_employee<R>(
    State(state): State<EmployeeAppState<R>>,
    Path(id): Path<String>,
) -> EmployeeResult<StatusCode>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
{
    let id = parse_employee_id(&id)?;

    let use_case = DeleteEmployeeUseCase::new(state.repo.clone());

    use_case.execute(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unmatched paths
pub async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}

// A malformed identifier can never match a stored record.
fn parse_employee_id(raw: &str) -> EmployeeResult<EmployeeId> {
    raw.parse().map_err(|_| EmployeeError::NotFound)
}
