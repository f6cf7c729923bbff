//! Employee Router

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::domain::repository::EmployeeRepository;
use crate::presentation::handlers::{self, EmployeeAppState};
use crate::presentation::middleware::normalize_errors;

/// Create the employee router for any repository implementation
pub fn employee_router<R>(repo: R) -> Router
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
{
    let state = EmployeeAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/employees",
            get(handlers::list_employees::<R>).post(handlers::create_employee::<R>),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee::<R>)
                .put(handlers::update_employee::<R>)
                .delete(handlers::delete_employee::<R>),
        )
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn(normalize_errors))
        .with_state(state)
}
