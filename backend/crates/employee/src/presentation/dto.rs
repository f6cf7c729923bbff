//! API DTOs (Data Transfer Objects)
//!
//! Explicit mappings between the wire shapes and domain types.

use crate::domain::entity::{Employee, EmployeePatch, NewEmployee};
use serde::{Deserialize, Serialize};

/// Employee as returned by every read and by create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub salary: f64,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.name,
            age: employee.age,
            salary: employee.salary,
        }
    }
}

/// Request for POST /employees
///
/// Extra keys are ignored; only the three employee fields are stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub age: u32,
    pub salary: f64,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            salary: req.salary,
        }
    }
}

/// Request for PUT /employees/{id}
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub salary: Option<f64>,
}

impl From<UpdateEmployeeRequest> for EmployeePatch {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            salary: req.salary,
        }
    }
}
