//! Domain Entities
//!
//! The employee record and the two shapes used to write it.

use kernel::id::EmployeeId;
use serde::{Deserialize, Serialize};

/// Employee entity - a stored record with a store-assigned identifier
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: u32,
    pub salary: f64,
}

impl Employee {
    /// Attach a store-assigned identifier to a document
    pub fn from_document(id: EmployeeId, document: EmployeeDocument) -> Self {
        Self {
            id,
            name: document.name,
            age: document.age,
            salary: document.salary,
        }
    }

    /// Replace the fields present in `patch`. The identifier never changes.
    pub fn apply(&mut self, patch: &EmployeePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
    }
}

/// Fields of an employee before the store assigns an identifier
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub age: u32,
    pub salary: f64,
}

impl NewEmployee {
    pub fn into_document(self) -> EmployeeDocument {
        EmployeeDocument {
            name: self.name,
            age: self.age,
            salary: self.salary,
        }
    }
}

/// Stored document body. The identifier lives beside it, not inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    pub name: String,
    pub age: u32,
    pub salary: f64,
}

/// Partial update: `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.salary.is_none()
    }
}
