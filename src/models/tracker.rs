//! Defines data structures for the employee tracker.
//!
//! Includes structs for:
//! - Rows of the three tables (`Department`, `Role`, `Employee`).
//! - Joined, display-ready views (`RoleDetails`, `EmployeeDetails`).
//! - Records collected by the prompt forms before a mutation (`NewRole`, `NewEmployee`, `RoleChange`).

use serde::{Serialize, Serializer};
use sqlx::types::Decimal;

/// Database identifier (`SERIAL` columns).
pub type Id = i32;

// --- Table rows ---

/// A row of the `department` table.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Department {
    pub id: Id,
    pub name: String,
}

/// A row of the `role` table.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Role {
    pub id: Id,
    pub title: String,
    #[serde(serialize_with = "decimal_as_string")]
    pub salary: Decimal,
    pub department_id: Id,
}

/// A row of the `employee` table.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Employee {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub role_id: Id,
    /// `None` means the employee has no manager.
    pub manager_id: Option<Id>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// --- Joined views ---

/// A role joined with the name of its department.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct RoleDetails {
    pub id: Id,
    pub title: String,
    #[serde(serialize_with = "decimal_as_string")]
    pub salary: Decimal,
    pub department: String,
}

/// An employee joined with role title, department, salary and manager name.
///
/// Role columns come from outer joins and are therefore optional.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct EmployeeDetails {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub department: Option<String>,
    #[serde(serialize_with = "optional_decimal_as_string")]
    pub salary: Option<Decimal>,
    /// Manager's "first last" name, `None` when the employee has no manager.
    pub manager: Option<String>,
}

impl EmployeeDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// --- Form records ---

/// Input for creating a role.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub title: String,
    pub salary: Decimal,
    pub department_id: Id,
}

/// Input for creating an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: Id,
    pub manager_id: Option<Id>,
}

/// Input for reassigning an employee to a different role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleChange {
    pub employee_id: Id,
    pub role_id: Id,
}

// `Decimal` only implements `Serialize` with rust_decimal's serde feature, which sqlx
// does not enable; serialize through its `Display` form instead.
fn decimal_as_string<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn optional_decimal_as_string<S: Serializer>(
    value: &Option<Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.collect_str(v),
        None => serializer.serialize_none(),
    }
}
