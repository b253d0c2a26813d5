//! The persistence contract used by the menu controller.

use crate::error::Result;
use crate::models::{
    Department, Employee, EmployeeDetails, Id, NewEmployee, NewRole, Role, RoleDetails,
};
use async_trait::async_trait;

/// Typed read/write operations over departments, roles and employees.
///
/// Each call is a single round trip. Implementations surface every failure to
/// the caller: nothing returns a partial or default result.
#[async_trait]
pub trait Repository {
    /// All departments ordered by id.
    async fn list_departments(&self) -> Result<Vec<Department>>;

    /// All roles with their department name, ordered by id.
    async fn list_roles(&self) -> Result<Vec<RoleDetails>>;

    /// All employees with role, department, salary and manager name, ordered by id.
    async fn list_employees(&self) -> Result<Vec<EmployeeDetails>>;

    /// Fails with `AppError::Validation` for an empty name.
    async fn add_department(&self, name: &str) -> Result<Department>;

    /// Fails with `AppError::Constraint` when the department does not exist.
    async fn add_role(&self, role: &NewRole) -> Result<Role>;

    /// Fails with `AppError::Constraint` when the role or manager does not exist.
    async fn add_employee(&self, employee: &NewEmployee) -> Result<Employee>;

    /// Fails with `AppError::NotFound` when the employee does not exist.
    async fn update_employee_role(&self, employee_id: Id, role_id: Id) -> Result<Employee>;
}
