//! Test doubles for the menu: a scripted prompter and an in-memory repository.

use crate::cli::prompt::{Choice, Prompter};
use crate::db::Repository;
use crate::error::{AppError, Result};
use crate::models::{
    Department, Employee, EmployeeDetails, Id, NewEmployee, NewRole, Role, RoleDetails,
};
use crate::validation::{require_positive, require_text, Validator};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Answer that dismisses the current prompt.
pub const CANCEL: &str = "<cancel>";

/// Replays canned answers. Text answers go through the validator exactly like
/// the terminal prompt; select answers are matched against choice labels.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Validator messages shown for rejected text, in order.
    pub rejections: Vec<String>,
    /// Every question asked, in order.
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            rejections: Vec::new(),
            asked: Vec::new(),
        }
    }

    fn next_answer(&mut self) -> Result<String> {
        match self.answers.pop_front() {
            Some(answer) if answer == CANCEL => Err(AppError::Cancelled),
            Some(answer) => Ok(answer),
            None => Err(AppError::Cancelled),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str, validate: Validator) -> Result<String> {
        self.asked.push(message.to_string());
        loop {
            let answer = self.next_answer()?;
            match validate(&answer) {
                Ok(()) => return Ok(answer.trim().to_string()),
                Err(msg) => self.rejections.push(msg),
            }
        }
    }

    fn select<T: Clone>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<T> {
        self.asked.push(message.to_string());
        if choices.is_empty() {
            return Err(AppError::NoChoices(message.to_string()));
        }
        let answer = self.next_answer()?;
        let picked = choices
            .iter()
            .find(|c| c.label == answer)
            .unwrap_or_else(|| panic!("no choice labelled '{}' for '{}'", answer, message));
        Ok(picked.value.clone())
    }
}

/// Call counters and rows held by `MockRepository`.
#[derive(Default)]
pub struct MockState {
    pub departments: Vec<Department>,
    pub roles: Vec<Role>,
    pub employees: Vec<Employee>,
    next_id: Id,
    pub list_calls: usize,
    pub mutation_calls: usize,
    /// When set, every call fails with this error.
    pub fail_with: Option<AppError>,
}

impl MockState {
    fn id(&mut self) -> Id {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory `Repository` with the same reference checks as the database schema.
#[derive(Clone, Default)]
pub struct MockRepository {
    pub state: Arc<Mutex<MockState>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, err: AppError) {
        self.state.lock().unwrap().fail_with = Some(err);
    }

    fn check(&self, mutation: bool) -> Result<std::sync::MutexGuard<'_, MockState>> {
        let mut state = self.state.lock().unwrap();
        if mutation {
            state.mutation_calls += 1;
        } else {
            state.list_calls += 1;
        }
        match state.fail_with.clone() {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl Repository for MockRepository {
    async fn list_departments(&self) -> Result<Vec<Department>> {
        Ok(self.check(false)?.departments.clone())
    }

    async fn list_roles(&self) -> Result<Vec<RoleDetails>> {
        let state = self.check(false)?;
        Ok(state
            .roles
            .iter()
            .filter_map(|r| {
                let department = state.departments.iter().find(|d| d.id == r.department_id)?;
                Some(RoleDetails {
                    id: r.id,
                    title: r.title.clone(),
                    salary: r.salary,
                    department: department.name.clone(),
                })
            })
            .collect())
    }

    async fn list_employees(&self) -> Result<Vec<EmployeeDetails>> {
        let state = self.check(false)?;
        Ok(state
            .employees
            .iter()
            .map(|e| {
                let role = state.roles.iter().find(|r| r.id == e.role_id);
                let department = role
                    .and_then(|r| state.departments.iter().find(|d| d.id == r.department_id));
                let manager = e
                    .manager_id
                    .and_then(|id| state.employees.iter().find(|m| m.id == id));
                EmployeeDetails {
                    id: e.id,
                    first_name: e.first_name.clone(),
                    last_name: e.last_name.clone(),
                    title: role.map(|r| r.title.clone()),
                    department: department.map(|d| d.name.clone()),
                    salary: role.map(|r| r.salary),
                    manager: manager.map(Employee::full_name),
                }
            })
            .collect())
    }

    async fn add_department(&self, name: &str) -> Result<Department> {
        let mut state = self.check(true)?;
        require_text(name, "Department name")?;
        let department = Department {
            id: state.id(),
            name: name.trim().to_string(),
        };
        state.departments.push(department.clone());
        Ok(department)
    }

    async fn add_role(&self, role: &NewRole) -> Result<Role> {
        let mut state = self.check(true)?;
        require_text(&role.title, "Role title")?;
        require_positive(role.salary, "Salary")?;
        if !state.departments.iter().any(|d| d.id == role.department_id) {
            return Err(AppError::Constraint(format!(
                "Department {} does not exist",
                role.department_id
            )));
        }
        let created = Role {
            id: state.id(),
            title: role.title.clone(),
            salary: role.salary,
            department_id: role.department_id,
        };
        state.roles.push(created.clone());
        Ok(created)
    }

    async fn add_employee(&self, employee: &NewEmployee) -> Result<Employee> {
        let mut state = self.check(true)?;
        require_text(&employee.first_name, "First name")?;
        require_text(&employee.last_name, "Last name")?;
        let role_exists = state.roles.iter().any(|r| r.id == employee.role_id);
        let manager_exists = employee
            .manager_id
            .map_or(true, |id| state.employees.iter().any(|e| e.id == id));
        if !role_exists || !manager_exists {
            return Err(AppError::Constraint("referenced row does not exist".into()));
        }
        let created = Employee {
            id: state.id(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            role_id: employee.role_id,
            manager_id: employee.manager_id,
        };
        state.employees.push(created.clone());
        Ok(created)
    }

    async fn update_employee_role(&self, employee_id: Id, role_id: Id) -> Result<Employee> {
        let mut state = self.check(true)?;
        let role_exists = state.roles.iter().any(|r| r.id == role_id);
        let employee = state
            .employees
            .iter_mut()
            .find(|e| e.id == employee_id)
            .ok_or_else(|| AppError::NotFound(format!("Employee {} does not exist", employee_id)))?;
        if !role_exists {
            return Err(AppError::Constraint(format!("Role {} does not exist", role_id)));
        }
        employee.role_id = role_id;
        Ok(employee.clone())
    }
}
