//! Question sequences for the add/update actions.
//!
//! Option lists are built from rows the caller fetched immediately before the
//! prompt, so every picker reflects what is currently persisted.

use crate::cli::prompt::{Choice, Prompter};
use crate::error::Result;
use crate::models::{Department, EmployeeDetails, Id, NewEmployee, NewRole, RoleChange, RoleDetails};
use crate::validation::{self, parse_salary};

pub fn department_choices(departments: &[Department]) -> Vec<Choice<Id>> {
    departments
        .iter()
        .map(|d| Choice::new(d.name.clone(), d.id))
        .collect()
}

pub fn role_choices(roles: &[RoleDetails]) -> Vec<Choice<Id>> {
    roles
        .iter()
        .map(|r| Choice::new(r.title.clone(), r.id))
        .collect()
}

pub fn employee_choices(employees: &[EmployeeDetails]) -> Vec<Choice<Id>> {
    employees
        .iter()
        .map(|e| Choice::new(e.full_name(), e.id))
        .collect()
}

/// Employees as managers, preceded by an explicit "None" option.
pub fn manager_choices(employees: &[EmployeeDetails]) -> Vec<Choice<Option<Id>>> {
    std::iter::once(Choice::new("None", None))
        .chain(employees.iter().map(|e| Choice::new(e.full_name(), Some(e.id))))
        .collect()
}

pub fn ask_department<P: Prompter>(prompter: &mut P) -> Result<String> {
    prompter.text(
        "What is the name of the department?",
        validation::department_name,
    )
}

pub fn ask_role<P: Prompter>(prompter: &mut P, departments: &[Department]) -> Result<NewRole> {
    let title = prompter.text("What is the title of the role?", validation::role_title)?;
    let salary = prompter.text("What is the salary for this role?", validation::salary)?;
    let department_id = prompter.select(
        "Which department does this role belong to?",
        &department_choices(departments),
    )?;

    Ok(NewRole {
        title,
        salary: parse_salary(&salary)?,
        department_id,
    })
}

pub fn ask_employee<P: Prompter>(
    prompter: &mut P,
    roles: &[RoleDetails],
    employees: &[EmployeeDetails],
) -> Result<NewEmployee> {
    let first_name = prompter.text("What is the employee's first name?", validation::first_name)?;
    let last_name = prompter.text("What is the employee's last name?", validation::last_name)?;
    let role_id = prompter.select("What is the employee's role?", &role_choices(roles))?;
    let manager_id = prompter.select(
        "Who is the employee's manager?",
        &manager_choices(employees),
    )?;

    Ok(NewEmployee {
        first_name,
        last_name,
        role_id,
        manager_id,
    })
}

pub fn ask_role_change<P: Prompter>(
    prompter: &mut P,
    employees: &[EmployeeDetails],
    roles: &[RoleDetails],
) -> Result<RoleChange> {
    let employee_id = prompter.select(
        "Which employee would you like to update?",
        &employee_choices(employees),
    )?;
    let role_id = prompter.select("What is their new role?", &role_choices(roles))?;

    Ok(RoleChange {
        employee_id,
        role_id,
    })
}
