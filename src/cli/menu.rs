//! The interactive menu: a loop over `MenuState` that always returns to the
//! top-level menu until the operator picks "Exit".

use crate::cli::forms;
use crate::cli::prompt::{Choice, Prompter};
use crate::db::Repository;
use crate::error::{AppError, Result};
use crate::output::{render, OutputFormat};
use colored::*;
use std::io::Write;
use tracing::{error, info};

/// States of the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    TopMenu,
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl MenuState {
    /// Entries of the top-level menu, in display order.
    pub const ACTIONS: [MenuState; 8] = [
        MenuState::ViewDepartments,
        MenuState::ViewRoles,
        MenuState::ViewEmployees,
        MenuState::AddDepartment,
        MenuState::AddRole,
        MenuState::AddEmployee,
        MenuState::UpdateEmployeeRole,
        MenuState::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuState::TopMenu => "Main menu",
            MenuState::ViewDepartments => "View all departments",
            MenuState::ViewRoles => "View all roles",
            MenuState::ViewEmployees => "View all employees",
            MenuState::AddDepartment => "Add a department",
            MenuState::AddRole => "Add a role",
            MenuState::AddEmployee => "Add an employee",
            MenuState::UpdateEmployeeRole => "Update an employee role",
            MenuState::Exit => "Exit",
        }
    }

    fn choices() -> Vec<Choice<MenuState>> {
        Self::ACTIONS
            .iter()
            .map(|&state| Choice::new(state.label(), state))
            .collect()
    }
}

/// Drives the menu. Owns the repository (constructed once at startup), the
/// prompter and the writer that receives tables and confirmations.
pub struct Menu<R, P, W> {
    repo: R,
    prompter: P,
    out: W,
    format: OutputFormat,
}

impl<R: Repository, P: Prompter, W: Write> Menu<R, P, W> {
    pub fn new(repo: R, prompter: P, out: W, format: OutputFormat) -> Self {
        Self {
            repo,
            prompter,
            out,
            format,
        }
    }

    /// Runs until the operator exits.
    ///
    /// Failures inside an action are reported and the loop continues; only a
    /// broken terminal or output stream ends it early.
    pub async fn run(&mut self) -> Result<()> {
        let mut state = MenuState::TopMenu;
        loop {
            state = match state {
                MenuState::TopMenu => self.choose_action()?,
                MenuState::Exit => {
                    writeln!(self.out, "{}", "Goodbye!".green())?;
                    info!("Operator exited");
                    return Ok(());
                },
                action => {
                    self.step(action).await?;
                    MenuState::TopMenu
                },
            };
        }
    }

    /// Performs one action and reports its outcome. Only output failures propagate.
    pub async fn step(&mut self, action: MenuState) -> Result<()> {
        info!("Running action: {}", action.label());
        match self.perform(action).await {
            Ok(()) => {},
            Err(AppError::Cancelled) => {
                info!("Action '{}' cancelled", action.label());
                writeln!(self.out, "{}", "Cancelled.".yellow())?;
            },
            Err(e) => {
                error!("Action '{}' failed: {:?}", action.label(), e);
                writeln!(self.out, "{} {}", "Error:".red(), e.to_string().red())?;
            },
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn choose_action(&mut self) -> Result<MenuState> {
        match self
            .prompter
            .select("What would you like to do?", &MenuState::choices())
        {
            Ok(state) => Ok(state),
            // Esc / Ctrl+C at the top level means "leave".
            Err(AppError::Cancelled) => Ok(MenuState::Exit),
            Err(e) => Err(e),
        }
    }

    async fn perform(&mut self, action: MenuState) -> Result<()> {
        match action {
            MenuState::ViewDepartments => {
                let departments = self.repo.list_departments().await?;
                self.print(&render(self.format, &departments)?)
            },
            MenuState::ViewRoles => {
                let roles = self.repo.list_roles().await?;
                self.print(&render(self.format, &roles)?)
            },
            MenuState::ViewEmployees => {
                let employees = self.repo.list_employees().await?;
                self.print(&render(self.format, &employees)?)
            },
            MenuState::AddDepartment => {
                let name = forms::ask_department(&mut self.prompter)?;
                let department = self.repo.add_department(&name).await?;
                self.confirm(&format!("Added {} department to the database", department.name))
            },
            MenuState::AddRole => {
                let departments = self.repo.list_departments().await?;
                let new_role = forms::ask_role(&mut self.prompter, &departments)?;
                let role = self.repo.add_role(&new_role).await?;
                self.confirm(&format!("Added {} role to the database", role.title))
            },
            MenuState::AddEmployee => {
                let roles = self.repo.list_roles().await?;
                let employees = self.repo.list_employees().await?;
                let new_employee = forms::ask_employee(&mut self.prompter, &roles, &employees)?;
                let employee = self.repo.add_employee(&new_employee).await?;
                self.confirm(&format!("Added {} to the database", employee.full_name()))
            },
            MenuState::UpdateEmployeeRole => {
                let employees = self.repo.list_employees().await?;
                let roles = self.repo.list_roles().await?;
                let change = forms::ask_role_change(&mut self.prompter, &employees, &roles)?;
                self.repo
                    .update_employee_role(change.employee_id, change.role_id)
                    .await?;
                self.confirm("Updated employee role")
            },
            MenuState::TopMenu | MenuState::Exit => Ok(()),
        }
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn confirm(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message.green())?;
        Ok(())
    }
}
