//! Provides PostgreSQL database interaction functionalities using `sqlx`.
//!
//! Includes capabilities for establishing the connection pool, bootstrapping the
//! schema, and the read/write operations behind the `Repository` trait.
//! Also contains integration tests for database operations (requires the `integration-tests` feature).

use crate::db::Repository;
use crate::error::{AppError, Result};
use crate::models::{
    Department, Employee, EmployeeDetails, Id, NewEmployee, NewRole, Role, RoleDetails,
};
use crate::validation::{require_positive, require_text};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use tracing::{debug, error, info};

/// PostgreSQL-backed repository.
///
/// Holds a `sqlx::Pool` created once at startup and shared by every call.
pub struct PgRepository {
    pool: Pool<Postgres>,
}

impl PgRepository {
    /// Creates a new `PgRepository` by establishing a connection pool.
    ///
    /// # Arguments
    ///
    /// * `database_url` - The connection string for the PostgreSQL database.
    /// * `max_connections` - Upper bound for pooled connections.
    ///
    /// # Errors
    ///
    /// Returns `AppError::StoreUnavailable` if the pool cannot be established.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        info!("Connecting to database...");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| {
                error!("Failed to connect to database: {}", e);
                AppError::from(e)
            })?;

        info!("Connected to database successfully");
        Ok(Self { pool })
    }

    /// Creates the `department`, `role` and `employee` tables if they do not exist.
    ///
    /// Idempotent; safe to run on every start.
    ///
    /// # Errors
    ///
    /// Returns `AppError::StoreUnavailable` if any statement fails.
    pub async fn init_schema(&self) -> Result<()> {
        info!("Initializing database schema (if necessary)...");

        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS department (
                id SERIAL PRIMARY KEY,
                name VARCHAR(30) NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS role (
                id SERIAL PRIMARY KEY,
                title VARCHAR(30) NOT NULL,
                salary DECIMAL NOT NULL CHECK (salary > 0),
                department_id INTEGER NOT NULL REFERENCES department(id)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS employee (
                id SERIAL PRIMARY KEY,
                first_name VARCHAR(30) NOT NULL,
                last_name VARCHAR(30) NOT NULL,
                role_id INTEGER NOT NULL REFERENCES role(id),
                manager_id INTEGER REFERENCES employee(id) ON DELETE SET NULL
            )
            "#,
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    error!("Failed to initialize schema: {}", e);
                    AppError::from(e)
                })?;
        }

        info!("Database schema initialized successfully");
        Ok(())
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn list_departments(&self) -> Result<Vec<Department>> {
        debug!("Fetching departments");
        let departments =
            sqlx::query_as::<_, Department>("SELECT id, name FROM department ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    error!("Failed to fetch departments: {}", e);
                    AppError::from(e)
                })?;

        debug!("Retrieved {} departments", departments.len());
        Ok(departments)
    }

    async fn list_roles(&self) -> Result<Vec<RoleDetails>> {
        debug!("Fetching roles");
        let query = r#"
        SELECT r.id, r.title, r.salary, d.name AS department
        FROM role r
        JOIN department d ON r.department_id = d.id
        ORDER BY r.id
        "#;

        let roles = sqlx::query_as::<_, RoleDetails>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch roles: {}", e);
                AppError::from(e)
            })?;

        debug!("Retrieved {} roles", roles.len());
        Ok(roles)
    }

    async fn list_employees(&self) -> Result<Vec<EmployeeDetails>> {
        debug!("Fetching employees");
        // `||` yields NULL when there is no manager row, unlike CONCAT which
        // would produce a lone space.
        let query = r#"
        SELECT
            e.id,
            e.first_name,
            e.last_name,
            r.title,
            d.name AS department,
            r.salary,
            m.first_name || ' ' || m.last_name AS manager
        FROM employee e
        LEFT JOIN role r ON e.role_id = r.id
        LEFT JOIN department d ON r.department_id = d.id
        LEFT JOIN employee m ON e.manager_id = m.id
        ORDER BY e.id
        "#;

        let employees = sqlx::query_as::<_, EmployeeDetails>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch employees: {}", e);
                AppError::from(e)
            })?;

        debug!("Retrieved {} employees", employees.len());
        Ok(employees)
    }

    async fn add_department(&self, name: &str) -> Result<Department> {
        require_text(name, "Department name")?;
        let name = name.trim();

        let department = sqlx::query_as::<_, Department>(
            "INSERT INTO department (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to add department '{}': {}", name, e);
            AppError::from(e)
        })?;

        info!("Added department {} (id {})", department.name, department.id);
        Ok(department)
    }

    async fn add_role(&self, role: &NewRole) -> Result<Role> {
        require_text(&role.title, "Role title")?;
        require_positive(role.salary, "Salary")?;

        let created = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO role (title, salary, department_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, salary, department_id
            "#,
        )
        .bind(role.title.trim())
        .bind(role.salary)
        .bind(role.department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to add role '{}': {}", role.title, e);
            with_constraint_context(
                AppError::from(e),
                format!("Department {} does not exist", role.department_id),
            )
        })?;

        info!("Added role {} (id {})", created.title, created.id);
        Ok(created)
    }

    async fn add_employee(&self, employee: &NewEmployee) -> Result<Employee> {
        require_text(&employee.first_name, "First name")?;
        require_text(&employee.last_name, "Last name")?;

        let created = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employee (first_name, last_name, role_id, manager_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, role_id, manager_id
            "#,
        )
        .bind(employee.first_name.trim())
        .bind(employee.last_name.trim())
        .bind(employee.role_id)
        .bind(employee.manager_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Failed to add employee '{} {}': {}",
                employee.first_name, employee.last_name, e
            );
            let reference = match employee.manager_id {
                Some(manager_id) => format!(
                    "Role {} or manager {} does not exist",
                    employee.role_id, manager_id
                ),
                None => format!("Role {} does not exist", employee.role_id),
            };
            with_constraint_context(AppError::from(e), reference)
        })?;

        info!("Added employee {} (id {})", created.full_name(), created.id);
        Ok(created)
    }

    async fn update_employee_role(&self, employee_id: Id, role_id: Id) -> Result<Employee> {
        let updated = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employee SET role_id = $1 WHERE id = $2
            RETURNING id, first_name, last_name, role_id, manager_id
            "#,
        )
        .bind(role_id)
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to update role of employee {}: {}", employee_id, e);
            with_constraint_context(AppError::from(e), format!("Role {} does not exist", role_id))
        })?;

        match updated {
            Some(employee) => {
                info!("Employee {} now has role {}", employee.id, employee.role_id);
                Ok(employee)
            },
            None => Err(AppError::NotFound(format!(
                "Employee {} does not exist",
                employee_id
            ))),
        }
    }
}

/// Replaces the raw driver message of a foreign key failure with one naming the missing row.
fn with_constraint_context(err: AppError, message: String) -> AppError {
    match err {
        AppError::Constraint(_) => AppError::Constraint(message),
        other => other,
    }
}
