//! Local input rules shared by the prompt forms and the repository.
//!
//! The prompt layer uses the `fn(&str) -> Result<(), String>` validators to
//! re-ask a question; the repository calls `require_text` / `require_positive`
//! again before touching the database.

use crate::error::{AppError, Result};
use sqlx::types::Decimal;
use std::str::FromStr;

/// Column width of every name and title in the schema (`VARCHAR(30)`).
pub const MAX_TEXT_LEN: usize = 30;

/// Signature of a free-text validator: `Err` carries the message shown to the operator.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

pub fn department_name(input: &str) -> std::result::Result<(), String> {
    text_field(input, "Department name")
}

pub fn role_title(input: &str) -> std::result::Result<(), String> {
    text_field(input, "Role title")
}

pub fn first_name(input: &str) -> std::result::Result<(), String> {
    text_field(input, "First name")
}

pub fn last_name(input: &str) -> std::result::Result<(), String> {
    text_field(input, "Last name")
}

pub fn salary(input: &str) -> std::result::Result<(), String> {
    parse_salary(input).map(|_| ()).map_err(|e| match e {
        AppError::Validation(msg) => msg,
        other => other.to_string(),
    })
}

/// Parses operator text into a positive salary. Exponent form (`8.5e4`) is accepted.
pub fn parse_salary(input: &str) -> Result<Decimal> {
    let input = input.trim();
    let value = Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .map_err(|_| AppError::Validation("Salary must be a number".to_string()))?;
    require_positive(value, "Salary")?;
    Ok(value)
}

/// Rejects empty, whitespace-only and over-long text.
pub fn require_text(value: &str, field: &str) -> Result<()> {
    text_field(value, field).map_err(AppError::Validation)
}

pub fn require_positive(value: Decimal, field: &str) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(AppError::Validation(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(())
}

fn text_field(input: &str, field: &str) -> std::result::Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(format!("{} cannot be empty", field))
    } else if trimmed.chars().count() > MAX_TEXT_LEN {
        Err(format!("{} must be at most {} characters", field, MAX_TEXT_LEN))
    } else {
        Ok(())
    }
}
