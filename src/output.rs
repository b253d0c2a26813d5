//! Renders ordered record sequences as text.
//!
//! Kept apart from the menu state machine: the menu hands rows and an
//! `OutputFormat` to `render` and prints whatever comes back.

use crate::error::{AppError, Result};
use crate::models::{Department, EmployeeDetails, RoleDetails};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use std::str::FromStr;

/// How view results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Row-oriented table.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Config(format!(
                "Unknown output format '{}' (expected 'table' or 'json')",
                other
            ))),
        }
    }
}

/// A record that can be laid out as one table row.
pub trait TableRow {
    /// Column headers, in display order.
    const HEADERS: &'static [&'static str];

    /// Cell values matching `HEADERS`. Absent values are empty strings.
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Department {
    const HEADERS: &'static [&'static str] = &["id", "name"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl TableRow for RoleDetails {
    const HEADERS: &'static [&'static str] = &["id", "title", "salary", "department"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.salary.to_string(),
            self.department.clone(),
        ]
    }
}

impl TableRow for EmployeeDetails {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "title",
        "department",
        "salary",
        "manager",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.title.clone().unwrap_or_default(),
            self.department.clone().unwrap_or_default(),
            self.salary.map(|s| s.to_string()).unwrap_or_default(),
            self.manager.clone().unwrap_or_default(),
        ]
    }
}

/// Formats `rows` in the requested format. An empty slice yields an empty table
/// (headers only) or `[]`.
pub fn render<R: TableRow + Serialize>(format: OutputFormat, rows: &[R]) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

pub fn render_table<R: TableRow>(rows: &[R]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(R::HEADERS.to_vec());

    for row in rows {
        table.add_row(row.cells());
    }

    table.to_string()
}
