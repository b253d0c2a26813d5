use crate::config::AppConfig;
use crate::db::PgRepository;
use crate::error::Result;
use crate::output::OutputFormat;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;

use super::{DialoguerPrompter, Menu};

/// Interactive tracker for departments, roles and employees
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// PostgreSQL connection string (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// How view results are printed
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Directory for log files (overrides TRACKER_LOG_DIR)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Create the department, role and employee tables if they are missing
    #[arg(long)]
    pub init_schema: bool,
}

/// CLI application: the configuration plus the one repository shared by every menu action.
pub struct App {
    config: AppConfig,
    repo: PgRepository,
}

impl App {
    /// Connects to the database (and optionally bootstraps the schema).
    ///
    /// Any failure here is fatal: the menu is never shown without a working connection.
    pub async fn new(config: AppConfig) -> Result<Self> {
        let repo = PgRepository::connect(&config.database_url, config.max_connections).await?;

        if config.init_schema {
            repo.init_schema().await?;
        }

        Ok(Self { config, repo })
    }

    /// Runs the interactive menu on the terminal until the operator exits.
    pub async fn run(self) -> Result<()> {
        info!("Starting menu with {:?} output", self.config.output);
        let mut menu = Menu::new(
            self.repo,
            DialoguerPrompter::new(),
            io::stdout(),
            self.config.output,
        );
        menu.run().await
    }
}
