//! Resolves runtime configuration from the environment (optionally a `.env` file)
//! and command line overrides.
//!
//! Connection parameters are never hard-wired into the core; the resolved
//! `AppConfig` is built once at startup and handed to `App`.

use crate::cli::Cli;
use crate::error::{AppError, Result};
use crate::output::OutputFormat;
use std::env;
use std::path::PathBuf;

const DEFAULT_MAX_CONNECTIONS: u32 = 1;
const DEFAULT_LOG_DIR: &str = "logs";

/// Fully resolved application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    /// Upper bound for the connection pool; one long-lived connection by default.
    pub max_connections: u32,
    pub output: OutputFormat,
    pub log_dir: PathBuf,
    /// Create the tables (if missing) before showing the menu.
    pub init_schema: bool,
}

impl AppConfig {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, which returns the value of a variable if set.
    ///
    /// `DATABASE_URL` wins when present; otherwise the URL is assembled from the
    /// libpq-style `PG*` variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => compose_database_url(&lookup),
        };

        let max_connections = match lookup("TRACKER_MAX_CONNECTIONS") {
            Some(raw) => parse_max_connections(&raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let output = match lookup("TRACKER_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        let log_dir = lookup("TRACKER_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));

        Ok(Self {
            database_url,
            max_connections,
            output,
            log_dir,
            init_schema: false,
        })
    }

    /// Loads `.env` (if any), reads the environment and applies CLI flags on top.
    pub fn load(cli: &Cli) -> Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self::from_env()?.with_overrides(cli))
    }

    /// Applies command line flags, which take precedence over the environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.database_url {
            self.database_url = url.clone();
        }
        if let Some(output) = cli.output {
            self.output = output;
        }
        if let Some(dir) = &cli.log_dir {
            self.log_dir = dir.clone();
        }
        self.init_schema |= cli.init_schema;
        self
    }

    /// One-line description for the log, with any password in the URL masked.
    pub fn summary(&self) -> String {
        format!(
            "database_url={} max_connections={} output={:?} log_dir={} init_schema={}",
            redact_password(&self.database_url),
            self.max_connections,
            self.output,
            self.log_dir.display(),
            self.init_schema
        )
    }
}

fn redact_password(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((userinfo, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    match userinfo.split_once(':') {
        Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
        None => url.to_string(),
    }
}

fn compose_database_url<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("PGHOST").unwrap_or_else(|| "localhost".to_string());
    let port = lookup("PGPORT").unwrap_or_else(|| "5432".to_string());
    let user = lookup("PGUSER").unwrap_or_else(|| "postgres".to_string());
    let password = lookup("PGPASSWORD").unwrap_or_default();
    let database = lookup("PGDATABASE").unwrap_or_else(|| "employees".to_string());

    if password.is_empty() {
        format!("postgres://{}@{}:{}/{}", user, host, port, database)
    } else {
        format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, database)
    }
}

fn parse_max_connections(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Config(format!(
            "TRACKER_MAX_CONNECTIONS must be a positive integer, got '{}'",
            raw
        ))),
    }
}
