mod cli;
mod config;
mod db;
mod error;
mod logging;
mod models;
mod output;
mod validation;

use clap::Parser;
use cli::{App, Cli};
use colored::*;
use config::AppConfig;
use error::Result;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            println!("{} {}", "Error: Invalid configuration:".red(), e);
            return Err(e);
        },
    };

    if let Err(e) = logging::init(&config.log_dir) {
        println!("{} {}", "Error: Failed to set up logging:".red(), e);
        return Err(e);
    }

    debug!("Resolved configuration: {}", config.summary());
    info!("Initializing employee tracker...");

    // A working connection is a precondition for showing the menu at all.
    let app = match App::new(config).await {
        Ok(app) => {
            info!("Application initialized successfully.");
            app
        },
        Err(e) => {
            error!("Failed to initialize application: {:?}", e);
            println!(
                "{} {}",
                "Error: Failed to initialize application:".red(),
                e.to_string().red()
            );
            return Err(e);
        },
    };

    println!("{}", "Welcome to the Employee Tracker".cyan().bold());

    app.run().await
}
