//! CLI command definitions and dispatch.

pub mod admin;
pub mod check;
pub mod migrate;
pub mod session;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use timepool_core::error::AppError;

/// TimePool — competitive session time prediction
#[derive(Debug, Parser)]
#[command(name = "timepool", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin credential management
    Admin(admin::AdminArgs),
    /// Registered user listing
    User(user::UserArgs),
    /// Session listing
    Session(session::SessionArgs),
    /// Verify configuration, database connectivity, and schema
    Check,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Admin(args) => admin::execute(args, &self.config).await,
            Commands::User(args) => user::execute(args, &self.config, self.format).await,
            Commands::Session(args) => session::execute(args, &self.config, self.format).await,
            Commands::Check => check::execute(&self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<timepool_core::config::AppConfig, AppError> {
    timepool_core::config::AppConfig::load(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(
    config: &timepool_core::config::AppConfig,
) -> Result<sqlx::PgPool, AppError> {
    let pool = timepool_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
