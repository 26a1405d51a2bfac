//! Session listing CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use timepool_core::error::AppError;
use timepool_database::repositories::session::SessionRepository;

/// Arguments for session commands
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Session subcommand
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// List all sessions
    List,
}

/// Session display row for table output
#[derive(Debug, Serialize, Tabled)]
struct SessionRow {
    /// Session ID
    id: String,
    /// Name
    name: String,
    /// Recorded times
    times: String,
    /// Duration in minutes
    duration: String,
    /// Open or closed
    state: String,
    /// Created at
    created_at: String,
}

/// Execute session commands
pub async fn execute(
    args: &SessionArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let session_repo = SessionRepository::new(pool);

    match &args.command {
        SessionCommand::List => {
            let sessions = session_repo.find_all().await?;

            let rows: Vec<SessionRow> = sessions
                .iter()
                .map(|s| SessionRow {
                    id: s.id.to_string(),
                    name: s.name.clone(),
                    times: match (&s.start_time, &s.end_time) {
                        (Some(start), Some(end)) => format!("{start}–{end}"),
                        _ => "—".to_string(),
                    },
                    duration: s
                        .actual_duration_minutes
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "—".to_string()),
                    state: if s.is_closed { "closed" } else { "open" }.to_string(),
                    created_at: s.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
