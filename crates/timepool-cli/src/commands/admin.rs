//! Admin credential management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use crate::output;
use timepool_auth::gate::AdminGate;
use timepool_auth::password::{PasswordHasher, PasswordPolicy};
use timepool_core::error::AppError;
use timepool_database::repositories::admin::AdminCredentialRepository;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin credential
    Create {
        /// Username (case-sensitive at login)
        username: String,
        /// Password; prompted interactively when omitted
        #[arg(long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    let gate = AdminGate::new(
        Arc::new(AdminCredentialRepository::new(pool)),
        PasswordHasher::new(),
        PasswordPolicy::new(&config.auth),
    );

    match &args.command {
        AdminCommand::Create { username, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt(format!("Password for '{username}'"))
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let identity = gate.bootstrap(username, &password).await?;
            output::print_success(&format!("Admin '{}' created", identity.username));
            output::print_kv("id", &identity.id.to_string());
        }
    }

    Ok(())
}
