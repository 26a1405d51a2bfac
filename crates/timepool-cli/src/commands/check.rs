//! Environment verification: configuration, connectivity, schema, and
//! admin bootstrap state.

use crate::output;
use timepool_core::error::AppError;
use timepool_database::connection::DatabasePool;
use timepool_database::migration;
use timepool_database::repositories::admin::AdminCredentialRepository;

/// Execute the check command
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    println!("Checking TimePool environment...\n");

    let config = match super::load_config(config_path) {
        Ok(c) => {
            output::print_success(&format!("Configuration loaded from '{config_path}'"));
            c
        }
        Err(e) => {
            output::print_error(&format!("Configuration failed to load: {e}"));
            return Err(e);
        }
    };

    let db = match DatabasePool::connect(&config.database).await {
        Ok(db) => {
            output::print_success("Database connection established");
            db
        }
        Err(e) => {
            output::print_error(&format!("Database connection failed: {e}"));
            return Err(e);
        }
    };

    if db.health_check().await? {
        output::print_success("Database responds to queries");
    } else {
        output::print_error("Database health check returned an unexpected result");
        return Err(AppError::database("Health check failed"));
    }

    let missing = migration::missing_tables(db.pool()).await?;
    if missing.is_empty() {
        output::print_success("All required tables present");
    } else {
        output::print_error(&format!(
            "Missing tables: {}. Run 'timepool-cli migrate run'",
            missing.join(", ")
        ));
        return Err(AppError::database("Schema is incomplete"));
    }

    let admins = AdminCredentialRepository::new(db.pool().clone())
        .count()
        .await?;
    if admins == 0 {
        output::print_warning(
            "No admin credentials found. Create one with 'timepool-cli admin create <username>'",
        );
    } else {
        output::print_success(&format!("{admins} admin credential(s) configured"));
    }

    println!();
    output::print_success("Environment check passed");
    Ok(())
}
