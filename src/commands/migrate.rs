//! Migrate command - manual control over the articles schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Migrations are applied explicitly here, never on connect
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await.map_err(migration_failed)?;
            tracing::info!("Articles schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await.map_err(migration_failed)?;
            tracing::info!("Rolled back the last articles migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await.map_err(migration_failed)? {
                let state = if applied { "applied" } else { "pending" };
                println!("{:<8} {}", state, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping and recreating the articles schema");
            db.fresh_migrations().await.map_err(migration_failed)?;
            tracing::info!("Articles schema recreated");
        }
    }

    Ok(())
}

fn migration_failed(err: sea_orm::DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", err))
}
