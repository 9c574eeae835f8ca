//! Schema definitions and migration utilities.
//!
//! This module provides the embedded SQL schema definition and utilities
//! for managing database migrations.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the core schema (001_schema.sql).
pub const SCHEMA_MIGRATION: &str = include_str!("../../../migrations/001_schema.sql");

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
/// The migration checks for existing objects before creating them.
///
/// # Errors
///
/// Returns an error if the migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running schema migration (001_schema.sql)...");
    sqlx::raw_sql(SCHEMA_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Schema migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `notes` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_migration_creates_tables() {
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS notes"));
    }

    #[test]
    fn schema_migration_is_idempotent() {
        // Every CREATE in the migration must be guarded.
        for line in SCHEMA_MIGRATION.lines() {
            let line = line.trim_start();
            if line.starts_with("CREATE TABLE") {
                assert!(line.contains("IF NOT EXISTS"), "unguarded: {}", line);
            }
            if line.starts_with("CREATE INDEX") {
                assert!(line.contains("IF NOT EXISTS"), "unguarded: {}", line);
            }
        }
    }

    #[test]
    fn schema_migration_has_no_title_unique_index() {
        // Title uniqueness lives in the update handler's lookup. A database
        // constraint here would surface conflicts on the create path too,
        // which is not the contract.
        assert!(!SCHEMA_MIGRATION.to_lowercase().contains("unique"));
    }
}
