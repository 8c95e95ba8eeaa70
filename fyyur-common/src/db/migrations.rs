//! Database schema migrations
//!
//! Versioned upgrades for databases created by older releases. Fresh
//! databases already get the current schema from `init`, so every migration
//! checks before it alters anything.
//!
//! Add one `migrate_vN` per schema change and bump
//! [`CURRENT_SCHEMA_VERSION`]; released migrations are never edited.

use crate::Result;
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Schema version this build writes
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Get current schema version from database
///
/// Returns 0 if schema_version table doesn't exist or has no rows
pub async fn get_schema_version(pool: &SqlitePool) -> Result<i32> {
    let table_exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM sqlite_master
            WHERE type='table' AND name='schema_version'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_optional(pool)
            .await?;

    Ok(version.unwrap_or(0))
}

async fn set_schema_version(pool: &SqlitePool, version: i32) -> Result<()> {
    sqlx::query("INSERT OR IGNORE INTO schema_version (version) VALUES (?)")
        .bind(version)
        .execute(pool)
        .await?;

    Ok(())
}

/// Run all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let current_version = get_schema_version(pool).await?;

    if current_version == CURRENT_SCHEMA_VERSION {
        info!("Database schema is up to date (v{})", current_version);
        return Ok(());
    }

    if current_version > CURRENT_SCHEMA_VERSION {
        warn!(
            "Database schema version ({}) is newer than code version ({})",
            current_version, CURRENT_SCHEMA_VERSION
        );
        return Ok(());
    }

    info!(
        "Running database migrations: v{} -> v{}",
        current_version, CURRENT_SCHEMA_VERSION
    );

    if current_version < 1 {
        migrate_v1(pool).await?;
        set_schema_version(pool, 1).await?;
        info!("✓ Migration v1 completed");
    }

    Ok(())
}

/// Migration v1: artists gained a `website` column
async fn migrate_v1(pool: &SqlitePool) -> Result<()> {
    let has_column: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pragma_table_info('artists') WHERE name = 'website'",
    )
    .fetch_one(pool)
    .await?;

    if has_column > 0 {
        info!("  artists.website already exists - skipping");
        return Ok(());
    }

    match sqlx::query("ALTER TABLE artists ADD COLUMN website TEXT")
        .execute(pool)
        .await
    {
        Ok(_) => {
            info!("  ✓ Added website column to artists table");
            Ok(())
        }
        Err(sqlx::Error::Database(db_err)) if db_err.message().contains("duplicate column") => {
            info!("  website column added by concurrent initialization - skipping");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
