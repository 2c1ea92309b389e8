//! Schema bootstrap
//!
//! The schema is small and additive, so it is applied idempotently at startup
//! instead of through a migration history table.

use sqlx::PgPool;
use tracing::info;

/// DDL for the events table and its day-range index
pub const SCHEMA: &str = include_str!("../schema/0001_lab_events.sql");

/// Create the events table and index if they do not exist
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
