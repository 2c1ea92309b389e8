//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use secretary_core::entities::LabEvent;
use secretary_core::traits::{EventRepository, RepoResult};
use secretary_core::value_objects::EventType;

use crate::models::LabEventModel;

use super::error::map_db_error;

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn count_since(&self, username: &str, since: DateTime<Utc>) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM lab_events
            WHERE username = $1 AND created_at >= $2
            ",
        )
        .bind(username)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn append(&self, username: &str, event_type: EventType) -> RepoResult<LabEvent> {
        let model = sqlx::query_as::<_, LabEventModel>(
            r"
            INSERT INTO lab_events (username, event_type)
            VALUES ($1, $2)
            RETURNING id, username, event_type, created_at
            ",
        )
        .bind(username)
        .bind(event_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        LabEvent::try_from(model)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
