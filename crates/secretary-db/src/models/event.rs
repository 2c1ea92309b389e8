//! Lab event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the lab_events table
#[derive(Debug, Clone, FromRow)]
pub struct LabEventModel {
    pub id: i64,
    pub username: String,
    pub event_type: String,
    pub created_at: DateTime<Utc>,
}
