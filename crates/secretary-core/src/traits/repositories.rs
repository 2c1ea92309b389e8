//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::LabEvent;
use crate::error::DomainError;
use crate::value_objects::EventType;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Event Repository
// ============================================================================

/// Append-only store of lab events
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Count events for `username` created at or after `since`
    async fn count_since(&self, username: &str, since: DateTime<Utc>) -> RepoResult<i64>;

    /// Append a new event; `created_at` is assigned by the store
    async fn append(&self, username: &str, event_type: EventType) -> RepoResult<LabEvent>;

    /// Check that the store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}
