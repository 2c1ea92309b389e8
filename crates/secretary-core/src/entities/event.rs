//! Lab event entity - one arrival or departure of a user

use chrono::{DateTime, Utc};

use crate::value_objects::{EventType, Status};

/// A persisted arrival or departure
///
/// Events are append-only; `created_at` is assigned by storage at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabEvent {
    pub id: i64,
    pub username: String,
    pub event_type: EventType,
    pub created_at: DateTime<Utc>,
}

impl LabEvent {
    /// Status the user entered with this event
    #[inline]
    pub fn status(&self) -> Status {
        self.event_type.resulting_status()
    }
}
