//! Event recorder

use tracing::{info, instrument};

use secretary_core::{LabEvent, Status};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Appends arrival and departure events
pub struct EventRecorder<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventRecorder<'a> {
    /// Create a new EventRecorder
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record that `username` entered `status`
    #[instrument(skip(self))]
    pub async fn record(&self, username: &str, status: Status) -> ServiceResult<LabEvent> {
        let event = self
            .ctx
            .event_repo()
            .append(username, status.event_type())
            .await?;

        info!(
            username,
            event_id = event.id,
            event_type = event.event_type.as_str(),
            created_at = %event.created_at,
            "Event recorded"
        );

        Ok(event)
    }
}
