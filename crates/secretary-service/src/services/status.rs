//! Status service
//!
//! A user's status is never stored. It is the parity of the number of events
//! recorded for them since the start of the current local day.

use chrono::{DateTime, Local, Utc};
use tracing::{debug, instrument};

use secretary_core::{start_of_day, Status};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Status service
pub struct StatusService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatusService<'a> {
    /// Create a new StatusService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Status of `username` for the current server-local day
    #[instrument(skip(self))]
    pub async fn current_status(&self, username: &str) -> ServiceResult<Status> {
        self.status_since(username, start_of_day(&Local::now())).await
    }

    /// Status derived from the events recorded at or after `since`
    pub async fn status_since(
        &self,
        username: &str,
        since: DateTime<Utc>,
    ) -> ServiceResult<Status> {
        let count = self.ctx.event_repo().count_since(username, since).await?;
        let status = Status::from_event_count(count);
        debug!(username, count, %status, "Resolved status");
        Ok(status)
    }
}
