//! Toggle service - request-level orchestration for `POST /event`
//!
//! The current status is resolved first; if that fails nothing else happens.
//! Otherwise the event is recorded and the notification sent as two
//! independent tasks. Both are awaited, and their failures are logged rather
//! than returned: once the status is resolved the request has succeeded.

use tokio::task::JoinError;
use tracing::{error, info, instrument, warn};

use secretary_core::Status;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;
use super::recorder::EventRecorder;
use super::status::StatusService;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub previous: Status,
    pub current: Status,
    /// Whether the event was stored
    pub recorded: bool,
    /// Whether every notification was delivered
    pub notified: bool,
}

/// Toggle service
pub struct ToggleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ToggleService<'a> {
    /// Create a new ToggleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Flip the status of `username`, then record and notify concurrently
    ///
    /// Only a failure to resolve the current status is returned. The spawned
    /// tasks own clones of the context and finish even if the caller goes away.
    #[instrument(skip(self))]
    pub async fn toggle(&self, username: &str) -> ServiceResult<ToggleOutcome> {
        if username.is_empty() {
            return Err(ServiceError::validation("name is required"));
        }

        let previous = StatusService::new(self.ctx).current_status(username).await?;
        let current = previous.toggled();

        let record = {
            let ctx = self.ctx.clone();
            let username = username.to_string();
            tokio::spawn(async move {
                EventRecorder::new(&ctx)
                    .record(&username, current)
                    .await
                    .map(|_| ())
            })
        };
        let notify = {
            let ctx = self.ctx.clone();
            let username = username.to_string();
            tokio::spawn(async move {
                NotificationService::new(&ctx)
                    .notify(&username, current)
                    .await
            })
        };

        let (record, notify) = tokio::join!(record, notify);
        let outcome = ToggleOutcome {
            previous,
            current,
            recorded: settle("record", username, record),
            notified: settle("notify", username, notify),
        };

        info!(
            username,
            previous = %outcome.previous,
            current = %outcome.current,
            recorded = outcome.recorded,
            notified = outcome.notified,
            "Status toggled"
        );

        Ok(outcome)
    }
}

/// Log the result of a side-effect task and report whether it succeeded
fn settle(
    task: &'static str,
    username: &str,
    result: Result<ServiceResult<()>, JoinError>,
) -> bool {
    match result {
        Ok(Ok(())) => true,
        Ok(Err(ServiceError::Domain(e))) if e.is_not_found() => {
            warn!(task, username, error = %e, "Side effect skipped");
            false
        }
        Ok(Err(e)) => {
            error!(task, username, error = %e, "Side effect failed");
            false
        }
        Err(e) => {
            error!(task, username, error = %e, "Side effect task did not complete");
            false
        }
    }
}
