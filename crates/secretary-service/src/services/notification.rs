//! Notification service
//!
//! Renders a user's personal message and posts it to their channel. Arrivals
//! are also announced on the shared broadcast channel.

use tracing::{info, instrument};

use secretary_core::{ChatMessage, Status, UserProfile};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Announce that `username` entered `status`
    ///
    /// Fails with `UserNotFound` for a username without a profile. A failed
    /// personal message stops before the broadcast is attempted.
    #[instrument(skip(self))]
    pub async fn notify(&self, username: &str, status: Status) -> ServiceResult<()> {
        let profile = self.ctx.profiles().require(username)?;

        if let Some(channel) = profile.chat_channel.as_deref() {
            let message = ChatMessage::new(channel, profile.render_message(status));
            self.post(profile, message).await?;
            info!(username, channel, %status, "Personal message sent");
        }

        if status.is_arrived() {
            let channel = self.ctx.broadcast_channel();
            let message = ChatMessage::new(channel, self.ctx.profiles().announcement_for(profile));
            self.post(profile, message).await?;
            info!(username, channel, "Arrival announced");
        }

        Ok(())
    }

    async fn post(&self, profile: &UserProfile, message: ChatMessage) -> ServiceResult<()> {
        let message = message.posted_as(&profile.display_name, &profile.display_icon);
        self.ctx.chat_client().post_message(&message).await?;
        Ok(())
    }
}
