//! Chat transport port

use async_trait::async_trait;

use crate::error::DomainError;

/// A text message to post to a chat channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub channel: String,
    pub text: String,
    /// Name to post as, if the transport supports overriding it
    pub username: Option<String>,
    /// Emoji icon to post with, if the transport supports overriding it
    pub icon_emoji: Option<String>,
}

impl ChatMessage {
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            username: None,
            icon_emoji: None,
        }
    }

    /// Post as `username` with `icon_emoji`; empty values are ignored
    pub fn posted_as(mut self, username: &str, icon_emoji: &str) -> Self {
        self.username = Some(username.to_string()).filter(|s| !s.is_empty());
        self.icon_emoji = Some(icon_emoji.to_string()).filter(|s| !s.is_empty());
        self
    }
}

/// Posts messages to a chat service
///
/// Failures are reported as `DomainError::NotificationError`.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn post_message(&self, message: &ChatMessage) -> Result<(), DomainError>;
}
