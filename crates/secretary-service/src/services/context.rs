//! Service context - dependency container for services
//!
//! Holds the event store, the chat transport and the loaded profiles.

use std::sync::Arc;

use secretary_core::traits::{ChatClient, EventRepository};
use secretary_core::ProfileDirectory;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap: every field is reference counted. Background tasks take
/// their own clone so they outlive the request that started them.
#[derive(Clone)]
pub struct ServiceContext {
    event_repo: Arc<dyn EventRepository>,
    chat_client: Arc<dyn ChatClient>,
    profiles: Arc<ProfileDirectory>,
    broadcast_channel: Arc<str>,
}

impl ServiceContext {
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        chat_client: Arc<dyn ChatClient>,
        profiles: Arc<ProfileDirectory>,
        broadcast_channel: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            event_repo,
            chat_client,
            profiles,
            broadcast_channel: broadcast_channel.into(),
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the chat client
    pub fn chat_client(&self) -> &dyn ChatClient {
        self.chat_client.as_ref()
    }

    /// Get the loaded user profiles
    pub fn profiles(&self) -> &ProfileDirectory {
        self.profiles.as_ref()
    }

    /// Channel that receives arrival announcements
    pub fn broadcast_channel(&self) -> &str {
        &self.broadcast_channel
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("event_repo", &"EventRepository")
            .field("chat_client", &"ChatClient")
            .field("profiles", &self.profiles.len())
            .field("broadcast_channel", &self.broadcast_channel)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    event_repo: Option<Arc<dyn EventRepository>>,
    chat_client: Option<Arc<dyn ChatClient>>,
    profiles: Option<Arc<ProfileDirectory>>,
    broadcast_channel: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn chat_client(mut self, client: Arc<dyn ChatClient>) -> Self {
        self.chat_client = Some(client);
        self
    }

    pub fn profiles(mut self, profiles: Arc<ProfileDirectory>) -> Self {
        self.profiles = Some(profiles);
        self
    }

    pub fn broadcast_channel(mut self, channel: impl Into<String>) -> Self {
        self.broadcast_channel = Some(channel.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let broadcast_channel = self
            .broadcast_channel
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ServiceError::validation("broadcast_channel is required"))?;

        Ok(ServiceContext::new(
            self.event_repo
                .ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.chat_client
                .ok_or_else(|| ServiceError::validation("chat_client is required"))?,
            self.profiles.unwrap_or_default(),
            broadcast_channel,
        ))
    }
}
