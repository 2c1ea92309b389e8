//! HTTP client for the Slack Web API

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use secretary_common::SlackConfig;
use secretary_core::error::DomainError;
use secretary_core::traits::{ChatClient, ChatMessage};

use crate::payload::{PostMessageRequest, SlackResponse};

/// Public Slack Web API base URL
pub const DEFAULT_API_URL: &str = "https://slack.com/api";

/// Slack implementation of ChatClient
#[derive(Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    token: String,
    api_url: String,
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl SlackClient {
    /// Create a client for `api_url` authenticated with a bot token
    pub fn new(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &SlackConfig) -> Self {
        Self::new(config.token.clone(), config.api_url.clone())
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_url)
    }
}

fn notification_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::NotificationError(e.to_string())
}

#[async_trait]
impl ChatClient for SlackClient {
    #[instrument(skip(self, message), fields(channel = %message.channel))]
    async fn post_message(&self, message: &ChatMessage) -> Result<(), DomainError> {
        let resp = self
            .http
            .post(self.method_url("chat.postMessage"))
            .bearer_auth(&self.token)
            .json(&PostMessageRequest::from(message))
            .send()
            .await
            .map_err(notification_error)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "Slack rejected the request");
            return Err(notification_error(format_args!(
                "chat.postMessage returned HTTP {status}"
            )));
        }

        let body: SlackResponse = resp.json().await.map_err(notification_error)?;
        if !body.ok {
            let reason = body.error.unwrap_or_else(|| "unknown_error".to_string());
            warn!(%reason, "chat.postMessage failed");
            return Err(notification_error(format_args!(
                "chat.postMessage failed: {reason}"
            )));
        }

        debug!("Message posted");
        Ok(())
    }
}
