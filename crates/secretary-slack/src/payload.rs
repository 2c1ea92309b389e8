//! Wire types for `chat.postMessage`

use serde::{Deserialize, Serialize};

use secretary_core::ChatMessage;

/// JSON body of a `chat.postMessage` call
#[derive(Debug, Serialize)]
pub struct PostMessageRequest<'a> {
    pub channel: &'a str,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<&'a str>,
}

impl<'a> From<&'a ChatMessage> for PostMessageRequest<'a> {
    fn from(message: &'a ChatMessage) -> Self {
        Self {
            channel: &message.channel,
            text: &message.text,
            username: message.username.as_deref(),
            icon_emoji: message.icon_emoji.as_deref(),
        }
    }
}

/// Envelope every Web API method answers with
///
/// Slack reports most failures with HTTP 200 and `ok: false`.
#[derive(Debug, Deserialize)]
pub struct SlackResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}
