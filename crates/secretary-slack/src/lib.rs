//! # secretary-slack
//!
//! Slack Web API implementation of the `ChatClient` port.
//!
//! Only `chat.postMessage` is used. Messages may override the bot's display
//! name and icon, which lets each profile post under its own persona.

mod client;
mod payload;

pub use client::{SlackClient, DEFAULT_API_URL};
pub use payload::{PostMessageRequest, SlackResponse};
