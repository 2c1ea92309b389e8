//! Ports implemented by the infrastructure crates

mod chat;
mod repositories;

pub use chat::{ChatClient, ChatMessage};
pub use repositories::{EventRepository, RepoResult};
