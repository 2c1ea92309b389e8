//! # secretary-core
//!
//! Domain layer for the lab secretary: presence status, lab events, user profiles,
//! and the ports (storage and chat transport) the application layer depends on.
//! This crate has zero dependencies on infrastructure (database, web framework, HTTP client).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{LabEvent, ProfileDirectory, UserProfile};
pub use error::DomainError;
pub use traits::{ChatClient, ChatMessage, EventRepository, RepoResult};
pub use value_objects::{start_of_day, EventType, MessageTemplate, ProfileField, Status};
