//! Domain entities - core business objects

mod event;
mod profile;

pub use event::LabEvent;
pub use profile::{ProfileDirectory, UserProfile};
