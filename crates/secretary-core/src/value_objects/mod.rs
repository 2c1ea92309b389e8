//! Value objects - immutable domain values

mod status;
mod template;

pub use status::{start_of_day, EventType, Status};
pub use template::{MessageTemplate, ProfileField};
