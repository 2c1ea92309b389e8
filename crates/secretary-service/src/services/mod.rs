//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] for the duration of one call.
//! [`ToggleService`] clones the context into the background tasks it spawns.

pub mod context;
pub mod error;
pub mod notification;
pub mod recorder;
pub mod status;
pub mod toggle;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use notification::NotificationService;
pub use recorder::EventRecorder;
pub use status::StatusService;
pub use toggle::{ToggleOutcome, ToggleService};
