//! Data transfer objects for API requests and responses

pub mod requests;
pub mod responses;

pub use requests::{EventRequest, StatusQuery};
pub use responses::{MessageResponse, ReadinessResponse};
