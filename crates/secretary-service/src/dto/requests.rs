//! Request DTOs for API endpoints

use serde::Deserialize;
use validator::Validate;

/// Body of `POST /event`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EventRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// Query string of `GET /status`
///
/// `name` is optional here so a missing parameter can be reported with a
/// clear message instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusQuery {
    pub name: Option<String>,
}

impl StatusQuery {
    /// The requested username, if present and non-empty
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
