//! Test fixtures and data generators

use anyhow::Result;
use secretary_common::parse_profiles;
use secretary_core::ProfileDirectory;
use serde::{Deserialize, Serialize};

/// Broadcast channel used by every test context
pub const BROADCAST_CHANNEL: &str = "C-COMING";

/// Personal channel of `alice`
pub const ALICE_CHANNEL: &str = "C-ALICE";

/// Two lab members: `alice` has a personal channel, `bob` does not
pub const PROFILES_YAML: &str = r#"
users:
  alice:
    chat_id: U-ALICE
    chat_channel: C-ALICE
    display_name: Lab Secretary
    display_icon: ":robot_face:"
    arrival_message: "Welcome back, {{name}}!"
    departure_message: "See you tomorrow, {{ name }}."
  bob:
    chat_id: U-BOB
    chat_channel: nil
    display_name: Lab Secretary
    display_icon: ":owl:"
    arrival_message: "Morning, {{name}}"
    departure_message: "Bye, {{name}}"
"#;

pub fn test_profiles() -> Result<ProfileDirectory> {
    Ok(parse_profiles(PROFILES_YAML)?)
}

/// Body of `POST /event`
#[derive(Debug, Serialize)]
pub struct EventRequest {
    pub name: String,
}

impl EventRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// `{"message": ...}` body
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{"error": ...}` body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `GET /health/ready`
#[derive(Debug, Deserialize)]
pub struct ReadinessBody {
    pub status: String,
    pub database: bool,
}
