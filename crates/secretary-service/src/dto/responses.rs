//! Response DTOs for API endpoints

use serde::Serialize;

use secretary_core::Status;

/// Single human-readable message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn pong() -> Self {
        Self::new("pong")
    }

    /// "<name> is comming!" or "<name> has left..."
    pub fn status(username: &str, status: Status) -> Self {
        Self::new(status.describe(username))
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn from_database(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" },
            database: database_healthy,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.database
    }
}
