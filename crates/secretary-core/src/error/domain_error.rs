//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("There is no user named {0}")]
    UserNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid profile for {user}: {reason}")]
    InvalidProfile { user: String, reason: String },

    #[error("Invalid message template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid event type: {0}")]
    InvalidEventType(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Notification error: {0}")]
    NotificationError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",

            Self::InvalidProfile { .. } => "INVALID_PROFILE",
            Self::InvalidTemplate(_) => "INVALID_TEMPLATE",
            Self::InvalidEventType(_) => "INVALID_EVENT_TYPE",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::NotificationError(_) => "NOTIFICATION_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }

    /// Check if this error came from the chat transport
    pub fn is_notification(&self) -> bool {
        matches!(self, Self::NotificationError(_))
    }
}
