//! # secretary-common
//!
//! Shared utilities including configuration, profile loading, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    load_profiles, parse_profiles, AppConfig, AppSettings, ConfigError, DatabaseConfig,
    Environment, ProfileError, ServerConfig, SlackConfig,
};
pub use error::{AppError, ErrorResponse};
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
