//! Configuration structs and the profile file loader

mod app_config;
mod profiles;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, ServerConfig, SlackConfig,
};
pub use profiles::{load_profiles, parse_profiles, ProfileError};
