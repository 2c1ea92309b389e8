//! User profile file loading
//!
//! Profiles are read once at startup from a YAML file of the form:
//!
//! ```yaml
//! broadcast_mention: "<@{{chat_id}}> has arrived."
//! users:
//!   alice:
//!     chat_id: U0123ABC
//!     chat_channel: C0456DEF
//!     display_name: Lab Secretary
//!     display_icon: ":robot_face:"
//!     arrival_message: "Welcome back, {{name}}!"
//!     departure_message: "See you tomorrow, {{name}}."
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use secretary_core::{DomainError, MessageTemplate, ProfileDirectory, UserProfile};
use serde::Deserialize;
use tracing::{debug, info};

/// Channel values that mean "no personal channel"
const NO_CHANNEL: [&str; 2] = ["", "nil"];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileFile {
    #[serde(default)]
    broadcast_mention: Option<String>,
    users: BTreeMap<String, RawProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    chat_id: String,
    #[serde(default)]
    chat_channel: Option<String>,
    display_name: String,
    #[serde(default)]
    display_icon: String,
    arrival_message: String,
    departure_message: String,
}

impl RawProfile {
    fn into_profile(self, name: String) -> Result<UserProfile, DomainError> {
        let template = |field: &str, source: &str| {
            MessageTemplate::parse(source).map_err(|e| DomainError::InvalidProfile {
                user: name.clone(),
                reason: format!("`{field}`: {e}"),
            })
        };

        let arrival_message = template("arrival_message", &self.arrival_message)?;
        let departure_message = template("departure_message", &self.departure_message)?;

        Ok(UserProfile {
            chat_channel: self
                .chat_channel
                .map(|c| c.trim().to_string())
                .filter(|c| !NO_CHANNEL.contains(&c.as_str())),
            name,
            chat_id: self.chat_id,
            display_name: self.display_name,
            display_icon: self.display_icon,
            arrival_message,
            departure_message,
        })
    }
}

/// Profile loading errors
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Failed to read profile file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Read and validate the profile file at `path`
pub fn load_profiles(path: &Path) -> Result<ProfileDirectory, ProfileError> {
    let contents = fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let directory = parse_profiles(&contents)?;
    info!(path = %path.display(), profiles = directory.len(), "User profiles loaded");
    Ok(directory)
}

/// Parse and validate profile YAML
pub fn parse_profiles(contents: &str) -> Result<ProfileDirectory, ProfileError> {
    let file: ProfileFile = serde_yaml::from_str(contents)?;

    let announcement = match file.broadcast_mention.as_deref() {
        Some(source) => MessageTemplate::parse(source).map_err(|e| {
            DomainError::InvalidTemplate(format!("`broadcast_mention`: {e}"))
        })?,
        None => MessageTemplate::parse(ProfileDirectory::DEFAULT_ANNOUNCEMENT)?,
    };

    let profiles = file
        .users
        .into_iter()
        .map(|(name, raw)| {
            debug!(user = %name, "Parsing profile");
            raw.into_profile(name)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProfileDirectory::new(profiles, announcement)?)
}
