//! User profile entity - static per-user notification settings

use std::collections::HashMap;

use crate::error::DomainError;
use crate::value_objects::{MessageTemplate, ProfileField, Status};

/// Notification settings for one lab member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Username used in events and requests
    pub name: String,
    /// Chat identity used for mentions
    pub chat_id: String,
    /// Personal channel for arrival/departure messages
    pub chat_channel: Option<String>,
    /// Name the bot posts as
    pub display_name: String,
    /// Icon the bot posts with
    pub display_icon: String,
    pub arrival_message: MessageTemplate,
    pub departure_message: MessageTemplate,
}

impl UserProfile {
    /// Value of a template field for this profile
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::ChatId => &self.chat_id,
            ProfileField::ChatChannel => self.chat_channel.as_deref().unwrap_or_default(),
            ProfileField::DisplayName => &self.display_name,
            ProfileField::DisplayIcon => &self.display_icon,
        }
    }

    /// Template used when the user enters `status`
    pub fn template_for(&self, status: Status) -> &MessageTemplate {
        match status {
            Status::Arrived => &self.arrival_message,
            Status::Left => &self.departure_message,
        }
    }

    /// Render the personal message for a transition into `status`
    pub fn render_message(&self, status: Status) -> String {
        self.template_for(status).render(|field| self.field(field))
    }

    /// Check required fields and that templates only reference populated fields
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            (ProfileField::Name, &self.name),
            (ProfileField::ChatId, &self.chat_id),
            (ProfileField::DisplayName, &self.display_name),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(self.invalid(format!("`{}` must not be empty", field.as_str())));
        }

        let uses_channel = self
            .arrival_message
            .fields()
            .chain(self.departure_message.fields())
            .any(|field| field == ProfileField::ChatChannel);
        if uses_channel && self.chat_channel.is_none() {
            return Err(self.invalid(
                "templates reference `chat_channel` but no channel is configured".to_string(),
            ));
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> DomainError {
        DomainError::InvalidProfile {
            user: self.name.clone(),
            reason,
        }
    }
}

/// All known profiles, keyed by username, plus the broadcast announcement template
#[derive(Debug, Clone)]
pub struct ProfileDirectory {
    profiles: HashMap<String, UserProfile>,
    announcement: MessageTemplate,
}

impl ProfileDirectory {
    /// Default broadcast text posted when someone arrives
    pub const DEFAULT_ANNOUNCEMENT: &'static str = "<@{{chat_id}}> has arrived.";

    /// Build a directory, validating every profile
    pub fn new(
        profiles: impl IntoIterator<Item = UserProfile>,
        announcement: MessageTemplate,
    ) -> Result<Self, DomainError> {
        let mut by_name = HashMap::new();
        for profile in profiles {
            profile.validate()?;
            if by_name.contains_key(&profile.name) {
                return Err(DomainError::InvalidProfile {
                    user: profile.name,
                    reason: "duplicate profile".to_string(),
                });
            }
            by_name.insert(profile.name.clone(), profile);
        }

        Ok(Self {
            profiles: by_name,
            announcement,
        })
    }

    /// Look up a profile by username
    pub fn get(&self, username: &str) -> Option<&UserProfile> {
        self.profiles.get(username)
    }

    /// Look up a profile, failing with `UserNotFound` if absent
    pub fn require(&self, username: &str) -> Result<&UserProfile, DomainError> {
        self.get(username)
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))
    }

    /// Render the broadcast arrival announcement for `profile`
    pub fn announcement_for(&self, profile: &UserProfile) -> String {
        self.announcement.render(|field| profile.field(field))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterate over usernames in no particular order
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

impl Default for ProfileDirectory {
    fn default() -> Self {
        Self {
            profiles: HashMap::new(),
            announcement: default_announcement(),
        }
    }
}

fn default_announcement() -> MessageTemplate {
    MessageTemplate::parse(ProfileDirectory::DEFAULT_ANNOUNCEMENT)
        .unwrap_or_else(|_| unreachable!("default announcement template is valid"))
}
