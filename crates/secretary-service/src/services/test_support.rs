//! Fixture context for service unit tests

use std::sync::Arc;

use secretary_core::{MessageTemplate, ProfileDirectory, UserProfile};

pub use secretary_test_utils::{InMemoryEventRepository, RecordingChatClient};

use super::context::ServiceContext;

pub const BROADCAST: &str = "C-general";

fn profile(name: &str, channel: Option<&str>) -> UserProfile {
    UserProfile {
        name: name.to_string(),
        chat_id: format!("U-{name}"),
        chat_channel: channel.map(str::to_string),
        display_name: "Secretary".to_string(),
        display_icon: ":robot_face:".to_string(),
        arrival_message: MessageTemplate::parse("Welcome back, {{name}}!").unwrap(),
        departure_message: MessageTemplate::parse("See you, {{ name }}").unwrap(),
    }
}

/// Context with profiles for `alice` (personal channel) and `bob` (none)
pub fn context(
    events: Arc<InMemoryEventRepository>,
    chat: Arc<RecordingChatClient>,
) -> ServiceContext {
    let profiles = ProfileDirectory::new(
        [profile("alice", Some("C-alice")), profile("bob", None)],
        MessageTemplate::parse(ProfileDirectory::DEFAULT_ANNOUNCEMENT).unwrap(),
    )
    .unwrap();

    ServiceContext::new(events, chat, Arc::new(profiles), BROADCAST)
}
