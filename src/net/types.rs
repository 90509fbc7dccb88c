//! Wire DTOs shared with the Django REST endpoints and the chat socket.
//!
//! DESIGN
//! ======
//! Field names mirror the server serializers so payloads decode without
//! renaming. Room ids arrive as either JSON strings or numbers depending on
//! the endpoint, so they are normalized to `String` on decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account part of a profile (`django.contrib.auth` user).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    pub username: String,
}

/// Public profile of a message sender.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSender {
    /// Display nickname.
    pub nickname: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
    /// Owning account.
    pub user: AccountRef,
}

/// One chat message as returned by the history endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: MessageSender,
    /// Message text.
    pub message: String,
}

/// One page of `/api/chat-message/{room_id}/history/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPage {
    /// Messages, newest first.
    #[serde(default)]
    pub results: Vec<ChatMessage>,
    /// Link to the next (older) page, `null` on the last page.
    #[serde(default)]
    pub next: Option<String>,
}

impl HistoryPage {
    /// Whether the server advertised another page. An empty link counts as none.
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

/// The signed-in user's own profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    pub user: AccountRef,
}

/// Current user as embedded by the page template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub profile: Profile,
}

/// Entry of the friend list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub avatar: String,
    pub username: String,
    pub nickname: String,
}

/// Message queued for the chat socket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingChatMessage {
    pub message: String,
    pub room_id: String,
}

/// Message pushed by the chat socket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingChatMessage {
    /// Room the message belongs to.
    #[serde(deserialize_with = "deserialize_room_id")]
    pub room_id: String,
    pub sender: MessageSender,
    pub message: String,
}

impl IncomingChatMessage {
    /// Strip the routing envelope.
    pub fn into_message(self) -> ChatMessage {
        ChatMessage { sender: self.sender, message: self.message }
    }
}

/// Accept a room id encoded as a JSON string or integer.
pub(crate) fn deserialize_room_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    room_id_from_value(&value).ok_or_else(|| D::Error::custom("expected string or integer room id"))
}

/// Normalize a JSON scalar into a room id string.
pub(crate) fn room_id_from_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}
