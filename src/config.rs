//! Client configuration: API paths, drawer names and identity rules.
//!
//! A browser build has no environment to read, so every value is a typed
//! default. `ClientConfig` travels through context with the rest of
//! `ClientContext`, which lets tests swap paths or the identity key.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Drawer name owned by the chat room drawer.
pub const CHAT_ROOM_DRAWER: &str = "chat-room";
/// Drawer showing the signed-in user's own profile.
pub const PROFILE_DRAWER: &str = "profile";
/// Drawer showing another user's profile.
pub const FRIEND_PROFILE_DRAWER: &str = "friend-profile";

pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_CHAT_SOCKET_PATH: &str = "/ws/chat/";
pub const DEFAULT_PROFILE_DRAWER_URL: &str = "drawer/profile/";
pub const DEFAULT_FRIEND_DRAWER_URL: &str = "drawer/friend-drawer";
pub const DEFAULT_RECONNECT_BASE_MS: u32 = 1000;
pub const DEFAULT_RECONNECT_MAX_MS: u32 = 10_000;

/// Which sender field decides whether a chat message is "mine".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentityKey {
    /// Compare profile nicknames. Nicknames are not guaranteed unique.
    #[default]
    Nickname,
    /// Compare account usernames.
    Username,
}

/// Reconnect delay bounds for the chat socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectBackoff {
    pub base_ms: u32,
    pub max_ms: u32,
}

impl ReconnectBackoff {
    /// Delay to use after `current_ms`: doubled, capped at `max_ms`.
    pub fn next(self, current_ms: u32) -> u32 {
        current_ms.saturating_mul(2).min(self.max_ms)
    }
}

impl Default for ReconnectBackoff {
    fn default() -> Self {
        Self { base_ms: DEFAULT_RECONNECT_BASE_MS, max_ms: DEFAULT_RECONNECT_MAX_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix of every REST endpoint (no trailing slash).
    pub api_prefix: String,
    /// Path of the chat WebSocket on the current host.
    pub chat_socket_path: String,
    /// Markup source for the own-profile drawer.
    pub profile_drawer_url: String,
    /// Markup source for the friend-profile drawer.
    pub friend_drawer_url: String,
    pub identity_key: IdentityKey,
    pub reconnect: ReconnectBackoff,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_prefix: DEFAULT_API_PREFIX.to_owned(),
            chat_socket_path: DEFAULT_CHAT_SOCKET_PATH.to_owned(),
            profile_drawer_url: DEFAULT_PROFILE_DRAWER_URL.to_owned(),
            friend_drawer_url: DEFAULT_FRIEND_DRAWER_URL.to_owned(),
            identity_key: IdentityKey::default(),
            reconnect: ReconnectBackoff::default(),
        }
    }
}
