//! Session state for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the chat room to classify messages as sent/received and to pick
//! which profile drawer an avatar click opens.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::IdentityKey;
use crate::net::types::{CurrentUser, MessageSender};

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<CurrentUser>,
}

impl SessionState {
    pub fn signed_in(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    /// Whether `sender` is the current user under `key`. Anonymous sessions
    /// own no messages.
    pub fn is_own(&self, sender: &MessageSender, key: IdentityKey) -> bool {
        let Some(user) = &self.user else {
            return false;
        };
        match key {
            IdentityKey::Nickname => sender.nickname == user.profile.nickname,
            IdentityKey::Username => sender.user.username == user.profile.user.username,
        }
    }
}
