//! Friend list shown beside the drawer.
//!
//! The list is static placeholder data until the friendship endpoints are
//! wired up; it is rebuilt on load and after every `drawer-opened` event.

#[cfg(test)]
#[path = "friends_test.rs"]
mod friends_test;

use crate::net::types::Friend;

const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/150";

#[derive(Clone, Debug, Default)]
pub struct FriendsState {
    pub friends: Vec<Friend>,
}

impl FriendsState {
    /// Rebuild the list from scratch.
    pub fn rerender(&mut self) {
        self.friends = placeholder_friends();
    }
}

pub fn placeholder_friends() -> Vec<Friend> {
    [("john_doe", "John"), ("janedoe", "Jane"), ("aliceee", "Alice")]
        .into_iter()
        .map(|(username, nickname)| Friend {
            avatar: PLACEHOLDER_AVATAR.to_owned(),
            username: username.to_owned(),
            nickname: nickname.to_owned(),
        })
        .collect()
}
