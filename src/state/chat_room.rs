//! Chat room drawer state: message list, history cursor and spinner.
//!
//! DESIGN
//! ======
//! History pagination is a two-state machine (idle, loading). `begin_load`
//! decides whether a trigger may start a fetch and returns the request to
//! issue; `finish_load` applies the result. The network call happens between
//! the two in `drawer::chat_room`, so the rules below hold without a DOM:
//!
//! - at most one history fetch is in flight (`rendering_next_page`);
//! - `next_page` only grows and `still_has_next_page` only goes true→false;
//! - at most one spinner exists;
//! - results for a closed or re-targeted room (stale generation) are dropped.

#[cfg(test)]
#[path = "chat_room_test.rs"]
mod chat_room_test;

use std::collections::VecDeque;

use crate::net::types::{ChatMessage, HistoryPage, IncomingChatMessage};

/// Page cursor into a room's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryCursor {
    next_page: u32,
    still_has_next_page: bool,
}

impl Default for HistoryCursor {
    fn default() -> Self {
        Self { next_page: 1, still_has_next_page: true }
    }
}

impl HistoryCursor {
    pub fn next_page(self) -> u32 {
        self.next_page
    }

    pub fn still_has_next_page(self) -> bool {
        self.still_has_next_page
    }

    fn advance(&mut self, has_next: bool) {
        self.next_page = self.next_page.saturating_add(1);
        if !has_next {
            self.still_has_next_page = false;
        }
    }
}

/// What asked for more history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadTrigger {
    /// The chat room drawer just opened.
    Opened,
    /// A wheel event on the message list at the given scroll offset.
    Wheel { scroll_top: f64 },
}

/// A history fetch the caller must perform and report back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRequest {
    pub generation: u64,
    pub room_id: String,
    pub page: u32,
}

/// Decision taken by `begin_load`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStep {
    Fetch(HistoryRequest),
    /// A fetch is already in flight.
    Busy,
    /// The server has no older page; the spinner was flashed.
    Exhausted,
    /// Nothing to do: no room, or the list is not scrolled to the top.
    Ignored,
}

/// End result of one load attempt, as reported by the async driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was applied with this many messages.
    Loaded { messages: usize },
    /// The fetch failed and was treated as an empty page.
    Failed,
    /// The room closed or changed while fetching; nothing was applied.
    Stale,
    Busy,
    Exhausted,
    Ignored,
}

/// A rendered message with a list-stable key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomMessage {
    pub key: u64,
    pub message: ChatMessage,
}

/// Scroll request for the message list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Bumped on every request so effects re-run for identical values.
    pub seq: u64,
    pub smooth: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ChatRoomState {
    /// Open room; `None` while the chat room drawer is closed.
    room_id: Option<String>,
    generation: u64,
    cursor: HistoryCursor,
    rendering_next_page: bool,
    spinner_visible: bool,
    /// Oldest message first.
    messages: VecDeque<RoomMessage>,
    next_key: u64,
    /// Scroll-to-bottom requests for the list.
    pub scroll: ScrollRequest,
    /// Bumped when the message input should take focus.
    pub focus_input_seq: u64,
}

impl ChatRoomState {
    /// Bind the drawer to `room_id` with a fresh cursor and empty list.
    pub fn attach(&mut self, room_id: String) -> u64 {
        self.generation += 1;
        self.room_id = Some(room_id);
        self.cursor = HistoryCursor::default();
        self.rendering_next_page = false;
        self.spinner_visible = false;
        self.messages.clear();
        self.focus_input_seq += 1;
        self.generation
    }

    /// Release the room. In-flight results become stale.
    pub fn detach(&mut self) {
        self.generation += 1;
        self.room_id = None;
        self.rendering_next_page = false;
        self.spinner_visible = false;
        self.messages.clear();
    }

    pub fn room_id(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cursor(&self) -> HistoryCursor {
        self.cursor
    }

    pub fn is_loading(&self) -> bool {
        self.rendering_next_page
    }

    pub fn spinner_visible(&self) -> bool {
        self.spinner_visible
    }

    pub fn messages(&self) -> &VecDeque<RoomMessage> {
        &self.messages
    }

    /// Show the loading spinner. Returns `false` when one is already shown.
    pub fn show_spinner(&mut self) -> bool {
        if self.spinner_visible {
            return false;
        }
        self.spinner_visible = true;
        true
    }

    pub fn hide_spinner(&mut self) {
        self.spinner_visible = false;
    }

    /// Decide whether `trigger` starts a history fetch.
    pub fn begin_load(&mut self, trigger: LoadTrigger) -> LoadStep {
        let Some(room_id) = self.room_id.as_ref().filter(|id| !id.is_empty()) else {
            return LoadStep::Ignored;
        };
        if self.rendering_next_page {
            return LoadStep::Busy;
        }
        if let LoadTrigger::Wheel { scroll_top } = trigger {
            if scroll_top > 0.0 {
                return LoadStep::Ignored;
            }
        }

        let request = HistoryRequest {
            generation: self.generation,
            room_id: room_id.clone(),
            page: self.cursor.next_page,
        };
        self.show_spinner();
        if !self.cursor.still_has_next_page {
            self.hide_spinner();
            return LoadStep::Exhausted;
        }
        self.rendering_next_page = true;
        LoadStep::Fetch(request)
    }

    /// Apply the result of the fetch started for `generation`.
    ///
    /// `None` is a failed fetch: the spinner goes away and the cursor stays
    /// put so a later scroll retries the same page. Returns `false` when the
    /// result is stale and was dropped.
    pub fn finish_load(&mut self, generation: u64, page: Option<HistoryPage>) -> bool {
        if generation != self.generation || self.room_id.is_none() {
            return false;
        }
        self.hide_spinner();
        if let Some(page) = page {
            self.cursor.advance(page.has_next());
            for message in page.results {
                self.prepend(message);
            }
        }
        self.rendering_next_page = false;
        true
    }

    /// Add a live message at the bottom and scroll to it.
    pub fn append_live(&mut self, message: ChatMessage) {
        if self.room_id.is_none() {
            return;
        }
        let key = self.take_key();
        self.messages.push_back(RoomMessage { key, message });
        self.request_scroll_to_bottom(true);
    }

    /// Route a socket message; only the open room's messages are shown.
    pub fn receive(&mut self, incoming: IncomingChatMessage) -> bool {
        if self.room_id.as_deref() != Some(incoming.room_id.as_str()) {
            return false;
        }
        self.append_live(incoming.into_message());
        true
    }

    pub fn request_scroll_to_bottom(&mut self, smooth: bool) {
        self.scroll = ScrollRequest { seq: self.scroll.seq + 1, smooth };
    }

    fn prepend(&mut self, message: ChatMessage) {
        let key = self.take_key();
        self.messages.push_front(RoomMessage { key, message });
    }

    fn take_key(&mut self) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        key
    }
}
