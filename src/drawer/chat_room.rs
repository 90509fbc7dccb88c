//! Chat room drawer: history pagination driver and drawer hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! On `drawer-opened` for `chat-room` the drawer resolves the room, marks it
//! read (fire-and-forget), loads history page 1 and scrolls to the bottom.
//! Afterwards `ChatRoomPanel` calls `load_history_page` on every wheel event;
//! the transitions in `state::chat_room` decide whether that fetches.
//!
//! ERROR HANDLING
//! ==============
//! A failed history fetch is logged and applied as an empty page; the next
//! wheel event at the top retries the same page. There is no automatic retry.

#[cfg(test)]
#[path = "chat_room_test.rs"]
mod chat_room_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::Drawer;
use crate::components::chat_room_panel::ChatRoomPanel;
use crate::config::{CHAT_ROOM_DRAWER, ClientConfig, FRIEND_PROFILE_DRAWER, PROFILE_DRAWER};
use crate::net::api;
use crate::net::fetch::AuthFetch;
use crate::net::types::{MessageSender, OutgoingChatMessage};
use crate::state::StateCell;
use crate::state::chat_room::{ChatRoomState, LoadOutcome, LoadStep, LoadTrigger};
use crate::state::drawer::{DrawerOpened, DrawerParams};
use crate::util::markup::embedded_json_scalar;

/// Room for an opened chat drawer: the `room_id` query parameter, else the
/// embedded `#room_id` JSON node, else empty.
pub fn resolve_room_id(event: &DrawerOpened, markup: &str) -> String {
    event
        .params
        .query("room_id")
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .or_else(|| embedded_json_scalar(markup, "room_id"))
        .unwrap_or_default()
}

/// Run one pagination step for `trigger`.
pub async fn load_history_page<F, S>(fetch: &F, config: &ClientConfig, room: &S, trigger: LoadTrigger) -> LoadOutcome
where
    F: AuthFetch,
    S: StateCell<ChatRoomState>,
{
    let Some(step) = room.with_mut(|r| r.begin_load(trigger)) else {
        return LoadOutcome::Stale;
    };
    let request = match step {
        LoadStep::Fetch(request) => request,
        LoadStep::Busy => return LoadOutcome::Busy,
        LoadStep::Exhausted => return LoadOutcome::Exhausted,
        LoadStep::Ignored => return LoadOutcome::Ignored,
    };

    let page = match api::fetch_history_page(fetch, config, &request.room_id, request.page).await {
        Ok(page) => Some(page),
        Err(e) => {
            leptos::logging::warn!("chat history room={} page={}: {e}", request.room_id, request.page);
            None
        }
    };
    let failed = page.is_none();
    let count = page.as_ref().map_or(0, |p| p.results.len());

    match room.with_mut(|r| r.finish_load(request.generation, page)) {
        Some(true) if failed => LoadOutcome::Failed,
        Some(true) => LoadOutcome::Loaded { messages: count },
        _ => LoadOutcome::Stale,
    }
}

/// Bind the drawer to `room_id`, load the newest page and scroll down.
pub async fn open_room<F, S>(fetch: &F, config: &ClientConfig, room: &S, room_id: String) -> LoadOutcome
where
    F: AuthFetch,
    S: StateCell<ChatRoomState>,
{
    if room_id.is_empty() {
        leptos::logging::warn!("chat room drawer opened without a room id");
    }
    if room.with_mut(|r| r.attach(room_id)).is_none() {
        return LoadOutcome::Stale;
    }
    let outcome = load_history_page(fetch, config, room, LoadTrigger::Opened).await;
    if outcome != LoadOutcome::Stale {
        let _ = room.with_mut(|r| r.request_scroll_to_bottom(true));
    }
    outcome
}

/// Drawer to open when an avatar is clicked.
pub fn avatar_target(sender: &MessageSender, own: bool, config: &ClientConfig) -> (&'static str, DrawerParams) {
    if own {
        (PROFILE_DRAWER, DrawerParams::new(config.profile_drawer_url.clone()))
    } else {
        (
            FRIEND_PROFILE_DRAWER,
            DrawerParams::new(config.friend_drawer_url.clone()).with_query("username", sender.user.username.clone()),
        )
    }
}

/// Message to hand to the chat controller, or `None` for empty input.
pub fn outgoing_message(input: &str, room_id: &str) -> Option<OutgoingChatMessage> {
    if input.is_empty() {
        return None;
    }
    Some(OutgoingChatMessage { message: input.to_owned(), room_id: room_id.to_owned() })
}

/// The `chat-room` drawer.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub struct ChatRoomDrawer<F> {
    fetch: F,
    config: Arc<ClientConfig>,
    room: RwSignal<ChatRoomState>,
}

impl<F> ChatRoomDrawer<F> {
    pub fn new(fetch: F, config: Arc<ClientConfig>, room: RwSignal<ChatRoomState>) -> Self {
        Self { fetch, config, room }
    }
}

impl<F> Drawer for ChatRoomDrawer<F>
where
    F: AuthFetch + Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        CHAT_ROOM_DRAWER
    }

    fn on_opened(&self, event: &DrawerOpened, markup: &str) {
        if event.drawer_name != CHAT_ROOM_DRAWER {
            return;
        }
        let room_id = resolve_room_id(event, markup);
        #[cfg(feature = "csr")]
        {
            if !room_id.is_empty() {
                let fetch = self.fetch.clone();
                let config = self.config.clone();
                let room_id = room_id.clone();
                leptos::task::spawn_local(async move {
                    api::mark_room_read(&fetch, &config, &room_id).await;
                });
            }
            let fetch = self.fetch.clone();
            let config = self.config.clone();
            let room = self.room;
            leptos::task::spawn_local(async move {
                open_room(&fetch, &config, &room, room_id).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = room_id;
        }
    }

    fn on_closed(&self) {
        let _ = self.room.with_mut(ChatRoomState::detach);
    }

    fn view(&self) -> Option<AnyView> {
        let room = self.room;
        Some(view! { <ChatRoomPanel room=room/> }.into_any())
    }
}
