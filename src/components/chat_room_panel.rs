//! Interactive body of the chat room drawer: history list, spinner, input.
//!
//! The panel renders below the server's chat-room partial inside the same
//! drawer container. Its element ids carry a `chat-room-panel-` prefix so
//! they never collide with ids the partial still ships (`chat-messages`,
//! `message-input`, `send-button`, `room_id`).

#[cfg(test)]
#[path = "chat_room_panel_test.rs"]
mod chat_room_panel_test;

use leptos::prelude::*;

use crate::app::ClientContext;
use crate::drawer::chat_room::{avatar_target, outgoing_message};
use crate::state::chat_room::{ChatRoomState, RoomMessage};

pub const MESSAGES_ID: &str = "chat-room-panel-messages";
pub const SPINNER_ID: &str = "chat-room-panel-spinner";
pub const INPUT_ID: &str = "chat-room-panel-input";
pub const SEND_BUTTON_ID: &str = "chat-room-panel-send";

/// Message list with infinite scroll upwards and a send row.
///
/// Wheel events at the top of the list load the next older page; the
/// loading rules live in `state::chat_room`.
#[component]
pub fn ChatRoomPanel(room: RwSignal<ChatRoomState>) -> impl IntoView {
    let ctx = StoredValue::new(expect_context::<ClientContext>());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        let request = room.with(|r| r.scroll);
        #[cfg(feature = "csr")]
        {
            if request.seq > 0 {
                if let Some(el) = messages_ref.get() {
                    crate::util::dom::scroll_to_bottom(&el, request.smooth);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = request;
    });

    Effect::new(move || {
        let seq = room.with(|r| r.focus_input_seq);
        #[cfg(feature = "csr")]
        {
            if seq > 0 {
                if let Some(el) = input_ref.get() {
                    let _ = el.focus();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = seq;
    });

    let on_wheel = move |_ev: leptos::ev::WheelEvent| {
        #[cfg(feature = "csr")]
        {
            use crate::state::chat_room::LoadTrigger;

            let scroll_top = messages_ref.get_untracked().map_or(0.0, |el| f64::from(el.scroll_top()));
            let ctx = ctx.get_value();
            leptos::task::spawn_local(async move {
                crate::drawer::chat_room::load_history_page(&ctx.fetch, &ctx.config, &room, LoadTrigger::Wheel { scroll_top })
                    .await;
            });
        }
    };

    let do_send = move || {
        let text = input.get_untracked();
        let room_id = room.with_untracked(|r| r.room_id().unwrap_or_default().to_owned());
        let Some(message) = outgoing_message(&text, &room_id) else {
            return;
        };
        ctx.with_value(|c| c.chat.send_message(message));
        input.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let messages = move || room.with(|r| r.messages().iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="chat-room">
            <div class="chat-room__messages" id=MESSAGES_ID node_ref=messages_ref on:wheel=on_wheel>
                <Show when=move || room.with(ChatRoomState::spinner_visible)>
                    <div class="spinner-border text-primary" id=SPINNER_ID role="status">
                        <span class="sr-only">"Loading..."</span>
                    </div>
                </Show>
                <For each=messages key=|entry| entry.key let:entry>
                    <ChatRoomMessage entry=entry/>
                </For>
            </div>
            <div class="chat-room__input-row">
                <input
                    class="chat-room__input"
                    id=INPUT_ID
                    type="text"
                    node_ref=input_ref
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn-primary chat-room__send" id=SEND_BUTTON_ID on:click=move |_| do_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// One message bubble; the avatar opens the sender's profile drawer.
#[component]
fn ChatRoomMessage(entry: RoomMessage) -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let sender = entry.message.sender;
    let own = ctx.session.with_untracked(|s| s.is_own(&sender, ctx.config.identity_key));
    let class = if own { "chat-room__message chat-room__message-sent" } else { "chat-room__message chat-room__message-received" };
    let alt = format!("{}'s avatar", sender.nickname);
    let nickname = sender.nickname.clone();
    let avatar = sender.avatar.clone();

    let on_avatar = move |_| {
        let (name, params) = avatar_target(&sender, own, &ctx.config);
        ctx.open_drawer(name, params);
    };

    view! {
        <div class=class>
            <div class="chat-room__avatar-container">
                <span class="chat-room__nickname">{nickname}</span>
                <img class="chat-room__avatar" src=avatar alt=alt on:click=on_avatar/>
            </div>
            <div class="chat-room__message-bubble">{entry.message.message}</div>
        </div>
    }
}
