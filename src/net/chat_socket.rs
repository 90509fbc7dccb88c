//! Chat WebSocket client and the `ChatController` send handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat room panel never touches the socket. It hands outgoing messages
//! to `ChatController`, which queues them on an unbounded channel; the socket
//! task drains the queue while connected and routes incoming messages to the
//! chat room state.
//!
//! Frames are JSON text both ways:
//! outgoing `{ "message", "room_id" }`, incoming `{ "room_id", "sender", "message" }`.
//!
//! ERROR HANDLING
//! ==============
//! Undecodable frames are logged and skipped. Transport errors end the
//! connection and the loop reconnects with exponential backoff, reset only
//! after a session that carried traffic. Queued messages wait in the
//! channel until the next connection.

#[cfg(test)]
#[path = "chat_socket_test.rs"]
mod chat_socket_test;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::ReconnectBackoff;
use crate::net::types::{IncomingChatMessage, OutgoingChatMessage};

/// Cloneable handle that queues chat messages for the socket task.
#[derive(Clone, Debug, Default)]
pub struct ChatController {
    tx: Option<UnboundedSender<OutgoingChatMessage>>,
}

impl ChatController {
    /// A controller plus the receiving end the socket task drains.
    pub fn channel() -> (Self, UnboundedReceiver<OutgoingChatMessage>) {
        let (tx, rx) = mpsc::unbounded();
        (Self { tx: Some(tx) }, rx)
    }

    /// A controller with no socket behind it; every send is dropped.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Queue `message` for the socket task.
    ///
    /// Returns `false` when no socket task is listening.
    pub fn send_message(&self, message: OutgoingChatMessage) -> bool {
        match &self.tx {
            Some(tx) => tx.unbounded_send(message).is_ok(),
            None => {
                leptos::logging::warn!("chat message dropped: socket not running");
                false
            }
        }
    }
}

/// WebSocket URL for `path` on `host`, matching the page's scheme.
pub fn ws_url(is_https: bool, host: &str, path: &str) -> String {
    let scheme = if is_https { "wss" } else { "ws" };
    let path = if path.starts_with('/') { path.to_owned() } else { format!("/{path}") };
    format!("{scheme}://{host}{path}")
}

/// Decode one incoming text frame.
pub fn parse_incoming(text: &str) -> Option<IncomingChatMessage> {
    match serde_json::from_str(text) {
        Ok(message) => Some(message),
        Err(e) => {
            leptos::logging::warn!("chat frame ignored: {e}");
            None
        }
    }
}

/// How one connection attempt ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionEnd {
    /// The socket carried traffic (a frame arrived or a send went through).
    pub established: bool,
    /// Every `ChatController` is gone; the loop should stop.
    pub queue_closed: bool,
}

/// Reconnect delays: doubling from `base_ms` up to `max_ms` across failed
/// attempts, back to `base_ms` after a session that was established.
///
/// `WebSocket::open` succeeds even when the server is down, so a session
/// counts as established only once it has carried traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReconnectSchedule {
    backoff: ReconnectBackoff,
    delay_ms: u32,
}

impl ReconnectSchedule {
    pub fn new(backoff: ReconnectBackoff) -> Self {
        Self { backoff, delay_ms: backoff.base_ms }
    }

    /// Delay to sleep before the next attempt, given how the last one ended.
    pub fn delay_after(&mut self, session: SessionEnd) -> u32 {
        if session.established {
            self.delay_ms = self.backoff.base_ms;
        }
        let delay = self.delay_ms;
        self.delay_ms = self.backoff.next(delay);
        delay
    }
}

/// Spawn the chat socket lifecycle as a local async task.
#[cfg(feature = "csr")]
pub fn spawn_chat_socket(
    config: std::sync::Arc<crate::config::ClientConfig>,
    room: leptos::prelude::RwSignal<crate::state::chat_room::ChatRoomState>,
    rx: UnboundedReceiver<OutgoingChatMessage>,
) {
    leptos::task::spawn_local(chat_socket_loop(config, room, rx));
}

#[cfg(feature = "csr")]
async fn chat_socket_loop(
    config: std::sync::Arc<crate::config::ClientConfig>,
    room: leptos::prelude::RwSignal<crate::state::chat_room::ChatRoomState>,
    mut rx: UnboundedReceiver<OutgoingChatMessage>,
) {
    let mut schedule = ReconnectSchedule::new(config.reconnect);

    loop {
        let location = web_sys::window().map(|w| w.location());
        let is_https = location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .is_some_and(|p| p == "https:");
        let host = location
            .and_then(|l| l.host().ok())
            .unwrap_or_else(|| "localhost:8000".to_owned());
        let url = ws_url(is_https, &host, &config.chat_socket_path);

        let session = match connect_and_run(&url, room, &mut rx).await {
            Ok(session) if session.queue_closed => {
                leptos::logging::log!("chat controller dropped; socket stopped");
                return;
            }
            Ok(session) => {
                leptos::logging::log!("chat socket disconnected");
                session
            }
            Err(e) => {
                leptos::logging::warn!("chat socket error: {e}");
                SessionEnd::default()
            }
        };

        let delay_ms = schedule.delay_after(session);
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
    }
}

/// Run one connection until either direction ends.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    room: leptos::prelude::RwSignal<crate::state::chat_room::ChatRoomState>,
    rx: &mut UnboundedReceiver<OutgoingChatMessage>,
) -> Result<SessionEnd, String> {
    use std::cell::Cell;

    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    use crate::state::StateCell;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();
    let established = Cell::new(false);

    let send_task = async {
        while let Some(message) = rx.next().await {
            let text = match serde_json::to_string(&message) {
                Ok(text) => text,
                Err(e) => {
                    leptos::logging::error!("chat message encode failed: {e}");
                    continue;
                }
            };
            if ws_write.send(Message::Text(text)).await.is_err() {
                return false;
            }
            established.set(true);
        }
        true
    };

    let recv_task = async {
        while let Some(frame) = ws_read.next().await {
            match frame {
                Ok(Message::Text(text)) => {
                    established.set(true);
                    if let Some(incoming) = parse_incoming(&text) {
                        let _ = room.with_mut(|r| r.receive(incoming));
                    }
                }
                Ok(Message::Bytes(_)) => established.set(true),
                Err(e) => {
                    leptos::logging::warn!("chat socket recv error: {e}");
                    break;
                }
            }
        }
    };

    let queue_closed = match futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await {
        futures::future::Either::Left((queue_closed, _)) => queue_closed,
        futures::future::Either::Right(((), _)) => false,
    };
    Ok(SessionEnd { established: established.get(), queue_closed })
}
