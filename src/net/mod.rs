//! Networking modules for REST calls and the chat socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` is the authenticated request capability, `api` formats endpoints
//! and decodes their payloads, `chat_socket` owns the real-time channel and
//! `types` defines the shared wire schema.

pub mod api;
pub mod chat_socket;
pub mod fetch;
pub mod types;

#[cfg(test)]
#[path = "fetch_fake.rs"]
pub(crate) mod fetch_fake;
