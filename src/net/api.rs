//! REST helpers for the chat history, read markers and partial templates.
//!
//! Every helper is generic over `AuthFetch` so the browser build talks to the
//! server while tests script responses.
//!
//! ERROR HANDLING
//! ==============
//! Helpers return `Result<_, ApiError>`; the UI layers above decide whether a
//! failure degrades to "nothing this round" or gets logged.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use super::fetch::{ApiError, AuthFetch};
use super::types::HistoryPage;
use crate::config::ClientConfig;

pub(crate) fn history_endpoint(api_prefix: &str, room_id: &str, page: u32) -> String {
    format!("{api_prefix}/chat-message/{room_id}/history/?page={page}")
}

pub(crate) fn mark_read_endpoint(api_prefix: &str, room_id: &str) -> String {
    format!("{api_prefix}/active-chat/mark-read/{room_id}/")
}

/// Append `params` to `url` as a percent-encoded query string.
pub fn with_query(url: &str, params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        return url.to_owned();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{query}")
}

/// Parse `a=1&b=two` into a map. Malformed escapes keep their raw text.
pub fn parse_query(query: &str) -> BTreeMap<String, String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(k), decode_component(v))
        })
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw).map_or_else(|_| raw.clone(), |s| s.into_owned())
}

/// Fetch one page of a room's message history.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a history page.
pub async fn fetch_history_page<F: AuthFetch>(
    fetch: &F,
    config: &ClientConfig,
    room_id: &str,
    page: u32,
) -> Result<HistoryPage, ApiError> {
    let url = history_endpoint(&config.api_prefix, room_id, page);
    fetch.get(&url).await?.json()
}

/// Mark a room's messages as read. The outcome is deliberately ignored.
pub async fn mark_room_read<F: AuthFetch>(fetch: &F, config: &ClientConfig, room_id: &str) {
    let url = mark_read_endpoint(&config.api_prefix, room_id);
    let _ = fetch.post(&url).await;
}

/// Fetch partial markup (drawer or modal body).
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a non-OK status.
pub async fn fetch_markup<F: AuthFetch>(fetch: &F, url: &str) -> Result<String, ApiError> {
    fetch.get(url).await?.text()
}
