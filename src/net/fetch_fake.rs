//! Scripted `AuthFetch` used by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;

use super::fetch::{ApiError, AuthFetch, FetchResponse};

/// Replays queued GET responses in order and records every request.
///
/// When gated, the first GET parks until the paired sender fires, which lets
/// a test interleave a second caller while one request is outstanding.
#[derive(Default)]
pub(crate) struct FakeFetch {
    responses: RefCell<VecDeque<Result<FetchResponse, ApiError>>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    gets: RefCell<Vec<String>>,
    posts: RefCell<Vec<String>>,
}

impl FakeFetch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond_json(self, value: serde_json::Value) -> Self {
        self.respond_text(&value.to_string())
    }

    pub(crate) fn respond_text(self, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(FetchResponse { ok: true, status: 200, body: body.to_owned() }));
        self
    }

    pub(crate) fn respond_status(self, status: u16) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(FetchResponse { ok: false, status, body: String::new() }));
        self
    }

    pub(crate) fn respond_error(self, err: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    pub(crate) fn gated(self) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        (self, tx)
    }

    pub(crate) fn gets(&self) -> Vec<String> {
        self.gets.borrow().clone()
    }

    pub(crate) fn posts(&self) -> Vec<String> {
        self.posts.borrow().clone()
    }
}

impl AuthFetch for FakeFetch {
    async fn get(&self, url: &str) -> Result<FetchResponse, ApiError> {
        self.gets.borrow_mut().push(url.to_owned());
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(FetchResponse { ok: false, status: 404, body: String::new() }))
    }

    async fn post(&self, url: &str) -> Result<FetchResponse, ApiError> {
        self.posts.borrow_mut().push(url.to_owned());
        Ok(FetchResponse { ok: true, status: 204, body: String::new() })
    }
}
