//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by surface (`drawer`, `chat_room`, `modal`, ...) and every
//! transition is a plain method, so the lifecycles are testable without a
//! DOM. Components hold the models in `RwSignal`s; async drivers reach them
//! through `StateCell`, which reports a disposed signal as `None`.

pub mod chat_room;
pub mod drawer;
pub mod friends;
pub mod modal;
pub mod session;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

/// Mutable access to a state model that may have been torn down.
///
/// `with_mut` returns `None` once the backing storage is gone (an unmounted
/// component's signal), which async tasks treat as a detached container.
pub trait StateCell<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
