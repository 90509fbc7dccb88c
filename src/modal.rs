//! Modal manager: open a registered modal by name, close the active one.
//!
//! ERROR HANDLING
//! ==============
//! An unknown name or a failed markup fetch is logged and leaves the
//! container untouched; nothing is surfaced to the user.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::net::api;
use crate::net::fetch::{ApiError, AuthFetch};
use crate::state::StateCell;
use crate::state::modal::{ModalRegistry, ModalState};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModalError {
    #[error("Modal not found: {0}")]
    NotFound(String),
    #[error("modal markup fetch failed: {0}")]
    Fetch(#[from] ApiError),
    #[error("modal container is gone")]
    Detached,
}

/// Render modal `name` into the shared container and activate it.
///
/// # Errors
///
/// Returns `NotFound` for unregistered names and `Fetch` when the markup
/// cannot be loaded; the container is unchanged in both cases.
pub async fn open_modal<F, S>(fetch: &F, registry: &ModalRegistry, state: &S, name: &str) -> Result<(), ModalError>
where
    F: AuthFetch,
    S: StateCell<ModalState>,
{
    let Some(source) = registry.get(name) else {
        let err = ModalError::NotFound(name.to_owned());
        leptos::logging::error!("{err}");
        return Err(err);
    };
    let markup = api::fetch_markup(fetch, &source.url).await.map_err(|e| {
        leptos::logging::error!("modal {name}: {e}");
        ModalError::Fetch(e)
    })?;
    state.with_mut(|m| m.show(name, markup)).ok_or(ModalError::Detached)
}

/// Drop the active flag from overlay and modal.
pub fn close_modal<S: StateCell<ModalState>>(state: &S) {
    let _ = state.with_mut(ModalState::close);
}
