//! Generic drawer driver and the `Drawer` capability.
//!
//! ARCHITECTURE
//! ============
//! `open_drawer` performs the shared steps (close the previous drawer, fetch
//! markup, substitute it into the container) and then dispatches
//! `DrawerOpened` to every registered `Drawer`. Each implementation filters
//! on its own name and performs its setup, so new drawer kinds are added by
//! registering another implementation rather than by subclassing.

pub mod chat_room;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::sync::Arc;

use leptos::prelude::AnyView;

use crate::net::api;
use crate::net::fetch::{ApiError, AuthFetch};
use crate::state::StateCell;
use crate::state::drawer::{DrawerOpened, DrawerParams, DrawerState};

/// A drawer kind that customizes what happens once its markup is shown.
pub trait Drawer: Send + Sync {
    fn name(&self) -> &str;

    /// Called for every `drawer-opened` event with the container markup.
    fn on_opened(&self, event: &DrawerOpened, markup: &str);

    /// Called when this drawer leaves the container.
    fn on_closed(&self) {}

    /// Interactive body rendered below the fetched markup.
    fn view(&self) -> Option<AnyView> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawerError {
    #[error("drawer markup fetch failed: {0}")]
    Fetch(#[from] ApiError),
    #[error("a newer drawer replaced this one")]
    Superseded,
    #[error("drawer container is gone")]
    Detached,
}

/// Drawer implementations known to the page.
#[derive(Clone, Default)]
pub struct DrawerRegistry {
    drawers: Vec<Arc<dyn Drawer>>,
}

impl DrawerRegistry {
    pub fn register(&mut self, drawer: impl Drawer + 'static) {
        self.drawers.push(Arc::new(drawer));
    }

    pub fn dispatch_opened(&self, event: &DrawerOpened, markup: &str) {
        for drawer in &self.drawers {
            drawer.on_opened(event, markup);
        }
    }

    pub fn dispatch_closed(&self, name: &str) {
        for drawer in self.drawers.iter().filter(|d| d.name() == name) {
            drawer.on_closed();
        }
    }

    pub fn view_for(&self, name: &str) -> Option<AnyView> {
        self.drawers.iter().find(|d| d.name() == name).and_then(|d| d.view())
    }
}

/// Open drawer `name`, replacing any drawer in the container.
///
/// # Errors
///
/// Returns `Fetch` when the markup cannot be loaded (the drawer ends closed)
/// and `Superseded` when another open or a close won the race.
pub async fn open_drawer<F, S>(
    fetch: &F,
    state: &S,
    registry: &DrawerRegistry,
    name: &str,
    params: DrawerParams,
) -> Result<DrawerOpened, DrawerError>
where
    F: AuthFetch,
    S: StateCell<DrawerState>,
{
    let url = api::with_query(&params.url, &params.query_params);
    let ticket = state.with_mut(|d| d.begin_open(name, params)).ok_or(DrawerError::Detached)?;
    if let Some(previous) = &ticket.closed {
        registry.dispatch_closed(previous);
    }

    let markup = match api::fetch_markup(fetch, &url).await {
        Ok(markup) => markup,
        Err(e) => {
            leptos::logging::warn!("drawer {name}: {e}");
            let _ = state.with_mut(|d| d.fail_open(ticket.generation));
            return Err(DrawerError::Fetch(e));
        }
    };

    let event = state
        .with_mut(|d| d.finish_open(ticket.generation, markup.clone()))
        .ok_or(DrawerError::Detached)?
        .ok_or(DrawerError::Superseded)?;
    registry.dispatch_opened(&event, &markup);
    Ok(event)
}

/// Close the open drawer, if any, and notify it.
pub fn close_drawer<S: StateCell<DrawerState>>(state: &S, registry: &DrawerRegistry) {
    if let Some(name) = state.with_mut(DrawerState::close).flatten() {
        registry.dispatch_closed(&name);
    }
}

/// Drawer requested by a `data-drawer` trigger element: the name, plus its
/// `data-drawer-url` and optional `data-drawer-query` (`room_id=42&x=y`).
pub fn trigger_target(name: &str, url: Option<&str>, query: Option<&str>) -> Option<(String, DrawerParams)> {
    let url = url.filter(|u| !u.is_empty())?;
    if name.is_empty() {
        return None;
    }
    let mut params = DrawerParams::new(url);
    params.query_params = query.map(api::parse_query).unwrap_or_default();
    Some((name.to_owned(), params))
}
