//! Modal registry and the shared modal container state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The registry is built once at startup (name → markup URL). `ModalState`
//! is the single container: showing a modal replaces whatever it held, and
//! closing only drops the `modal-active` flag.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::collections::BTreeMap;

/// A registered modal and where its markup is served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalSource {
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalRegistry {
    modals: BTreeMap<String, ModalSource>,
}

impl ModalRegistry {
    /// Registry with the site's auth modals.
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        registry.register("signin", "/signin");
        registry.register("signup", "/signup");
        registry
    }

    pub fn register(&mut self, name: &str, url: &str) {
        self.modals.insert(name.to_owned(), ModalSource { url: url.to_owned() });
    }

    pub fn get(&self, name: &str) -> Option<&ModalSource> {
        self.modals.get(name)
    }
}

/// Markup of the modal currently in the container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedModal {
    pub name: String,
    pub markup: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub rendered: Option<RenderedModal>,
    /// Drives the `modal-active` class on overlay and modal.
    pub active: bool,
}

impl ModalState {
    /// Replace the container content and activate the overlay.
    pub fn show(&mut self, name: &str, markup: String) {
        self.rendered = Some(RenderedModal { name: name.to_owned(), markup });
        self.active = true;
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn active_name(&self) -> Option<&str> {
        if !self.active {
            return None;
        }
        self.rendered.as_ref().map(|m| m.name.as_str())
    }
}
