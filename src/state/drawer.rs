//! Shared drawer container state and the `drawer-opened` event payload.
//!
//! DESIGN
//! ======
//! One container hosts at most one drawer. Opening while another drawer is
//! open closes it first; each open gets a generation so a slow markup fetch
//! cannot overwrite a drawer opened (or a close issued) after it started.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

use std::collections::BTreeMap;

/// Where a drawer's body comes from and which query parameters it carries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawerParams {
    /// Markup source, relative to the page.
    pub url: String,
    pub query_params: BTreeMap<String, String>,
}

impl DrawerParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), query_params: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query_params.get(key).map(String::as_str)
    }
}

/// Detail of the `drawer-opened` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawerOpened {
    pub drawer_name: String,
    pub params: DrawerParams,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerPhase {
    #[default]
    Closed,
    /// Markup is being fetched.
    Opening,
    Open,
}

/// Result of `begin_open`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenTicket {
    pub generation: u64,
    /// Drawer that was closed to make room, if any.
    pub closed: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct DrawerState {
    pub phase: DrawerPhase,
    /// Name of the opening/open drawer.
    pub name: Option<String>,
    pub params: Option<DrawerParams>,
    /// Body markup substituted into the container.
    pub markup: String,
    generation: u64,
    /// Bumped on every `drawer-opened` dispatch.
    pub opened_seq: u64,
}

impl DrawerState {
    /// Start opening `name`, closing whatever occupied the container.
    pub fn begin_open(&mut self, name: &str, params: DrawerParams) -> OpenTicket {
        let closed = self.close();
        self.generation += 1;
        self.phase = DrawerPhase::Opening;
        self.name = Some(name.to_owned());
        self.params = Some(params);
        OpenTicket { generation: self.generation, closed }
    }

    /// Install fetched markup. Returns the event to dispatch, or `None`
    /// when a newer open or a close superseded this one.
    pub fn finish_open(&mut self, generation: u64, markup: String) -> Option<DrawerOpened> {
        if generation != self.generation || self.phase != DrawerPhase::Opening {
            return None;
        }
        let drawer_name = self.name.clone()?;
        let params = self.params.clone().unwrap_or_default();
        self.phase = DrawerPhase::Open;
        self.markup = markup;
        self.opened_seq += 1;
        Some(DrawerOpened { drawer_name, params })
    }

    /// Abandon an open whose markup could not be fetched.
    pub fn fail_open(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != DrawerPhase::Opening {
            return false;
        }
        self.reset();
        true
    }

    /// Clear the container. Returns the name of the drawer that was there.
    pub fn close(&mut self) -> Option<String> {
        if self.phase == DrawerPhase::Closed {
            return None;
        }
        let name = self.name.clone();
        self.generation += 1;
        self.reset();
        name
    }

    /// Name of the drawer whose markup is currently shown.
    pub fn open_name(&self) -> Option<&str> {
        match self.phase {
            DrawerPhase::Open => self.name.as_deref(),
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.phase = DrawerPhase::Closed;
        self.name = None;
        self.params = None;
        self.markup.clear();
    }
}
