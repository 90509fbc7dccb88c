use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::net::fetch_fake::FakeFetch;
use crate::state::drawer::DrawerPhase;

// =============================================================
// Helpers
// =============================================================

#[derive(Clone, Default)]
struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    fn push(&self, entry: String) {
        self.0.lock().expect("journal lock").push(entry);
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().expect("journal lock").clone()
    }
}

struct RecordingDrawer {
    name: &'static str,
    journal: Journal,
}

impl Drawer for RecordingDrawer {
    fn name(&self) -> &str {
        self.name
    }

    fn on_opened(&self, event: &DrawerOpened, markup: &str) {
        if event.drawer_name != self.name {
            return;
        }
        self.journal.push(format!("{}:opened:{markup}", self.name));
    }

    fn on_closed(&self) {
        self.journal.push(format!("{}:closed", self.name));
    }
}

fn registry(journal: &Journal) -> DrawerRegistry {
    let mut registry = DrawerRegistry::default();
    for name in ["profile", "chat-room"] {
        registry.register(RecordingDrawer { name, journal: journal.clone() });
    }
    registry
}

// =============================================================
// open_drawer
// =============================================================

#[test]
fn open_drawer_fetches_markup_with_query_and_dispatches() {
    let journal = Journal::default();
    let fetch = FakeFetch::new().respond_text("<aside/>");
    let state = RefCell::new(DrawerState::default());
    let params = DrawerParams::new("drawer/chat-room").with_query("room_id", "42");

    let event = block_on(open_drawer(&fetch, &state, &registry(&journal), "chat-room", params.clone()))
        .expect("drawer opens");

    assert_eq!(event, DrawerOpened { drawer_name: "chat-room".to_owned(), params });
    assert_eq!(fetch.gets(), vec!["drawer/chat-room?room_id=42".to_owned()]);
    assert_eq!(journal.entries(), vec!["chat-room:opened:<aside/>".to_owned()]);
    let state = state.borrow();
    assert_eq!(state.phase, DrawerPhase::Open);
    assert_eq!(state.markup, "<aside/>");
    assert_eq!(state.opened_seq, 1);
}

#[test]
fn open_drawer_closes_previous_drawer_first() {
    let journal = Journal::default();
    let registry = registry(&journal);
    let fetch = FakeFetch::new().respond_text("<me/>").respond_text("<chat/>");
    let state = RefCell::new(DrawerState::default());

    block_on(open_drawer(&fetch, &state, &registry, "profile", DrawerParams::new("drawer/profile/")))
        .expect("profile opens");
    block_on(open_drawer(&fetch, &state, &registry, "chat-room", DrawerParams::new("drawer/chat-room")))
        .expect("chat opens");

    assert_eq!(
        journal.entries(),
        vec![
            "profile:opened:<me/>".to_owned(),
            "profile:closed".to_owned(),
            "chat-room:opened:<chat/>".to_owned(),
        ]
    );
    assert_eq!(state.borrow().open_name(), Some("chat-room"));
}

#[test]
fn open_drawer_failure_ends_closed_without_dispatch() {
    let journal = Journal::default();
    let fetch = FakeFetch::new().respond_status(404);
    let state = RefCell::new(DrawerState::default());

    let result = block_on(open_drawer(
        &fetch,
        &state,
        &registry(&journal),
        "profile",
        DrawerParams::new("drawer/profile/"),
    ));

    assert_eq!(result, Err(DrawerError::Fetch(ApiError::Status(404))));
    assert!(journal.entries().is_empty());
    assert_eq!(state.borrow().phase, DrawerPhase::Closed);
    assert_eq!(state.borrow().opened_seq, 0);
}

#[test]
fn open_drawer_superseded_by_close_while_fetching() {
    let journal = Journal::default();
    let registry = registry(&journal);
    let (fetch, release) = FakeFetch::new().respond_text("<me/>").gated();
    let state = RefCell::new(DrawerState::default());

    let result = block_on(async {
        let open = open_drawer(&fetch, &state, &registry, "profile", DrawerParams::new("drawer/profile/"));
        let close = async {
            close_drawer(&state, &registry);
            let _ = release.send(());
        };
        let (result, ()) = futures::join!(open, close);
        result
    });

    assert_eq!(result, Err(DrawerError::Superseded));
    assert_eq!(journal.entries(), vec!["profile:closed".to_owned()]);
    assert_eq!(state.borrow().phase, DrawerPhase::Closed);
    assert!(state.borrow().markup.is_empty());
}

// =============================================================
// close_drawer / registry
// =============================================================

#[test]
fn close_drawer_when_closed_notifies_nobody() {
    let journal = Journal::default();
    let state = RefCell::new(DrawerState::default());
    close_drawer(&state, &registry(&journal));
    assert!(journal.entries().is_empty());
}

#[test]
fn registry_without_views_renders_nothing() {
    let journal = Journal::default();
    assert!(registry(&journal).view_for("profile").is_none());
    assert!(registry(&journal).view_for("missing").is_none());
}

// =============================================================
// trigger_target
// =============================================================

#[test]
fn trigger_target_parses_query_attribute() {
    let (name, params) =
        trigger_target("chat-room", Some("drawer/chat-room/"), Some("room_id=42&title=hello+there")).expect("trigger");
    assert_eq!(name, "chat-room");
    assert_eq!(params.url, "drawer/chat-room/");
    assert_eq!(params.query("room_id"), Some("42"));
    assert_eq!(params.query("title"), Some("hello there"));
}

#[test]
fn trigger_target_without_query_has_no_params() {
    let (_, params) = trigger_target("profile", Some("drawer/profile/"), None).expect("trigger");
    assert!(params.query_params.is_empty());
}

#[test]
fn trigger_target_requires_name_and_url() {
    assert_eq!(trigger_target("", Some("drawer/profile/"), None), None);
    assert_eq!(trigger_target("profile", None, None), None);
    assert_eq!(trigger_target("profile", Some(""), None), None);
}
