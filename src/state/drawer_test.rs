use super::*;

// =============================================================
// DrawerParams
// =============================================================

#[test]
fn drawer_params_builder_collects_query() {
    let params = DrawerParams::new("drawer/friend-drawer").with_query("username", "janedoe");
    assert_eq!(params.url, "drawer/friend-drawer");
    assert_eq!(params.query("username"), Some("janedoe"));
    assert_eq!(params.query("room_id"), None);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn drawer_state_default_closed() {
    let state = DrawerState::default();
    assert_eq!(state.phase, DrawerPhase::Closed);
    assert!(state.open_name().is_none());
    assert_eq!(state.opened_seq, 0);
}

#[test]
fn open_goes_through_opening_to_open() {
    let mut state = DrawerState::default();
    let ticket = state.begin_open("profile", DrawerParams::new("drawer/profile/"));
    assert_eq!(ticket.closed, None);
    assert_eq!(state.phase, DrawerPhase::Opening);
    assert!(state.open_name().is_none());

    let event = state.finish_open(ticket.generation, "<p>me</p>".to_owned()).expect("current open");
    assert_eq!(event.drawer_name, "profile");
    assert_eq!(event.params.url, "drawer/profile/");
    assert_eq!(state.phase, DrawerPhase::Open);
    assert_eq!(state.open_name(), Some("profile"));
    assert_eq!(state.markup, "<p>me</p>");
    assert_eq!(state.opened_seq, 1);
    assert_eq!(state.params.as_ref(), Some(&event.params));
}

#[test]
fn opening_second_drawer_closes_first() {
    let mut state = DrawerState::default();
    let first = state.begin_open("profile", DrawerParams::new("drawer/profile/"));
    state.finish_open(first.generation, "<p>me</p>".to_owned());

    let second = state.begin_open("chat-room", DrawerParams::new("drawer/chat-room"));
    assert_eq!(second.closed.as_deref(), Some("profile"));
    assert!(state.markup.is_empty());
    assert_eq!(state.name.as_deref(), Some("chat-room"));
}

#[test]
fn superseded_open_is_dropped() {
    let mut state = DrawerState::default();
    let slow = state.begin_open("profile", DrawerParams::new("drawer/profile/"));
    let fast = state.begin_open("chat-room", DrawerParams::new("drawer/chat-room"));
    assert_eq!(fast.closed.as_deref(), Some("profile"));

    state.finish_open(fast.generation, "<chat/>".to_owned()).expect("fast open");
    assert!(state.finish_open(slow.generation, "<me/>".to_owned()).is_none());
    assert_eq!(state.markup, "<chat/>");
    assert_eq!(state.opened_seq, 1);
}

#[test]
fn close_during_opening_discards_markup() {
    let mut state = DrawerState::default();
    let ticket = state.begin_open("profile", DrawerParams::new("drawer/profile/"));
    assert_eq!(state.close().as_deref(), Some("profile"));
    assert!(state.finish_open(ticket.generation, "<me/>".to_owned()).is_none());
    assert_eq!(state.phase, DrawerPhase::Closed);
}

#[test]
fn close_when_closed_is_noop() {
    let mut state = DrawerState::default();
    assert_eq!(state.close(), None);
}

#[test]
fn fail_open_only_applies_to_current_open() {
    let mut state = DrawerState::default();
    let stale = state.begin_open("profile", DrawerParams::new("drawer/profile/"));
    let current = state.begin_open("chat-room", DrawerParams::new("drawer/chat-room"));
    assert!(!state.fail_open(stale.generation));
    assert_eq!(state.phase, DrawerPhase::Opening);
    assert!(state.fail_open(current.generation));
    assert_eq!(state.phase, DrawerPhase::Closed);
    assert!(state.name.is_none());
}
