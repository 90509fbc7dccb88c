use super::*;

// =============================================================
// ModalRegistry
// =============================================================

#[test]
fn default_registry_has_auth_modals() {
    let registry = ModalRegistry::with_defaults();
    assert_eq!(registry.get("signin").map(|m| m.url.as_str()), Some("/signin"));
    assert_eq!(registry.get("signup").map(|m| m.url.as_str()), Some("/signup"));
    assert!(registry.get("unknown").is_none());
}

#[test]
fn register_overrides_existing_url() {
    let mut registry = ModalRegistry::with_defaults();
    registry.register("signin", "/auth/signin");
    assert_eq!(registry.get("signin").map(|m| m.url.as_str()), Some("/auth/signin"));
}

// =============================================================
// ModalState
// =============================================================

#[test]
fn modal_state_default_inactive_and_empty() {
    let state = ModalState::default();
    assert!(!state.active);
    assert!(state.rendered.is_none());
    assert!(state.active_name().is_none());
}

#[test]
fn show_replaces_previous_modal() {
    let mut state = ModalState::default();
    state.show("signin", "<form id=signin/>".to_owned());
    state.show("signup", "<form id=signup/>".to_owned());
    assert_eq!(
        state.rendered,
        Some(RenderedModal { name: "signup".to_owned(), markup: "<form id=signup/>".to_owned() })
    );
    assert_eq!(state.active_name(), Some("signup"));
}

#[test]
fn close_keeps_markup_but_deactivates() {
    let mut state = ModalState::default();
    state.show("signin", "<form/>".to_owned());
    state.close();
    assert!(!state.active);
    assert!(state.active_name().is_none());
    assert!(state.rendered.is_some());
}
