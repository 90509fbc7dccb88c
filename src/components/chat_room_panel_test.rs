use super::*;

const PARTIAL_IDS: &[&str] = &["chat-messages", "message-input", "send-button", "loading-spinner", "room_id"];

#[test]
fn panel_ids_do_not_collide_with_partial_markup() {
    for id in [MESSAGES_ID, SPINNER_ID, INPUT_ID, SEND_BUTTON_ID] {
        assert!(!PARTIAL_IDS.contains(&id), "{id} duplicates a partial id");
    }
}

#[test]
fn panel_ids_are_distinct() {
    let ids = [MESSAGES_ID, SPINNER_ID, INPUT_ID, SEND_BUTTON_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(ids[i + 1..].iter().all(|b| a != b));
    }
}
