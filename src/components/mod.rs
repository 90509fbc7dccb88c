//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the drawer, modal and friend list surfaces while
//! reading/writing shared state through `ClientContext`.

pub mod chat_room_panel;
pub mod drawer_host;
pub mod friend_list;
pub mod modal_host;
