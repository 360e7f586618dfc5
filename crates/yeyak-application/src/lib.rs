//! Application layer for the Yeyak client.
//!
//! Owns [`ConversationController`], which orchestrates one conversation
//! turn end to end: forward text to the transport, decode the reply,
//! append to the log, re-derive the reservation snapshot, and update the
//! session title.

mod controller;
mod turn;

pub use controller::ConversationController;
pub use turn::TurnState;
