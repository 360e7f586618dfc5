//! Domain layer for Yeyak, a conversational restaurant-reservation client.
//!
//! This crate owns the conversation-state reconciliation engine: typed
//! conversation events, the append-only per-session log, the reply decoder
//! that turns raw agent payloads into events, the reservation resolver that
//! derives the current reservation from the log, and the session-title
//! formatter. The transport to the booking agent is only a trait seam here;
//! the HTTP implementation lives in `yeyak-transport`.

pub mod conversation;
pub mod error;
pub mod reservation;
pub mod session;
pub mod transport;

// Re-export common error type
pub use error::YeyakError;
