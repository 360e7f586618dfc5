//! Conversation domain module.
//!
//! This module contains the typed conversation events exchanged with the
//! reservation agent, the append-only per-session log, and the decoder that
//! turns raw agent reply payloads into ordered event sequences.
//!
//! # Module Structure
//!
//! - `event`: Conversation event types (`ConversationEvent`)
//! - `log`: Append-only event log (`ConversationLog`)
//! - `decoder`: Raw reply payload decoding (`decode`)

mod decoder;
mod event;
mod log;

// Re-export public API
pub use decoder::decode;
pub use event::ConversationEvent;
pub use log::ConversationLog;
