//! Append-only conversation log.

use super::event::ConversationEvent;
use serde::{Deserialize, Serialize};

/// An ordered, append-only sequence of conversation events scoped to one
/// session.
///
/// Insertion order is the single source of truth for "what happened when" —
/// events are never reordered or removed. Timestamps are clamped on append
/// so they stay monotonically non-decreasing even if the wall clock moves
/// backward between batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationLog {
    /// The session this log belongs to
    session_id: String,
    /// Events in insertion order
    events: Vec<ConversationEvent>,
}

impl ConversationLog {
    /// Creates an empty log for the given session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            events: Vec::new(),
        }
    }

    /// Returns the session this log belongs to.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Appends a batch of events to the end of the log, preserving the
    /// batch's internal order.
    ///
    /// The whole batch lands or none of it does — callers pass the complete
    /// decoded reply in one call. A timestamp earlier than the previous
    /// event's is clamped up to it.
    pub fn append(&mut self, events: impl IntoIterator<Item = ConversationEvent>) {
        for mut event in events {
            if let Some(last) = self.events.last()
                && event.timestamp() < last.timestamp()
            {
                event.set_timestamp(last.timestamp());
            }
            self.events.push(event);
        }
    }

    /// Returns a read-only view of all events in insertion order.
    pub fn all(&self) -> &[ConversationEvent] {
        &self.events
    }

    /// Returns the number of events in the log.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the log contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
