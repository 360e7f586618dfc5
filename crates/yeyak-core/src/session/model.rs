//! Session domain model.

use crate::conversation::ConversationLog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to a session before its first reservation update.
pub const DEFAULT_SESSION_TITLE: &str = "새 대화";

/// One conversation with the reservation agent.
///
/// A session groups the backend-issued identifier, the display title (kept
/// current by the title formatter as reservation state evolves), the
/// creation timestamp, and the conversation log. The controller mutates the
/// title and log of the session it was given but never replaces its
/// identity. Sessions live only as long as the caller retains them — there
/// is no persistence across process restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Backend-issued session identifier (opaque, never empty)
    pub id: String,
    /// Human-readable session title
    pub title: String,
    /// Timestamp when the session was created on this client
    pub created_at: DateTime<Utc>,
    /// The conversation so far
    pub log: ConversationLog,
}

impl Session {
    /// Creates a fresh session around a backend-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            log: ConversationLog::new(id.clone()),
            title: DEFAULT_SESSION_TITLE.to_string(),
            created_at: Utc::now(),
            id,
        }
    }
}
