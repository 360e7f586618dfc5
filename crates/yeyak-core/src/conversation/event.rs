//! Conversation event types.
//!
//! This module contains the closed set of event kinds that can appear in a
//! conversation with the reservation agent. Every consumption site (the
//! resolver, rendering, title formatting) matches exhaustively, so a new
//! variant forces each of them to be revisited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a conversation with the reservation agent.
///
/// Timestamps are assigned on the client when an event is created (at decode
/// or submission time); they are never trusted from the wire payload.
/// `title` and `id` are never null — a missing field decodes to an empty
/// string. `status` is a free-form label; the known vocabulary lives in
/// [`crate::reservation::status`], but an unrecognized status is still valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// Text submitted by the user.
    UserText {
        text: String,
        timestamp: DateTime<Utc>,
    },
    /// Plain narrative from the agent (or a client-side notice).
    SystemText {
        text: String,
        timestamp: DateTime<Utc>,
    },
    /// A selectable restaurant candidate offered by the agent.
    RestaurantOption {
        title: String,
        id: String,
        timestamp: DateTime<Utc>,
    },
    /// A reservation-state update from the agent.
    ReservationUpdate {
        title: String,
        id: String,
        status: String,
        datetime: Option<String>,
        persons: Option<u32>,
        timestamp: DateTime<Utc>,
    },
}

impl ConversationEvent {
    /// Creates a `UserText` event stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self::UserText {
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Creates a `SystemText` event stamped with the current time.
    pub fn system(text: impl Into<String>) -> Self {
        Self::SystemText {
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Returns the timestamp assigned when this event was created.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::UserText { timestamp, .. }
            | Self::SystemText { timestamp, .. }
            | Self::RestaurantOption { timestamp, .. }
            | Self::ReservationUpdate { timestamp, .. } => *timestamp,
        }
    }

    pub(crate) fn set_timestamp(&mut self, new_timestamp: DateTime<Utc>) {
        match self {
            Self::UserText { timestamp, .. }
            | Self::SystemText { timestamp, .. }
            | Self::RestaurantOption { timestamp, .. }
            | Self::ReservationUpdate { timestamp, .. } => *timestamp = new_timestamp,
        }
    }
}
