//! Derived reservation state.

use crate::conversation::{ConversationEvent, ConversationLog};
use serde::{Deserialize, Serialize};

/// The current reservation as derived from a conversation log.
///
/// A snapshot has no identity or lifecycle of its own — it is a pure
/// function of the log's contents at a point in time and is recomputed on
/// every log mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationSnapshot {
    /// Restaurant title ("" when the agent sent none)
    pub title: String,
    /// Restaurant identifier ("" when the agent sent none)
    pub id: String,
    /// Free-form status label, see [`crate::reservation::status`]
    pub status: String,
    /// Reservation date/time as received from the agent, unparsed
    pub datetime: Option<String>,
    /// Party size; `None` when not yet negotiated, never zero-by-default
    pub persons: Option<u32>,
}

/// Derives the current reservation from the log, or `None` if no
/// reservation-state event exists anywhere in it.
///
/// The log is scanned from the most recent event backward and the first
/// `ReservationUpdate` wins. This is last-write-wins by *position*:
/// insertion order is the single source of truth, and an earlier event
/// carrying a later timestamp value is never favored. The same rule applies
/// uniformly when one reply batch contains several updates — the last one
/// in the batch is the current state.
pub fn current_reservation(log: &ConversationLog) -> Option<ReservationSnapshot> {
    log.all().iter().rev().find_map(|event| match event {
        ConversationEvent::ReservationUpdate {
            title,
            id,
            status,
            datetime,
            persons,
            ..
        } => Some(ReservationSnapshot {
            title: title.clone(),
            id: id.clone(),
            status: status.clone(),
            datetime: datetime.clone(),
            persons: *persons,
        }),
        ConversationEvent::UserText { .. }
        | ConversationEvent::SystemText { .. }
        | ConversationEvent::RestaurantOption { .. } => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::status;
    use chrono::{Duration, Utc};

    fn update(status: &str, timestamp_offset_secs: i64) -> ConversationEvent {
        ConversationEvent::ReservationUpdate {
            title: "홍콩반점".to_string(),
            id: "222".to_string(),
            status: status.to_string(),
            datetime: None,
            persons: None,
            timestamp: Utc::now() + Duration::seconds(timestamp_offset_secs),
        }
    }

    #[test]
    fn test_latest_update_by_position_wins() {
        let mut log = ConversationLog::new("s-1");
        // The earlier update deliberately carries the *later* timestamp;
        // position must still win.
        log.append([
            update(status::CREATED, 60),
            ConversationEvent::system("사이 메시지"),
            update(status::CONFIRMED, 0),
        ]);

        let snapshot = current_reservation(&log).expect("reservation expected");
        assert_eq!(snapshot.status, status::CONFIRMED);
    }

    #[test]
    fn test_last_update_within_one_batch_wins() {
        let mut log = ConversationLog::new("s-1");
        log.append([update(status::CREATED, 0), update(status::SENT, 0)]);

        let snapshot = current_reservation(&log).expect("reservation expected");
        assert_eq!(snapshot.status, status::SENT);
    }

    #[test]
    fn test_absent_without_reservation_events() {
        let mut log = ConversationLog::new("s-1");
        log.append([
            ConversationEvent::user("추천해줘"),
            ConversationEvent::system("추천 목록입니다."),
            ConversationEvent::RestaurantOption {
                title: "미소야".to_string(),
                id: "111".to_string(),
                timestamp: Utc::now(),
            },
        ]);

        assert_eq!(current_reservation(&log), None);
    }

    #[test]
    fn test_snapshot_carries_all_fields() {
        let mut log = ConversationLog::new("s-1");
        log.append([ConversationEvent::ReservationUpdate {
            title: "양반".to_string(),
            id: "333".to_string(),
            status: "확정".to_string(),
            datetime: Some("2025-09-09 19:00".to_string()),
            persons: Some(4),
            timestamp: Utc::now(),
        }]);

        let snapshot = current_reservation(&log).expect("reservation expected");
        assert_eq!(snapshot.title, "양반");
        assert_eq!(snapshot.id, "333");
        assert_eq!(snapshot.datetime.as_deref(), Some("2025-09-09 19:00"));
        assert_eq!(snapshot.persons, Some(4));
    }
}
