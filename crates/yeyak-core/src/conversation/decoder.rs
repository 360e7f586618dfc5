//! Reply payload decoding.
//!
//! The agent replies with an untyped, mixed-shape payload: a JSON array of
//! elements, a single JSON object, or plain prose. This module turns such a
//! raw string into an ordered sequence of typed [`ConversationEvent`]s.
//! Decoding never fails outward — anything unparsable is wrapped whole as
//! narrative text, so the UI always has something to show for a reply.

use super::event::ConversationEvent;
use chrono::Utc;
use serde_json::{Map, Value};

/// Discriminator value for a selectable restaurant candidate.
const RESTAURANT_OPTION_TAG: &str = "Restaurant Option";
/// Discriminator value for a reservation-state update.
const RESERVATION_STATE_TAG: &str = "Reservation State";

/// Decodes a raw agent reply into an ordered, never-empty event sequence.
///
/// Dispatch rules, applied per element:
/// - `type` matching `"Restaurant Option"` or `"Reservation State"`
///   (case-insensitive) produces the corresponding event, with missing
///   string fields falling back to `""`.
/// - an element carrying a `text` field but no recognized `type` becomes
///   a `SystemText` event.
/// - anything else produces no event at all. Dropping unmatched elements
///   silently is the documented contract with the agent, not an accident;
///   a debug line is emitted so the loss is at least observable.
///
/// If the payload is not parsable JSON — or parsing succeeds but every
/// element was dropped — the entire raw string becomes one `SystemText`
/// event.
pub fn decode(raw: &str) -> Vec<ConversationEvent> {
    let trimmed = raw.trim();

    let looks_like_array = trimmed.starts_with('[') && trimmed.ends_with(']');
    let looks_like_object = trimmed.starts_with('{') && trimmed.ends_with('}');

    if looks_like_array || looks_like_object {
        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Array(elements)) => {
                let events: Vec<ConversationEvent> =
                    elements.iter().filter_map(decode_element).collect();
                if !events.is_empty() {
                    return events;
                }
            }
            Ok(value) => {
                if let Some(event) = decode_element(&value) {
                    return vec![event];
                }
            }
            Err(error) => {
                tracing::debug!(
                    "[ReplyDecoder] payload looked structured but did not parse: {error}"
                );
            }
        }
    }

    // Fallback: the whole reply is narrative text.
    vec![ConversationEvent::system(raw)]
}

/// Dispatches one payload element to an event, or drops it.
fn decode_element(value: &Value) -> Option<ConversationEvent> {
    let object = value.as_object()?;

    if let Some(tag) = object.get("type").and_then(Value::as_str) {
        if tag.eq_ignore_ascii_case(RESTAURANT_OPTION_TAG) {
            return Some(ConversationEvent::RestaurantOption {
                title: text_field(object, "title"),
                id: text_field(object, "id"),
                timestamp: Utc::now(),
            });
        }
        if tag.eq_ignore_ascii_case(RESERVATION_STATE_TAG) {
            return Some(ConversationEvent::ReservationUpdate {
                title: first_text_field(object, &["restaurant_title", "title"]),
                id: first_text_field(object, &["restaurant_id", "id"]),
                status: text_field(object, "status"),
                datetime: object
                    .get("datetime")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                persons: object
                    .get("persons")
                    .and_then(Value::as_u64)
                    .map(|count| count as u32),
                timestamp: Utc::now(),
            });
        }
    }

    if let Some(text) = object.get("text").and_then(Value::as_str) {
        return Some(ConversationEvent::system(text));
    }

    tracing::debug!("[ReplyDecoder] dropping element matching no known shape: {value}");
    None
}

/// Reads a string field, falling back to `""` when absent or non-string.
fn text_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Reads the first present string field among `keys`, falling back to `""`.
fn first_text_field(object: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_of(event: &ConversationEvent) -> (&'static str, String) {
        match event {
            ConversationEvent::UserText { text, .. } => ("user", text.clone()),
            ConversationEvent::SystemText { text, .. } => ("system", text.clone()),
            ConversationEvent::RestaurantOption { title, id, .. } => {
                ("option", format!("{title}/{id}"))
            }
            ConversationEvent::ReservationUpdate {
                title,
                id,
                status,
                datetime,
                persons,
                ..
            } => (
                "reservation",
                format!("{title}/{id}/{status}/{datetime:?}/{persons:?}"),
            ),
        }
    }

    #[test]
    fn test_array_reply_preserves_element_order() {
        let raw = r#"[
            {"type":"Message", "text":"강남역에서 점심 먹을만한 식당은 다음과 같습니다."},
            {"type":"Restaurant Option", "title":"미소야", "id":"111"},
            {"type":"Restaurant Option", "title":"홍콩반점", "id":"222"}
        ]"#;

        let events = decode(raw);

        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], ConversationEvent::SystemText { .. }));
        assert!(matches!(
            events[1],
            ConversationEvent::RestaurantOption { ref title, ref id, .. }
                if title == "미소야" && id == "111"
        ));
        assert!(matches!(
            events[2],
            ConversationEvent::RestaurantOption { ref title, .. } if title == "홍콩반점"
        ));
    }

    #[test]
    fn test_single_object_reply() {
        let events = decode(r#"{"type":"Message", "text":"무엇을 도와드릴까요?"}"#);

        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            ConversationEvent::SystemText { ref text, .. } if text == "무엇을 도와드릴까요?"
        ));
    }

    #[test]
    fn test_reservation_state_field_preferences() {
        let raw = r#"{"type":"Reservation State", "restaurant_title":"홍콩반점",
                      "restaurant_id":"222", "status":"생성",
                      "datetime":"2025-09-09 12:30", "persons": 4}"#;

        let events = decode(raw);

        assert_eq!(events.len(), 1);
        match &events[0] {
            ConversationEvent::ReservationUpdate {
                title,
                id,
                status,
                datetime,
                persons,
                ..
            } => {
                assert_eq!(title, "홍콩반점");
                assert_eq!(id, "222");
                assert_eq!(status, "생성");
                assert_eq!(datetime.as_deref(), Some("2025-09-09 12:30"));
                assert_eq!(*persons, Some(4));
            }
            other => panic!("expected reservation update, got {other:?}"),
        }
    }

    #[test]
    fn test_reservation_state_fallback_fields() {
        // `title`/`id` are accepted when the `restaurant_*` variants are
        // absent; persons stays absent rather than defaulting to zero.
        let raw = r#"{"type":"reservation state", "title":"미소야", "id":"111"}"#;

        let events = decode(raw);

        match &events[0] {
            ConversationEvent::ReservationUpdate {
                title,
                id,
                status,
                datetime,
                persons,
                ..
            } => {
                assert_eq!(title, "미소야");
                assert_eq!(id, "111");
                assert_eq!(status, "");
                assert_eq!(*datetime, None);
                assert_eq!(*persons, None);
            }
            other => panic!("expected reservation update, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_option_fields_default_to_empty() {
        let events = decode(r#"{"type":"RESTAURANT OPTION"}"#);

        assert!(matches!(
            events[0],
            ConversationEvent::RestaurantOption { ref title, ref id, .. }
                if title.is_empty() && id.is_empty()
        ));
    }

    #[test]
    fn test_plain_text_wraps_whole_string() {
        let events = decode("not json at all");

        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            ConversationEvent::SystemText { ref text, .. } if text == "not json at all"
        ));
    }

    #[test]
    fn test_unrecognized_array_element_is_dropped() {
        let raw = r#"[
            {"kind":"unknown", "payload": 42},
            {"type":"Reservation State", "title":"홍콩반점", "id":"222", "status":"확정"}
        ]"#;

        let events = decode(raw);

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], ConversationEvent::ReservationUpdate { .. }));
    }

    #[test]
    fn test_array_of_only_unrecognized_elements_falls_back() {
        let raw = r#"[1, 2, {"kind":"unknown"}]"#;

        let events = decode(raw);

        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            ConversationEvent::SystemText { ref text, .. } if text == raw
        ));
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let raw = r#"[{"type": "Restaurant Option""#;

        let events = decode(raw);

        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            ConversationEvent::SystemText { ref text, .. } if text == raw
        ));
    }

    #[test]
    fn test_decode_is_idempotent_up_to_timestamps() {
        let raw = r#"[
            {"type":"Restaurant Option", "title":"양반", "id":"333"},
            {"text":"narrative"},
            {"type":"Reservation State", "title":"양반", "id":"333", "status":"전송"}
        ]"#;

        let first: Vec<_> = decode(raw).iter().map(shape_of).collect();
        let second: Vec<_> = decode(raw).iter().map(shape_of).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
