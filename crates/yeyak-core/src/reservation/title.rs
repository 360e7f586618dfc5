//! Session title formatting.
//!
//! Renders a reservation snapshot into the human-readable session title,
//! e.g. `홍콩반점 - 2025년 9월 9일 오후 7시(확정)`.

use super::snapshot::ReservationSnapshot;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Date/time layouts the agent is known to emit: ISO-8601 and the
/// space-separated form, each with and without seconds.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Formats a reservation snapshot into a session title.
///
/// The title is `{restaurant} - {localized datetime}({status})`, where the
/// date/time segment is dropped when the snapshot carries no datetime or it
/// does not parse, and the status suffix is dropped when the status is
/// empty. Formatting never fails — at worst the title is the bare
/// restaurant name.
pub fn format_session_title(snapshot: &ReservationSnapshot) -> String {
    let datetime_label = snapshot
        .datetime
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .and_then(korean_datetime_label);

    let mut title = snapshot.title.clone();
    if let Some(label) = datetime_label {
        title.push_str(" - ");
        title.push_str(&label);
    }
    if !snapshot.status.is_empty() {
        title.push('(');
        title.push_str(&snapshot.status);
        title.push(')');
    }
    title
}

/// Renders a wire datetime as a Korean 12-hour clock label, `None` if the
/// value matches no known layout.
fn korean_datetime_label(raw: &str) -> Option<String> {
    let datetime = parse_wire_datetime(raw)?;
    let (meridiem, hour) = clock_hour(datetime.hour());

    let mut label = format!(
        "{}년 {}월 {}일 {} {}시",
        datetime.year(),
        datetime.month(),
        datetime.day(),
        meridiem,
        hour
    );
    if datetime.minute() != 0 {
        label.push_str(&format!(" {}분", datetime.minute()));
    }
    Some(label)
}

fn parse_wire_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// Maps an hour-of-day to the 오전/오후 marker and 12-hour display hour.
/// Hour 0 displays as 오전 12시, hour 12 as 오후 12시.
fn clock_hour(hour: u32) -> (&'static str, u32) {
    let meridiem = if hour < 12 { "오전" } else { "오후" };
    let display = match hour % 12 {
        0 => 12,
        other => other,
    };
    (meridiem, display)
}
