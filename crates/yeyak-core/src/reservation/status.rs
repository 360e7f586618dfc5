//! The known reservation status vocabulary.
//!
//! The agent labels reservation states with free-form strings; these are the
//! values it emits today. Consumers must treat any other string as an
//! unrecognized-but-valid status, never as an error.

/// The reservation was created but not yet sent to the restaurant.
pub const CREATED: &str = "생성";
/// The reservation request was sent to the restaurant.
pub const SENT: &str = "전송";
/// The restaurant confirmed the reservation.
pub const CONFIRMED: &str = "확정";
/// The reservation was cancelled.
pub const CANCELLED: &str = "취소";

/// Returns `true` if `status` is part of the known vocabulary.
pub fn is_known(status: &str) -> bool {
    matches!(status, CREATED | SENT | CONFIRMED | CANCELLED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vocabulary() {
        assert!(is_known("생성"));
        assert!(is_known("확정"));
        assert!(!is_known("보류"));
        assert!(!is_known(""));
    }
}
