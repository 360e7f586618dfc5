//! Reservation domain module.
//!
//! Derives the current reservation from a conversation log and formats it
//! for display.
//!
//! # Module Structure
//!
//! - `snapshot`: Derived reservation state (`ReservationSnapshot`,
//!   `current_reservation`)
//! - `status`: The known reservation status vocabulary
//! - `title`: Session title formatting (`format_session_title`)

mod snapshot;
pub mod status;
mod title;

// Re-export public API
pub use snapshot::{ReservationSnapshot, current_reservation};
pub use title::format_session_title;
