//! Session domain module.

mod model;

// Re-export public API
pub use model::{DEFAULT_SESSION_TITLE, Session};
