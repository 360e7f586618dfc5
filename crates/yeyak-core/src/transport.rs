//! Transport seam to the reservation agent backend.

use crate::error::Result;
use async_trait::async_trait;

/// The backend collaborator the conversation controller talks to.
///
/// All three operations fail with [`crate::YeyakError::Transport`] carrying
/// an HTTP-like status code when one exists; the controller treats every
/// such failure identically. Replies are raw strings — decoding them is the
/// domain layer's job, never the transport's.
#[async_trait]
pub trait BookingTransport: Send + Sync {
    /// Opens a new agent session and returns its opaque, non-empty id.
    async fn create_session(&self) -> Result<String>;

    /// Requests the agent's greeting for a fresh session (no user text).
    async fn greet(&self, session_id: &str) -> Result<String>;

    /// Sends one user message and returns the raw reply payload.
    async fn send(&self, session_id: &str, text: &str) -> Result<String>;
}
