//! Turn state for a conversation.

/// Where a session's current turn stands.
///
/// At most one turn is in flight per session; the surface that can start a
/// turn is expected to quiesce input while `AwaitingReply`. `Failed` is
/// entered when the transport errors and left for `Idle` once the failure
/// has been written into the log as narrative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    /// Ready to accept input.
    #[default]
    Idle,
    /// A request is in flight; input should be quiesced.
    AwaitingReply,
    /// The last turn's transport call failed.
    Failed,
}
