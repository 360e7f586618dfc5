//! Conversation turn orchestration.

use crate::turn::TurnState;
use std::sync::Arc;
use yeyak_core::YeyakError;
use yeyak_core::conversation::{ConversationEvent, decode};
use yeyak_core::error::Result;
use yeyak_core::reservation::{ReservationSnapshot, current_reservation, format_session_title};
use yeyak_core::session::Session;
use yeyak_core::transport::BookingTransport;

/// Orchestrates conversation turns for one session.
///
/// Every turn runs the same pipeline regardless of how it was triggered:
/// append outbound text (optimistically, before the round-trip), call the
/// transport, decode the reply, append the decoded batch atomically,
/// re-derive the reservation snapshot, and refresh the session title. A
/// transport failure becomes a single narrative `SystemText` in the log —
/// part of the permanent visible history, never fatal to the session.
///
/// The controller is the single writer for its session's log; callers hold
/// it exclusively and `await` turns to completion, so no turn overlaps
/// another.
pub struct ConversationController {
    session: Session,
    transport: Arc<dyn BookingTransport>,
    state: TurnState,
    last_error: Option<YeyakError>,
    greeted: bool,
}

impl ConversationController {
    /// Opens a fresh session on the backend and wraps it in a controller.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot mint a session id. This is
    /// the only transport failure that surfaces as an `Err` — once a
    /// session exists, failures are folded into its log instead.
    pub async fn open(transport: Arc<dyn BookingTransport>) -> Result<Self> {
        let session_id = transport.create_session().await?;
        tracing::debug!("[ConversationController] opened session: {session_id}");
        Ok(Self::resume(Session::new(session_id), transport))
    }

    /// Adopts a caller-retained session (e.g. re-entered after navigation).
    ///
    /// A session that already has history will not be greeted again.
    pub fn resume(session: Session, transport: Arc<dyn BookingTransport>) -> Self {
        Self {
            greeted: !session.log.is_empty(),
            session,
            transport,
            state: TurnState::Idle,
            last_error: None,
        }
    }

    /// Requests the agent's greeting.
    ///
    /// Runs at most once per session lifetime and only while the log is
    /// still empty; later calls are no-ops. The greeting is an ordinary
    /// turn without user text, so its reply (or failure) lands in the log
    /// through the same pipeline as everything else.
    pub async fn greet(&mut self) {
        if self.greeted || !self.session.log.is_empty() {
            return;
        }
        self.greeted = true;

        self.state = TurnState::AwaitingReply;
        let reply = self.transport.greet(&self.session.id).await;
        self.finish_turn(reply);
    }

    /// Submits user text and processes the agent's reply.
    ///
    /// The `UserText` event is appended before the round-trip so the log
    /// reflects send order even under slow networks.
    pub async fn submit(&mut self, text: &str) {
        self.session.log.append([ConversationEvent::user(text)]);

        self.state = TurnState::AwaitingReply;
        let reply = self.transport.send(&self.session.id, text).await;
        self.finish_turn(reply);
    }

    /// Books a restaurant option by title.
    ///
    /// Structured UI actions synthesize the natural-language command the
    /// agent understands and drive the identical submit pipeline — there is
    /// no separate code path for button-triggered turns.
    pub async fn book_option(&mut self, option_title: &str) {
        let command = format!("{option_title} 예약해줘.");
        self.submit(&command).await;
    }

    /// Returns the session this controller drives.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Hands the session back to the caller.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Returns the current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the transport error from the last turn, if it failed.
    pub fn last_error(&self) -> Option<&YeyakError> {
        self.last_error.as_ref()
    }

    /// Derives the current reservation from the log.
    pub fn reservation(&self) -> Option<ReservationSnapshot> {
        current_reservation(&self.session.log)
    }

    /// Completes a turn: append the decoded reply (or the failure as
    /// narrative text), re-derive the reservation, refresh the title.
    fn finish_turn(&mut self, reply: Result<String>) {
        match reply {
            Ok(raw) => {
                let events = decode(&raw);
                tracing::debug!(
                    "[ConversationController] appending {} decoded events",
                    events.len()
                );
                self.session.log.append(events);
                self.last_error = None;
            }
            Err(error) => {
                tracing::warn!("[ConversationController] transport failure: {error}");
                self.state = TurnState::Failed;
                self.session
                    .log
                    .append([ConversationEvent::system(format!(
                        "서버 요청에 실패했습니다: {error}"
                    ))]);
                self.last_error = Some(error);
            }
        }

        if let Some(snapshot) = current_reservation(&self.session.log) {
            self.session.title = format_session_title(&snapshot);
        }

        self.state = TurnState::Idle;
    }
}
