//! Eligibility state container.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::eligibility::{BackendPayload, ChatMessage, EligibilityState, Mode};
use crate::program::Program;
use crate::session::{SessionId, SessionIdentityStore};

/// Owns the state of one eligibility session.
///
/// All writes go through the methods below. Each one takes the write lock
/// for its whole duration, so readers observe either the state before or the
/// state after a mutation, never a mix. Mode changes only through
/// [`apply_backend_payload`](Self::apply_backend_payload) and
/// [`reset`](Self::reset).
///
/// Payloads are applied last-write-wins. Discarding stale responses is the
/// caller's responsibility.
pub struct EligibilityStore {
    state: RwLock<EligibilityState>,
    identity: Arc<SessionIdentityStore>,
}

impl EligibilityStore {
    /// Loads or creates the session id and starts an empty intake session.
    ///
    /// This is the only place the container touches durable storage during
    /// startup.
    pub async fn initialize(identity: Arc<SessionIdentityStore>) -> Self {
        let session_id = identity.get_or_create().await;
        Self {
            state: RwLock::new(EligibilityState::new(session_id)),
            identity,
        }
    }

    /// Clones the current state.
    pub async fn snapshot(&self) -> EligibilityState {
        self.state.read().await.clone()
    }

    pub async fn session_id(&self) -> SessionId {
        self.state.read().await.session_id.clone()
    }

    pub async fn mode(&self) -> Mode {
        self.state.read().await.mode
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.state.read().await.messages.clone()
    }

    /// Normalized programs for the current scheme list.
    pub async fn programs(&self) -> Vec<Program> {
        self.state.read().await.programs()
    }

    /// Replaces the session id here and in durable storage.
    pub async fn set_session_id(&self, id: SessionId) {
        let mut state = self.state.write().await;
        self.identity.set(id.clone()).await;
        state.session_id = id;
    }

    /// Ingests a raw backend response.
    ///
    /// Never fails: anything that does not match the expected shape falls
    /// back to its empty default, see [`BackendPayload`].
    pub async fn apply_backend_payload(&self, payload: &Value) {
        self.apply_parsed(BackendPayload::from_value(payload)).await;
    }

    /// Ingests an already validated payload.
    pub async fn apply_parsed(&self, payload: BackendPayload) {
        let mut state = self.state.write().await;
        tracing::debug!(
            session_id = %state.session_id,
            schemes = payload.schemes.len(),
            required = payload.required_fields.len(),
            missing = payload.missing_fields.len(),
            sources = payload.sources.len(),
            mode = ?payload.mode,
            "Applying backend payload"
        );
        state.apply(payload);
    }

    /// Appends the assistant reply, if any, and applies the payload under one
    /// write lock. Readers never see the reply without the state it came with.
    pub async fn apply_turn(&self, reply: Option<ChatMessage>, payload: BackendPayload) {
        let mut state = self.state.write().await;
        tracing::debug!(
            session_id = %state.session_id,
            reply = reply.is_some(),
            schemes = payload.schemes.len(),
            mode = ?payload.mode,
            "Applying backend turn"
        );
        if let Some(message) = reply {
            state.messages.push(message);
        }
        state.apply(payload);
    }

    /// Appends to the chat history in call order. Duplicate ids are kept.
    pub async fn push_message(&self, message: ChatMessage) {
        let mut state = self.state.write().await;
        tracing::debug!(
            message_id = %message.id,
            role = ?message.role,
            position = state.messages.len(),
            "Appending chat message"
        );
        state.messages.push(message);
    }

    /// Starts a new session: fresh id, empty state, intake mode.
    pub async fn reset(&self) -> SessionId {
        let mut state = self.state.write().await;
        let fresh = self.identity.reset().await;
        *state = EligibilityState::new(fresh.clone());
        tracing::debug!(session_id = %fresh, "Eligibility session reset");
        fresh
    }
}
