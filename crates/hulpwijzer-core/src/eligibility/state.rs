use serde::Serialize;

use crate::eligibility::{BackendPayload, ChatMessage, Mode, Profile, Scheme, Source};
use crate::program::{Program, normalize};
use crate::session::SessionId;

/// Point-in-time view of an eligibility session.
///
/// Snapshots are plain values: holding one never blocks the store, and a
/// later mutation never changes a snapshot already handed out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityState {
    pub session_id: SessionId,
    pub profile: Profile,
    pub schemes: Vec<Scheme>,
    pub required_fields: Vec<String>,
    pub missing_fields: Vec<String>,
    pub sources: Vec<Source>,
    pub messages: Vec<ChatMessage>,
    pub mode: Mode,
    /// Whether the backend declared intake finished.
    pub complete: bool,
}

impl EligibilityState {
    /// An empty intake session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            profile: Profile::new(),
            schemes: Vec::new(),
            required_fields: Vec::new(),
            missing_fields: Vec::new(),
            sources: Vec::new(),
            messages: Vec::new(),
            mode: Mode::Intake,
            complete: false,
        }
    }

    /// Replaces every backend-owned field. Messages and session id survive.
    pub(crate) fn apply(&mut self, payload: BackendPayload) {
        self.profile = payload.profile;
        self.schemes = payload.schemes;
        self.required_fields = payload.required_fields;
        self.missing_fields = payload.missing_fields;
        self.sources = payload.sources;
        self.mode = payload.mode;
        self.complete = payload.complete.unwrap_or(false);
    }

    /// Program view models for the current schemes.
    pub fn programs(&self) -> Vec<Program> {
        normalize(&self.schemes)
    }
}
