//! Chat turn orchestration around the eligibility store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use hulpwijzer_core::eligibility::{BackendPayload, ChatMessage, EligibilityStore};
use hulpwijzer_core::session::SessionId;
use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::views::{IntakeProgress, ResultsView};

/// Identifies one backend request issued by this use case.
///
/// Tickets increase monotonically. Only the newest ticket may write its
/// response into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// What happened to a backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The payload was applied; `reply` is the assistant message appended, if any.
    Applied { reply: Option<ChatMessage> },
    /// A newer request was issued (or the session reset) first. Nothing changed.
    Stale,
}

/// Drives the eligibility store on behalf of the UI surfaces.
///
/// The store itself applies payloads last-write-wins; this use case is the
/// caller that filters out responses overtaken by a newer request.
pub struct EligibilityUseCase {
    store: Arc<EligibilityStore>,
    latest_ticket: AtomicU64,
    apply_gate: Mutex<()>,
}

impl EligibilityUseCase {
    pub fn new(store: Arc<EligibilityStore>) -> Self {
        Self {
            store,
            latest_ticket: AtomicU64::new(0),
            apply_gate: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<EligibilityStore> {
        &self.store
    }

    /// Issues a ticket for a backend request about to be sent.
    pub fn begin_request(&self) -> RequestTicket {
        RequestTicket(self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Records what the user typed and issues the ticket for the request it
    /// triggers.
    pub async fn send_user_message(&self, content: impl Into<String>) -> (ChatMessage, RequestTicket) {
        let message = ChatMessage::user(new_message_id(), content);
        self.store.push_message(message.clone()).await;
        (message, self.begin_request())
    }

    /// Applies the backend response for `ticket` unless it has gone stale.
    pub async fn complete_request(&self, ticket: RequestTicket, payload: &Value) -> ReplyOutcome {
        self.complete_parsed(ticket, BackendPayload::from_value(payload)).await
    }

    /// Same as [`complete_request`](Self::complete_request) for a payload
    /// already validated at the boundary, e.g. with
    /// [`BackendPayload::from_json_str`].
    ///
    /// A non-empty `reply` becomes an assistant message, appended together
    /// with the payload replacing the backend-owned state.
    pub async fn complete_parsed(
        &self,
        ticket: RequestTicket,
        payload: BackendPayload,
    ) -> ReplyOutcome {
        let _gate = self.apply_gate.lock().await;

        let latest = self.latest_ticket.load(Ordering::SeqCst);
        if ticket.0 < latest {
            tracing::debug!(ticket = ticket.0, latest, "Discarding stale backend response");
            return ReplyOutcome::Stale;
        }

        let reply = payload
            .reply
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| ChatMessage::assistant(new_message_id(), text));

        self.store.apply_turn(reply.clone(), payload).await;
        ReplyOutcome::Applied { reply }
    }

    pub async fn results_view(&self) -> ResultsView {
        ResultsView::from_state(&self.store.snapshot().await)
    }

    pub async fn progress(&self) -> IntakeProgress {
        IntakeProgress::from_state(&self.store.snapshot().await)
    }

    /// Starts a new eligibility session. In-flight requests become stale.
    pub async fn start_over(&self) -> SessionId {
        let _gate = self.apply_gate.lock().await;
        self.latest_ticket.fetch_add(1, Ordering::SeqCst);
        self.store.reset().await
    }
}

fn new_message_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hulpwijzer_core::eligibility::{MessageRole, Mode};
    use hulpwijzer_core::session::SessionIdentityStore;
    use hulpwijzer_infrastructure::InMemorySessionIdRepository;
    use serde_json::json;

    async fn usecase() -> EligibilityUseCase {
        let repo = Arc::new(InMemorySessionIdRepository::new());
        let identity = Arc::new(SessionIdentityStore::new(repo, "sess"));
        EligibilityUseCase::new(Arc::new(EligibilityStore::initialize(identity).await))
    }

    #[tokio::test]
    async fn test_turn_appends_user_then_assistant() {
        let usecase = usecase().await;

        let (sent, ticket) = usecase.send_user_message("I live in Utrecht").await;
        let outcome = usecase
            .complete_request(
                ticket,
                &json!({
                    "reply": "How many children live with you?",
                    "profile": {"municipality": "utrecht"},
                    "missing_fields": ["children"]
                }),
            )
            .await;

        let messages = usecase.store().messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], sent);
        assert_eq!(messages[1].role, MessageRole::Assistant);
        assert_eq!(messages[1].content, "How many children live with you?");
        assert_ne!(messages[0].id, messages[1].id);
        assert!(matches!(outcome, ReplyOutcome::Applied { reply: Some(_) }));
    }

    #[tokio::test]
    async fn test_blank_reply_adds_no_message() {
        let usecase = usecase().await;
        let ticket = usecase.begin_request();

        let outcome = usecase.complete_request(ticket, &json!({"reply": "  "})).await;

        assert_eq!(outcome, ReplyOutcome::Applied { reply: None });
        assert!(usecase.store().messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_non_json_payload_degrades_to_empty_intake() {
        let usecase = usecase().await;
        let ticket = usecase.begin_request();
        usecase
            .complete_request(ticket, &json!({"mode": "results", "schemes": [{"id": "a"}]}))
            .await;

        let ticket = usecase.begin_request();
        let outcome = usecase
            .complete_parsed(ticket, BackendPayload::from_json_str("not json"))
            .await;

        assert_eq!(outcome, ReplyOutcome::Applied { reply: None });
        let state = usecase.store().snapshot().await;
        assert_eq!(state.mode, Mode::Intake);
        assert!(state.schemes.is_empty());
        assert!(state.messages.is_empty());
        assert_eq!(usecase.progress().await.percent, 100);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let usecase = usecase().await;
        let older = usecase.begin_request();
        let newer = usecase.begin_request();

        usecase
            .complete_request(newer, &json!({"mode": "results", "schemes": [{"id": "a"}]}))
            .await;
        let outcome = usecase
            .complete_request(older, &json!({"mode": "intake", "reply": "old"}))
            .await;

        assert_eq!(outcome, ReplyOutcome::Stale);
        let state = usecase.store().snapshot().await;
        assert_eq!(state.mode, Mode::Results);
        assert_eq!(state.schemes.len(), 1);
        assert!(state.messages.is_empty());
    }

    #[tokio::test]
    async fn test_start_over_invalidates_in_flight() {
        let usecase = usecase().await;
        let (_, ticket) = usecase.send_user_message("hello").await;
        let before = usecase.store().session_id().await;

        let fresh = usecase.start_over().await;
        let outcome = usecase.complete_request(ticket, &json!({"mode": "results"})).await;

        assert_ne!(fresh, before);
        assert_eq!(outcome, ReplyOutcome::Stale);
        let state = usecase.store().snapshot().await;
        assert!(state.messages.is_empty());
        assert_eq!(state.mode, Mode::Intake);
    }

    #[tokio::test]
    async fn test_views_track_store() {
        let usecase = usecase().await;
        let ticket = usecase.begin_request();
        usecase
            .complete_request(
                ticket,
                &json!({
                    "required_fields": ["municipality", "children"],
                    "missing_fields": ["children"]
                }),
            )
            .await;

        assert_eq!(usecase.progress().await.percent, 50);
        assert!(usecase.results_view().await.programs.is_empty());
    }
}
