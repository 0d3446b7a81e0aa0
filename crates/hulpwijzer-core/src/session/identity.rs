//! Session identity store.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use crate::session::{SessionId, SessionIdRepository};

/// Owns the durable session identifier.
///
/// The identifier is loaded once and cached. Storage failures never reach the
/// caller: the store logs them, marks itself degraded and keeps serving the
/// in-memory identifier, which is then lost on the next restart.
pub struct SessionIdentityStore {
    repository: Arc<dyn SessionIdRepository>,
    id_prefix: String,
    current: Mutex<Option<SessionId>>,
    degraded: AtomicBool,
}

impl SessionIdentityStore {
    pub fn new(repository: Arc<dyn SessionIdRepository>, id_prefix: impl Into<String>) -> Self {
        Self {
            repository,
            id_prefix: id_prefix.into(),
            current: Mutex::new(None),
            degraded: AtomicBool::new(false),
        }
    }

    /// Returns the stored identifier, creating and persisting one on first use.
    ///
    /// Idempotent: once a value is cached every call returns it until
    /// [`set`](Self::set) or [`reset`](Self::reset) replaces it.
    pub async fn get_or_create(&self) -> SessionId {
        let mut current = self.current.lock().await;
        if let Some(id) = current.as_ref() {
            return id.clone();
        }

        let stored = match self.repository.load().await {
            Ok(stored) => stored,
            Err(e) => {
                self.mark_degraded("load", &e);
                None
            }
        };

        let id = match stored {
            Some(id) => {
                tracing::info!(session_id = %id, "Restored session id");
                id
            }
            None => {
                let fresh = SessionId::generate(&self.id_prefix);
                tracing::info!(session_id = %fresh, "Created session id");
                self.persist(&fresh).await;
                fresh
            }
        };

        *current = Some(id.clone());
        id
    }

    /// Overwrites the identifier in memory and in storage.
    pub async fn set(&self, id: SessionId) {
        let mut current = self.current.lock().await;
        self.persist(&id).await;
        tracing::debug!(session_id = %id, "Session id set");
        *current = Some(id);
    }

    /// Generates, persists and returns a fresh identifier.
    pub async fn reset(&self) -> SessionId {
        let mut current = self.current.lock().await;
        let fresh = loop {
            let candidate = SessionId::generate(&self.id_prefix);
            if current.as_ref() != Some(&candidate) {
                break candidate;
            }
        };
        self.persist(&fresh).await;
        tracing::info!(session_id = %fresh, "Session id reset");
        *current = Some(fresh.clone());
        fresh
    }

    /// True once any storage operation has failed during this process.
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }

    async fn persist(&self, id: &SessionId) {
        if let Err(e) = self.repository.save(id).await {
            self.mark_degraded("save", &e);
        }
    }

    fn mark_degraded(&self, operation: &str, error: &crate::error::HulpwijzerError) {
        self.degraded.store(true, Ordering::Relaxed);
        tracing::warn!(
            operation,
            error = %error,
            "Session storage unavailable, keeping session id in memory only"
        );
    }
}
