//! Session identifier repositories.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hulpwijzer_core::error::{HulpwijzerError, Result};
use hulpwijzer_core::session::{SessionId, SessionIdRepository};

use crate::storage::KeyValueFile;

/// Stores the session identifier under one key of a [`KeyValueFile`].
///
/// File access runs on the blocking pool. A blank stored value reads as
/// absent so a fresh identifier gets generated.
#[derive(Debug, Clone)]
pub struct FileSessionIdRepository {
    file: Arc<KeyValueFile>,
    key: String,
}

impl FileSessionIdRepository {
    pub fn new(file: KeyValueFile, key: impl Into<String>) -> Self {
        Self {
            file: Arc::new(file),
            key: key.into(),
        }
    }
}

#[async_trait]
impl SessionIdRepository for FileSessionIdRepository {
    async fn load(&self) -> Result<Option<SessionId>> {
        let file = self.file.clone();
        let key = self.key.clone();
        let stored = tokio::task::spawn_blocking(move || file.get(&key))
            .await
            .map_err(|e| HulpwijzerError::internal(format!("Failed to join task: {}", e)))??;

        Ok(stored.and_then(|value| SessionId::new(value).ok()))
    }

    async fn save(&self, id: &SessionId) -> Result<()> {
        let file = self.file.clone();
        let key = self.key.clone();
        let value = id.to_string();
        tokio::task::spawn_blocking(move || file.set(&key, &value))
            .await
            .map_err(|e| HulpwijzerError::internal(format!("Failed to join task: {}", e)))??;

        tracing::debug!(path = ?self.file.path(), key = %self.key, "Session id persisted");
        Ok(())
    }
}

/// Keeps the identifier in process memory only.
#[derive(Debug, Default)]
pub struct InMemorySessionIdRepository {
    value: Mutex<Option<SessionId>>,
}

impl InMemorySessionIdRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionIdRepository for InMemorySessionIdRepository {
    async fn load(&self) -> Result<Option<SessionId>> {
        let value = self
            .value
            .lock()
            .map_err(|e| HulpwijzerError::internal(format!("Poisoned lock: {}", e)))?;
        Ok(value.clone())
    }

    async fn save(&self, id: &SessionId) -> Result<()> {
        let mut value = self
            .value
            .lock()
            .map_err(|e| HulpwijzerError::internal(format!("Poisoned lock: {}", e)))?;
        *value = Some(id.clone());
        Ok(())
    }
}
