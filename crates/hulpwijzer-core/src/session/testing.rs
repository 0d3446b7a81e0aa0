//! Repository double shared by the core tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::Result;
use crate::session::{SessionId, SessionIdRepository};

#[derive(Default)]
pub(crate) struct MemoryRepo {
    pub(crate) value: Mutex<Option<SessionId>>,
    pub(crate) saves: AtomicUsize,
}

#[async_trait]
impl SessionIdRepository for MemoryRepo {
    async fn load(&self) -> Result<Option<SessionId>> {
        Ok(self.value.lock().unwrap().clone())
    }

    async fn save(&self, id: &SessionId) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.value.lock().unwrap() = Some(id.clone());
        Ok(())
    }
}
