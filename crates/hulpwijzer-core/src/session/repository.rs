//! Session identifier repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::session::SessionId;

/// Durable storage for the single session identifier.
///
/// Implementations report storage failures as errors. Deciding what to do
/// with them is up to [`crate::session::SessionIdentityStore`].
#[async_trait]
pub trait SessionIdRepository: Send + Sync {
    /// Returns the stored identifier, or `None` when nothing is stored.
    async fn load(&self) -> Result<Option<SessionId>>;

    /// Overwrites the stored identifier.
    async fn save(&self, id: &SessionId) -> Result<()>;
}
