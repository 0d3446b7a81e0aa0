//! Eligibility session state.
//!
//! [`EligibilityStore`] is the single writer for everything a consumer renders:
//! profile, schemes, field sets, sources, chat history and mode. Consumers read
//! cloned [`EligibilityState`] snapshots and go through the store's mutation
//! methods for every change.

mod message;
mod mode;
mod payload;
mod state;
mod store;

pub use message::{ChatMessage, MessageRole};
pub use mode::Mode;
pub use payload::BackendPayload;
pub use state::EligibilityState;
pub use store::EligibilityStore;

/// Open bag of facts about the user, replaced wholesale on every backend sync.
pub type Profile = serde_json::Map<String, serde_json::Value>;

/// One backend-identified program candidate. Opaque outside the normalizer.
pub type Scheme = serde_json::Map<String, serde_json::Value>;

/// Provenance record for an answer or fact. Opaque to the core.
pub type Source = serde_json::Map<String, serde_json::Value>;
