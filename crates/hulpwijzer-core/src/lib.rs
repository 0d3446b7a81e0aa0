//! Domain layer for Hulpwijzer.
//!
//! Holds the eligibility session state container, the session identity store
//! and the scheme normalizer. Storage lives behind
//! [`session::SessionIdRepository`] and is implemented elsewhere.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod program;
pub mod session;

// Re-export common error type
pub use error::HulpwijzerError;
