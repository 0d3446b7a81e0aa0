//! Application layer for Hulpwijzer.
//!
//! Use cases that consumers (chat, results list, progress panel) drive. They
//! coordinate the eligibility store with backend round trips and derive the
//! read models each surface renders.

pub mod eligibility_usecase;
pub mod provider;
pub mod views;

pub use eligibility_usecase::{EligibilityUseCase, ReplyOutcome, RequestTicket};
pub use provider::EligibilityProvider;
pub use views::{IntakeProgress, ListState, ResultsView};
