//! Installation slot for the eligibility store.

use std::sync::Arc;

use hulpwijzer_core::eligibility::EligibilityStore;
use hulpwijzer_core::error::{HulpwijzerError, Result};
use once_cell::sync::OnceCell;

/// Hands the one [`EligibilityStore`] of the application to consumers.
///
/// Consumers receive a clone of the provider at wiring time, before startup
/// has finished loading the session. Asking for the store before
/// [`install`](Self::install) ran is a wiring bug and fails loudly with
/// [`HulpwijzerError::NotInitialized`].
#[derive(Clone, Default)]
pub struct EligibilityProvider {
    slot: Arc<OnceCell<Arc<EligibilityStore>>>,
}

impl EligibilityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the store. Only the first call succeeds.
    pub fn install(&self, store: Arc<EligibilityStore>) -> Result<()> {
        self.slot
            .set(store)
            .map_err(|_| HulpwijzerError::internal("Eligibility store already installed"))
    }

    pub fn store(&self) -> Result<Arc<EligibilityStore>> {
        self.slot.get().cloned().ok_or_else(|| {
            HulpwijzerError::not_initialized(
                "EligibilityProvider::store called before install",
            )
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}
