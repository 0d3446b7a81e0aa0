//! Read models for the results list and the progress panel.

use std::collections::HashSet;

use hulpwijzer_core::eligibility::{EligibilityState, Mode};
use hulpwijzer_core::program::Program;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListState {
    Empty,
    Ready,
}

/// What the results surface renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub mode: Mode,
    pub programs: Vec<Program>,
    pub list_state: ListState,
}

impl ResultsView {
    pub fn from_state(state: &EligibilityState) -> Self {
        let programs = state.programs();
        let list_state = if programs.is_empty() {
            ListState::Empty
        } else {
            ListState::Ready
        };
        Self {
            mode: state.mode,
            programs,
            list_state,
        }
    }
}

/// How far intake has come, counted over distinct required fields.
///
/// Missing entries that are not required are ignored: the backend does not
/// promise that missing is a subset of required. `complete` is the backend's
/// own verdict and is reported as-is, independent of the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntakeProgress {
    pub answered: usize,
    pub required: usize,
    pub percent: u8,
    pub complete: bool,
}

impl IntakeProgress {
    pub fn from_state(state: &EligibilityState) -> Self {
        let required: HashSet<&str> = state.required_fields.iter().map(String::as_str).collect();
        let missing = state
            .missing_fields
            .iter()
            .map(String::as_str)
            .filter(|field| required.contains(field))
            .collect::<HashSet<_>>()
            .len();

        let answered = required.len() - missing;
        let percent = if required.is_empty() {
            100
        } else {
            (answered * 100 / required.len()) as u8
        };

        Self {
            answered,
            required: required.len(),
            percent,
            complete: state.complete,
        }
    }
}
