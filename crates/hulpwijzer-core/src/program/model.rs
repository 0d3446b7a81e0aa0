use serde::{Deserialize, Serialize};

use crate::program::Confidence;

/// UI-facing view of one scheme.
///
/// Always derived from the current scheme list and never stored on its own.
/// Optional estimates are `None` when unknown, which is not the same as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_time_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time_weeks: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_amount_eur: Option<f64>,
}
