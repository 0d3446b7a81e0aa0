use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How likely a program applies to the user.
///
/// Anything the backend sends that is not clearly one of the three buckets
/// lands in [`Confidence::Low`]. There is no path that upgrades an unknown
/// signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    #[default]
    Low,
}

impl Confidence {
    /// Buckets a textual label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Confidence::High,
            "medium" => Confidence::Medium,
            _ => Confidence::Low,
        }
    }

    /// Buckets a raw backend value. Non-strings are unrecognized.
    pub fn from_signal(signal: Option<&Value>) -> Self {
        match signal {
            Some(Value::String(label)) => Self::from_label(label),
            _ => Confidence::Low,
        }
    }
}
