use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which surface the session is showing: question gathering or results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Intake,
    Results,
}

impl Mode {
    /// Maps a backend-declared mode to a [`Mode`].
    ///
    /// Only the exact string `"results"` selects [`Mode::Results`]. Anything
    /// else, including casing variants, typos, `null` and absence, is intake.
    pub fn from_declared(declared: Option<&Value>) -> Self {
        match declared {
            Some(Value::String(s)) if s == "results" => Mode::Results,
            _ => Mode::Intake,
        }
    }
}
