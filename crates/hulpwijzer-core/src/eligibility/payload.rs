//! Validated backend payload.
//!
//! The backend sends loosely shaped JSON. It is parsed exactly once, here,
//! into a record where every field already carries its default, so nothing
//! downstream has to second-guess the shape.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::eligibility::{Mode, Profile, Scheme, Source};

/// A backend response after boundary validation.
///
/// Rules applied by [`BackendPayload::from_value`]:
/// - a non-object payload yields the default record;
/// - a key holding the wrong JSON type counts as absent;
/// - non-string entries of `required_fields` / `missing_fields` are dropped;
/// - non-object entries of `sources` are dropped;
/// - non-object entries of `schemes` become empty schemes, keeping the count.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BackendPayload {
    pub profile: Profile,
    pub schemes: Vec<Scheme>,
    pub required_fields: Vec<String>,
    pub missing_fields: Vec<String>,
    pub sources: Vec<Source>,
    pub mode: Mode,
    /// Assistant text for the chat turn that produced this payload.
    pub reply: Option<String>,
    /// Whether the backend considers intake finished.
    pub complete: Option<bool>,
}

impl BackendPayload {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            profile: obj
                .get("profile")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
            schemes: array(obj, "schemes")
                .map(|item| item.as_object().cloned().unwrap_or_default())
                .collect(),
            required_fields: strings(obj, "required_fields"),
            missing_fields: strings(obj, "missing_fields"),
            sources: array(obj, "sources")
                .filter_map(|item| item.as_object().cloned())
                .collect(),
            mode: Mode::from_declared(obj.get("mode")),
            reply: obj.get("reply").and_then(Value::as_str).map(str::to_string),
            complete: obj.get("complete").and_then(Value::as_bool),
        }
    }

    /// Parses raw JSON text. Text that is not JSON degrades to the default.
    pub fn from_json_str(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::debug!(error = %e, "Backend payload is not JSON, using empty payload");
                Self::default()
            }
        }
    }
}

impl From<&Value> for BackendPayload {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

fn array<'a>(obj: &'a Map<String, Value>, key: &str) -> impl Iterator<Item = &'a Value> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter())
        .into_iter()
        .flatten()
}

fn strings(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    array(obj, key)
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect()
}
