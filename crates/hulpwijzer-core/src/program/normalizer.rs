//! Scheme to program normalization.
//!
//! Backend records come in two dialects: the assistant's own
//! (`title`, `confidence`, `application_time_minutes`, ...) and the raw
//! eligibility engine's (`name`, `type`, `money`, `time`). Each program field
//! reads a list of keys in order and takes the first usable value.

use serde_json::Value;

use crate::eligibility::Scheme;
use crate::program::{Confidence, Program};

const TITLE_KEYS: &[&str] = &["title", "name"];
const DESCRIPTION_KEYS: &[&str] = &["description", "summary"];
const CATEGORY_KEYS: &[&str] = &["category", "type"];
const APPLICATION_TIME_KEYS: &[&str] = &[
    "application_time_minutes",
    "applicationTime",
    "time_to_apply_min",
    "time",
];
const PROCESSING_TIME_KEYS: &[&str] = &["processing_time_weeks", "processingTime"];
const MONTHLY_AMOUNT_KEYS: &[&str] = &["money", "money_eur_per_month"];

/// Maps schemes to programs, one to one and in order.
///
/// Pure and deterministic: equal input gives equal output. A scheme with no
/// usable fields still yields a program so the count shown to the user
/// matches what the backend returned.
pub fn normalize(schemes: &[Scheme]) -> Vec<Program> {
    schemes
        .iter()
        .enumerate()
        .map(|(index, scheme)| normalize_scheme(index, scheme))
        .collect()
}

/// Normalizes a single scheme at `index` in its list.
///
/// The index only feeds the fallback id used when the scheme has none.
pub fn normalize_scheme(index: usize, scheme: &Scheme) -> Program {
    Program {
        id: scheme_id(scheme).unwrap_or_else(|| format!("scheme-{index}")),
        title: text(scheme, TITLE_KEYS),
        description: text(scheme, DESCRIPTION_KEYS),
        category: text(scheme, CATEGORY_KEYS),
        confidence: Confidence::from_signal(scheme.get("confidence")),
        application_time_minutes: non_negative(scheme, APPLICATION_TIME_KEYS),
        processing_time_weeks: non_negative(scheme, PROCESSING_TIME_KEYS),
        monthly_amount_eur: non_negative(scheme, MONTHLY_AMOUNT_KEYS),
    }
}

fn scheme_id(scheme: &Scheme) -> Option<String> {
    match scheme.get("id")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text(scheme: &Scheme, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| scheme.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

fn non_negative(scheme: &Scheme, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| {
        scheme
            .get(*key)
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite() && *n >= 0.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scheme(value: Value) -> Scheme {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_assistant_dialect() {
        let program = normalize_scheme(
            0,
            &scheme(json!({
                "id": "zorgtoeslag",
                "title": "Healthcare Allowance",
                "description": "Help paying your health insurance premium",
                "category": "national",
                "confidence": "medium",
                "application_time_minutes": 20,
                "processing_time_weeks": 6
            })),
        );

        assert_eq!(program.id, "zorgtoeslag");
        assert_eq!(program.title, "Healthcare Allowance");
        assert_eq!(program.category, "national");
        assert_eq!(program.confidence, Confidence::Medium);
        assert_eq!(program.application_time_minutes, Some(20.0));
        assert_eq!(program.processing_time_weeks, Some(6.0));
        assert_eq!(program.monthly_amount_eur, None);
    }

    #[test]
    fn test_eligibility_engine_dialect() {
        let program = normalize_scheme(
            0,
            &scheme(json!({
                "id": 12,
                "name": "Individual Income Supplement",
                "type": "municipal",
                "money": 37.5,
                "time": 45
            })),
        );

        assert_eq!(program.id, "12");
        assert_eq!(program.title, "Individual Income Supplement");
        assert_eq!(program.category, "municipal");
        assert_eq!(program.confidence, Confidence::Low);
        assert_eq!(program.application_time_minutes, Some(45.0));
        assert_eq!(program.monthly_amount_eur, Some(37.5));
    }

    #[test]
    fn test_empty_scheme_gets_defaults() {
        let program = normalize_scheme(3, &Scheme::new());

        assert_eq!(program.id, "scheme-3");
        assert_eq!(program.title, "");
        assert_eq!(program.description, "");
        assert_eq!(program.category, "");
        assert_eq!(program.confidence, Confidence::Low);
        assert!(program.application_time_minutes.is_none());
        assert!(program.processing_time_weeks.is_none());
    }

    #[test]
    fn test_invalid_estimates_are_omitted() {
        let program = normalize_scheme(
            0,
            &scheme(json!({
                "application_time_minutes": -5,
                "processing_time_weeks": "six",
                "money": null
            })),
        );

        assert!(program.application_time_minutes.is_none());
        assert!(program.processing_time_weeks.is_none());
        assert!(program.monthly_amount_eur.is_none());
    }

    #[test]
    fn test_zero_is_a_known_estimate() {
        let program = normalize_scheme(0, &scheme(json!({"processingTime": 0})));
        assert_eq!(program.processing_time_weeks, Some(0.0));
    }

    #[test]
    fn test_wrong_typed_text_falls_through() {
        let program = normalize_scheme(0, &scheme(json!({"title": 5, "name": "Fallback"})));
        assert_eq!(program.title, "Fallback");
    }

    #[test]
    fn test_order_and_count_preserved() {
        let schemes = vec![
            scheme(json!({"id": "b", "title": "Second"})),
            Scheme::new(),
            scheme(json!({"id": "a", "title": "First"})),
        ];

        let programs = normalize(&schemes);

        let ids: Vec<&str> = programs.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "scheme-1", "a"]);
    }

    #[test]
    fn test_deterministic() {
        let schemes = vec![
            scheme(json!({"id": "a", "title": "Housing Allowance", "confidence": "high"})),
            scheme(json!({"name": "Energy Allowance", "time": 30})),
        ];

        assert_eq!(normalize(&schemes), normalize(&schemes));
    }

    #[test]
    fn test_serialized_shape_omits_unknown_estimates() {
        let program = normalize_scheme(0, &scheme(json!({"id": "a", "confidence": "high"})));
        let json = serde_json::to_value(&program).unwrap();

        assert_eq!(json["confidence"], json!("high"));
        assert!(json.get("applicationTimeMinutes").is_none());
        assert!(json.get("processingTimeWeeks").is_none());
    }
}
