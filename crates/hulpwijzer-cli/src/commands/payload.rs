use std::sync::Arc;

use anyhow::{Context as _, Result};
use hulpwijzer_application::{EligibilityUseCase, IntakeProgress};
use hulpwijzer_core::eligibility::{BackendPayload, EligibilityStore, Scheme};
use serde_json::{Value, json};

use super::{Context, read_input};

/// Runs one backend payload through a fresh session and prints what the
/// results and progress surfaces would render.
pub async fn apply(ctx: &Context, input: &str) -> Result<()> {
    let raw = read_input(input)?;
    let output = apply_raw(ctx, &raw).await;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Text that is not JSON is an empty payload, not an error.
async fn apply_raw(ctx: &Context, raw: &str) -> Value {
    let payload = BackendPayload::from_json_str(raw);

    let store = Arc::new(EligibilityStore::initialize(ctx.identity_store()).await);
    let usecase = EligibilityUseCase::new(store.clone());
    let ticket = usecase.begin_request();
    usecase.complete_parsed(ticket, payload).await;

    let state = store.snapshot().await;
    let progress: IntakeProgress = usecase.progress().await;
    json!({
        "sessionId": state.session_id,
        "mode": state.mode,
        "profileFields": state.profile.len(),
        "requiredFields": state.required_fields,
        "missingFields": state.missing_fields,
        "sources": state.sources.len(),
        "complete": state.complete,
        "messages": state.messages,
        "progress": progress,
        "results": usecase.results_view().await,
    })
}

pub fn normalize(input: &str) -> Result<()> {
    let raw = read_input(input)?;
    let value: Value = serde_json::from_str(&raw).context("Schemes input is not valid JSON")?;
    let schemes: Vec<Scheme> = value
        .as_array()
        .context("Schemes input must be a JSON array")?
        .iter()
        .map(|item| item.as_object().cloned().unwrap_or_default())
        .collect();

    let programs = hulpwijzer_core::program::normalize(&schemes);
    println!("{}", serde_json::to_string_pretty(&programs)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_apply_non_json_prints_empty_intake() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = Context::load(Some(temp_dir.path().to_path_buf())).unwrap();

        let output = apply_raw(&ctx, "not json").await;

        assert_eq!(output["mode"], json!("intake"));
        assert_eq!(output["profileFields"], json!(0));
        assert_eq!(output["messages"], json!([]));
        assert_eq!(output["complete"], json!(false));
        assert_eq!(output["results"]["listState"], json!("empty"));
    }

    #[tokio::test]
    async fn test_apply_results_payload() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = Context::load(Some(temp_dir.path().to_path_buf())).unwrap();
        let raw = r#"{
            "reply": "Two programs fit.",
            "schemes": [{"id": "kot", "name": "Childcare Allowance", "confidence": "high"}],
            "required_fields": ["children"],
            "mode": "results",
            "complete": true
        }"#;

        let output = apply_raw(&ctx, raw).await;

        assert_eq!(output["mode"], json!("results"));
        assert_eq!(output["complete"], json!(true));
        assert_eq!(output["messages"][0]["content"], json!("Two programs fit."));
        assert_eq!(output["results"]["programs"][0]["title"], json!("Childcare Allowance"));
        assert_eq!(output["progress"]["percent"], json!(100));
    }
}
