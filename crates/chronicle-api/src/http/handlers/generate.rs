//! Generation endpoint handler, shared by every category.

use axum::Json;
use axum::extract::State;
use serde_json::{Map, Value};
use tracing::Instrument;

use chronicle_core::category::GenerationCategory;

use crate::http::error::AppError;
use crate::http::extractors::lenient_json::LenientJson;
use crate::state::AppState;

/// POST /generate_{storyline,backstory,lore}
///
/// Validates the body for category `C`, renders its prompt, and returns
/// `{"<result key>": <text>}`. The model is not called when validation
/// fails.
pub async fn generate<C: GenerationCategory>(
    State(state): State<AppState>,
    LenientJson(fields): LenientJson,
) -> Result<Json<Value>, AppError> {
    let request_id = uuid::Uuid::now_v7();
    let category = C::CATEGORY;

    let prompt = C::render(fields).inspect_err(|err| {
        tracing::debug!(%request_id, %category, error = %err, "Rejected generation request");
    })?;

    let span = tracing::info_span!("generate", %request_id, %category);
    let text = state.complete(&prompt).instrument(span).await?;

    Ok(Json(result_body(category.result_key(), text)))
}

/// Single-key JSON object wrapping the generated text.
pub fn result_body(key: &str, text: String) -> Value {
    let mut body = Map::new();
    body.insert(key.to_string(), Value::String(text));
    Value::Object(body)
}
