//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs include parameters and basic result info.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, info, instrument};

use crate::checker::{check, hint_text};
use crate::domain::Difficulty;
use crate::protocol::*;
use crate::resolver::ResolveRequest;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
    Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state), fields(difficulty = ?q.difficulty))]
pub async fn http_list_tutorials(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListQuery>,
) -> impl IntoResponse {
    let filter = match q.difficulty.as_deref() {
        Some(raw) => {
            let parsed = Difficulty::parse(raw);
            if parsed.is_none() {
                debug!(target: "tutorial", %raw, "Unknown difficulty filter; listing everything");
            }
            parsed
        }
        None => None,
    };

    let summaries: Vec<TutorialSummary> = state
        .catalog
        .tutorials(filter)
        .into_iter()
        .map(to_summary)
        .collect();
    info!(target: "tutorial", count = summaries.len(), "HTTP tutorial listing served");
    Json(summaries)
}

#[instrument(level = "info", skip(state), fields(%q.project_id))]
pub async fn http_get_tutorial(
    State(state): State<Arc<AppState>>,
    Query(q): Query<TutorialQuery>,
) -> impl IntoResponse {
    let req = ResolveRequest::CatalogId { id: q.project_id };
    match state.resolver.resolve(&req) {
        Ok(t) => {
            info!(target: "tutorial", id = %t.id, steps = t.steps.len(), "HTTP tutorial served");
            Json(t).into_response()
        }
        Err(e) => (StatusCode::NOT_FOUND, Json(ErrorOut { error: e.to_string() })).into_response(),
    }
}

#[instrument(level = "info", skip(state, body), fields(prompt_len = body.prompt.len()))]
pub async fn http_post_generate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateIn>,
) -> impl IntoResponse {
    let t = state.resolver.resolve_prompt(&body.prompt);
    info!(target: "tutorial", id = %t.id, title = %t.title, "HTTP tutorial generated");
    Json(t)
}

#[instrument(level = "info", skip(body), fields(chunk_id = %body.chunk.id, code_len = body.code.len()))]
pub async fn http_post_check(Json(body): Json<CheckIn>) -> impl IntoResponse {
    let result = check(&body.code, &body.chunk);
    info!(target: "tutorial", chunk_id = %body.chunk.id, correct = result.is_correct, graded = result.graded, "HTTP check evaluated");
    Json(result)
}

#[instrument(level = "info", skip(body), fields(chunk_id = %body.chunk.id, index = body.hint_index))]
pub async fn http_post_hint(Json(body): Json<HintIn>) -> impl IntoResponse {
    let text = hint_text(&body.chunk, body.hint_index);
    info!(target: "tutorial", chunk_id = %body.chunk.id, "HTTP hint served");
    Json(HintOut { text })
}
