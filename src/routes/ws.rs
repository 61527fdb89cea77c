//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::checker::{check, hint_text};
use crate::domain::Difficulty;
use crate::protocol::{to_summary, ClientWsMessage, ServerWsMessage};
use crate::resolver::ResolveRequest;
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    info!(target: "codetutor_backend", "WebSocket upgrade requested");
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    info!(target: "codetutor_backend", "WebSocket connected");
    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(txt) => {
                // Parse, dispatch, serialize response.
                let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
                    Ok(incoming) => {
                        debug!(target: "codetutor_backend", "WS received: {:?}", &incoming);
                        handle_client_ws(incoming, &state)
                    }
                    Err(e) => {
                        error!(target: "codetutor_backend", error = %e, payload = %trunc_for_log(&txt, 120), "WS invalid JSON");
                        ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) }
                    }
                };

                let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
                    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
                });

                if let Err(e) = socket.send(Message::Text(out)).await {
                    error!(target: "codetutor_backend", error = %e, "WS send error");
                    break;
                }
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
    info!(target: "codetutor_backend", "WebSocket disconnected");
}

fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
    match msg {
        ClientWsMessage::Ping => ServerWsMessage::Pong,

        ClientWsMessage::ListTutorials { difficulty } => {
            let filter = difficulty.as_deref().and_then(Difficulty::parse);
            let tutorials = state
                .catalog
                .tutorials(filter)
                .into_iter()
                .map(to_summary)
                .collect();
            ServerWsMessage::TutorialList { tutorials }
        }

        ClientWsMessage::Tutorial { project_id } => {
            let req = ResolveRequest::CatalogId { id: project_id };
            match state.resolver.resolve(&req) {
                Ok(t) => {
                    tracing::info!(target: "tutorial", id = %t.id, "WS tutorial served");
                    ServerWsMessage::Tutorial { tutorial: t }
                }
                Err(e) => ServerWsMessage::Error { message: e.to_string() },
            }
        }

        ClientWsMessage::GenerateTutorial { prompt } => {
            let req = ResolveRequest::FreeText { text: prompt };
            match state.resolver.resolve(&req) {
                Ok(t) => {
                    tracing::info!(target: "tutorial", id = %t.id, title = %t.title, "WS tutorial generated");
                    ServerWsMessage::Tutorial { tutorial: t }
                }
                Err(e) => ServerWsMessage::Error { message: e.to_string() },
            }
        }

        ClientWsMessage::CheckSolution { code, chunk } => {
            let result = check(&code, &chunk);
            tracing::info!(target: "tutorial", chunk_id = %chunk.id, correct = result.is_correct, graded = result.graded, "WS check evaluated");
            ServerWsMessage::CheckResult { result }
        }

        ClientWsMessage::Hint { chunk, hint_index } => {
            let text = hint_text(&chunk, hint_index);
            tracing::info!(target: "tutorial", chunk_id = %chunk.id, "WS hint served");
            ServerWsMessage::Hint { text }
        }
    }
}
