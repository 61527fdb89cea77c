//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws`
/// - REST-ish API under `/api/v1/...`
/// - Static SPA from `./static` with index fallback
/// - CORS (allow any origin/method/headers) – adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    // Static files with SPA fallback
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/tutorials", get(http::http_list_tutorials))
        .route("/api/v1/tutorial", get(http::http_get_tutorial))
        .route("/api/v1/generate", post(http::http_post_generate))
        .route("/api/v1/check", post(http::http_post_check))
        .route("/api/v1/hint", post(http::http_post_hint))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use super::*;
    use crate::protocol::{ErrorOut, TutorialSummary};
    use crate::domain::{Tutorial, ValidationResult};

    fn test_router() -> Router {
        build_router(Arc::new(AppState::from_config(None)))
    }

    async fn body_json<T: serde::de::DeserializeOwned>(res: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = test_router()
            .oneshot(Request::builder().uri("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn listing_returns_all_builtins_and_filters() {
        let res = test_router()
            .oneshot(Request::builder().uri("/api/v1/tutorials").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let all: Vec<TutorialSummary> = body_json(res).await;
        assert_eq!(all.len(), 4);

        let res = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/tutorials?difficulty=beginner")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let beginner: Vec<TutorialSummary> = body_json(res).await;
        assert_eq!(beginner.len(), 1);
        assert_eq!(beginner[0].id, "todo-app");
    }

    #[tokio::test]
    async fn tutorial_by_id_and_404_on_miss() {
        let res = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/tutorial?projectId=todo-app")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let t: Tutorial = body_json(res).await;
        assert_eq!(t.steps.len(), 3);

        let res = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/tutorial?projectId=does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let err: ErrorOut = body_json(res).await;
        assert!(err.error.contains("does-not-exist"));
    }

    #[tokio::test]
    async fn generate_always_succeeds() {
        let res = test_router()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/generate",
                serde_json::json!({ "prompt": "todo and weather app" }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let t: Tutorial = body_json(res).await;
        assert_eq!(t.title, "Building a Todo Application");
        assert!(t.id.starts_with("custom-"));
    }

    #[tokio::test]
    async fn check_round_trip_over_http() {
        let chunk = crate::catalog::todo_component_chunk();
        let res = test_router()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/check",
                serde_json::json!({ "code": "checkbox todo.text", "chunk": chunk }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let v: ValidationResult = body_json(res).await;
        assert!(!v.is_correct);
        assert!(v
            .explanation
            .as_deref()
            .unwrap()
            .starts_with("Your code is missing: todo.completed, onDelete, onToggle"));
    }

    #[tokio::test]
    async fn hint_round_trip_over_http() {
        let chunk = crate::catalog::todo_component_chunk();
        let res = test_router()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/hint",
                serde_json::json!({ "chunk": chunk, "hintIndex": 0 }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let hint: serde_json::Value = body_json(res).await;
        assert!(hint["text"].as_str().unwrap().contains("checkbox"));
    }
}
