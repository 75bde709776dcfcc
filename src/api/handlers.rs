//! HTTP request handlers

use super::types::ErrorResponse;
use super::AppState;
use crate::trivia::QuestionSource;
use crate::turn::{InboundTurn, OutboundTurn};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router<Q: QuestionSource + 'static>(state: AppState<Q>) -> Router {
    Router::new()
        .route("/turn", post(handle_turn::<Q>))
        .route("/version", get(get_version))
        .with_state(state)
}

async fn handle_turn<Q: QuestionSource + 'static>(
    State(state): State<AppState<Q>>,
    payload: Result<Json<InboundTurn>, JsonRejection>,
) -> Result<Json<OutboundTurn>, AppError> {
    let Json(turn) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(state.runtime.handle_turn(turn).await))
}

async fn get_version() -> &'static str {
    concat!("trivia-quiz ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        tracing::warn!(%status, error = %message, "Rejected request");
        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{speech, PreserveOrder};
    use crate::runtime::testing::MockQuestionSource;
    use crate::runtime::QuizRuntime;
    use crate::state_machine::QuizContext;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let runtime = QuizRuntime::new(
            Arc::new(MockQuestionSource::new()),
            QuizContext::new(Arc::new(PreserveOrder), 6),
        );
        create_router(AppState::new(runtime))
    }

    async fn post_json(body: String) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/turn")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_launch_turn_over_http() {
        let (status, body) = post_json(json!({ "request": { "type": "launch" } }).to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["promptText"], speech::WELCOME);
        assert_eq!(body["endSession"], false);
        assert_eq!(body["session"]["startOffered"], true);
    }

    #[tokio::test]
    async fn test_fetch_failure_over_http_is_still_ok() {
        // Nothing queued on the mock: the fetch fails
        let (status, body) = post_json(
            json!({
                "request": { "type": "intent", "name": "AMAZON.YesIntent" },
                "session": { "startOffered": true }
            })
            .to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["promptText"], speech::APOLOGY);
        assert_eq!(body["session"]["isPlaying"], false);
    }

    #[tokio::test]
    async fn test_bad_body_is_rejected() {
        let (status, body) = post_json("{\"request\": 42}".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_version() {
        let response = app()
            .oneshot(Request::builder().uri("/version").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"trivia-quiz "));
    }
}
