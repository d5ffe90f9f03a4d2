use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::AuthService;

use super::service::{AssistantError, AssistantService};

/// Shared state for the assistant endpoints; chatting requires a session.
#[derive(Clone)]
pub struct AssistantState {
    pub service: Arc<AssistantService>,
    pub auth: Arc<AuthService>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageRequest {
    #[serde(default)]
    pub(crate) text: String,
}

/// Router builder exposing the Stoqy chat endpoints.
pub fn assistant_router(state: AssistantState) -> Router {
    Router::new()
        .route("/api/v1/assistant/transcript", get(transcript_handler))
        .route("/api/v1/assistant/questions", get(questions_handler))
        .route("/api/v1/assistant/messages", post(message_handler))
        .with_state(state)
}

pub(crate) async fn transcript_handler(State(state): State<AssistantState>) -> Response {
    if !state.auth.is_authenticated() {
        return unauthorized();
    }
    (StatusCode::OK, axum::Json(state.service.transcript())).into_response()
}

pub(crate) async fn questions_handler(State(state): State<AssistantState>) -> Response {
    if !state.auth.is_authenticated() {
        return unauthorized();
    }
    let payload = json!({ "questions": state.service.suggested_questions() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn message_handler(
    State(state): State<AssistantState>,
    axum::Json(request): axum::Json<MessageRequest>,
) -> Response {
    if !state.auth.is_authenticated() {
        return unauthorized();
    }

    match state.service.send(&request.text).await {
        Ok(reply) => (StatusCode::OK, axum::Json(reply)).into_response(),
        Err(AssistantError::EmptyMessage) => {
            let payload = json!({ "error": "message must not be empty" });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

fn unauthorized() -> Response {
    let payload = json!({ "error": "authentication required" });
    (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response()
}
