//! Integration specifications for the Stoqy assistant endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use livestoq::assistant::{assistant_router, AssistantService, AssistantState, GREETING};
use livestoq::auth::{AuthService, InMemorySessionStorage};

fn router(signed_in: bool) -> Router {
    let auth = Arc::new(AuthService::new(Arc::new(InMemorySessionStorage::default())));
    if signed_in {
        auth.login("Testing", "Testing").expect("demo login");
    }
    assistant_router(AssistantState {
        service: Arc::new(AssistantService::new(Duration::ZERO)),
        auth,
    })
}

fn message_request(text: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/assistant/messages")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({ "text": text })).expect("serializes"),
        ))
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn chat_requires_a_session() {
    let app = router(false);
    for request in [
        message_request("hello"),
        Request::builder()
            .uri("/api/v1/assistant/transcript")
            .body(Body::empty())
            .expect("request builds"),
    ] {
        let response = app.clone().oneshot(request).await.expect("routes");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn transcript_opens_with_the_greeting_and_grows_with_chat() {
    let app = router(true);

    let transcript = body_json(
        app.clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/assistant/transcript")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("routes"),
    )
    .await;
    let messages = transcript.as_array().expect("array of messages");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["sender"], "stoqy");
    assert_eq!(messages[0]["text"], GREETING);

    let reply = body_json(
        app.clone()
            .oneshot(message_request("How do I care for a sick cow?"))
            .await
            .expect("routes"),
    )
    .await;
    assert_eq!(reply["sender"], "stoqy");

    let transcript = body_json(
        app.oneshot(
            Request::builder()
                .uri("/api/v1/assistant/transcript")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("routes"),
    )
    .await;
    assert_eq!(transcript.as_array().expect("array").len(), 3);
}

#[tokio::test]
async fn blank_messages_are_unprocessable() {
    let app = router(true);
    let response = app.oneshot(message_request("   ")).await.expect("routes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn five_questions_are_suggested() {
    let app = router(true);
    let body = body_json(
        app.oneshot(
            Request::builder()
                .uri("/api/v1/assistant/questions")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("routes"),
    )
    .await;
    assert_eq!(body["questions"].as_array().expect("array").len(), 5);
}
