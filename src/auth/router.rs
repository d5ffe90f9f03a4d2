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

use super::service::{AuthError, AuthService};

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    #[serde(default)]
    pub(crate) username: String,
    #[serde(default)]
    pub(crate) password: String,
}

/// Router builder exposing the login/logout/session endpoints.
pub fn auth_router(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(login_handler))
        .route("/api/v1/auth/logout", post(logout_handler))
        .route("/api/v1/auth/session", get(session_handler))
        .with_state(service)
}

pub(crate) async fn login_handler(
    State(service): State<Arc<AuthService>>,
    axum::Json(request): axum::Json<LoginRequest>,
) -> Response {
    match service.login(&request.username, &request.password) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(AuthError::InvalidCredentials) => {
            let payload = json!({ "error": "invalid username or password" });
            (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn logout_handler(State(service): State<Arc<AuthService>>) -> Response {
    match service.logout() {
        Ok(()) => (StatusCode::OK, axum::Json(json!({ "status": "signed_out" }))).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn session_handler(State(service): State<Arc<AuthService>>) -> Response {
    match service.current_user() {
        Some(record) => (StatusCode::OK, axum::Json(json!({ "session": record }))).into_response(),
        None => {
            let payload = json!({ "session": serde_json::Value::Null });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
    }
}
