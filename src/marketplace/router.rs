use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Map, Value};

use crate::auth::AuthService;
use crate::store::{AssessmentRepository, ListingRepository, RepositoryError};

use super::domain::{ListingDraft, ListingFieldError, ListingId};
use super::service::{ListingService, ListingServiceError};

/// Shared state for the marketplace endpoints; creation requires a session.
pub struct MarketplaceState<L, A> {
    pub service: Arc<ListingService<L, A>>,
    pub auth: Arc<AuthService>,
}

impl<L, A> Clone for MarketplaceState<L, A> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            auth: self.auth.clone(),
        }
    }
}

/// Router builder exposing the marketplace list/detail/create endpoints.
pub fn marketplace_router<L, A>(state: MarketplaceState<L, A>) -> Router
where
    L: ListingRepository + 'static,
    A: AssessmentRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/marketplace/listings",
            get(list_handler::<L, A>).post(create_handler::<L, A>),
        )
        .route(
            "/api/v1/marketplace/listings/:listing_id",
            get(detail_handler::<L, A>),
        )
        .with_state(state)
}

pub(crate) async fn list_handler<L, A>(State(state): State<MarketplaceState<L, A>>) -> Response
where
    L: ListingRepository + 'static,
    A: AssessmentRepository + 'static,
{
    match state.service.list() {
        Ok(listings) => (StatusCode::OK, axum::Json(listings)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn detail_handler<L, A>(
    State(state): State<MarketplaceState<L, A>>,
    Path(listing_id): Path<String>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AssessmentRepository + 'static,
{
    let id = ListingId(listing_id);
    match state.service.get(&id) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(ListingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "listing not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn create_handler<L, A>(
    State(state): State<MarketplaceState<L, A>>,
    axum::Json(draft): axum::Json<ListingDraft>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AssessmentRepository + 'static,
{
    if !state.auth.is_authenticated() {
        let payload = json!({ "error": "authentication required" });
        return (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response();
    }

    match state.service.create(draft) {
        Ok(listing) => (StatusCode::CREATED, axum::Json(listing)).into_response(),
        Err(ListingServiceError::Validation(errors)) => {
            let payload = json!({
                "error": "listing form is invalid",
                "fields": field_errors(&errors),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn field_errors(errors: &[ListingFieldError]) -> Value {
    let mut fields = Map::new();
    for error in errors {
        fields.insert(error.field().to_string(), Value::String(error.to_string()));
    }
    Value::Object(fields)
}
