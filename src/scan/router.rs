use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::store::{AssessmentRepository, RepositoryError};

use super::domain::{AngleImages, AssessmentId};
use super::service::{ScanService, ScanServiceError};

#[derive(Debug, Deserialize)]
pub(crate) struct ScanRequest {
    pub(crate) images: AngleImages,
}

/// Router builder exposing the scan capture and results endpoints.
pub fn scan_router<R>(service: Arc<ScanService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/scans", post(analyze_handler::<R>))
        .route("/api/v1/scans/latest", get(latest_handler::<R>))
        .route("/api/v1/scans/:scan_id", get(results_handler::<R>))
        .with_state(service)
}

pub(crate) async fn analyze_handler<R>(
    State(service): State<Arc<ScanService<R>>>,
    axum::Json(request): axum::Json<ScanRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let delay = service.analysis_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match service.analyze(request.images) {
        Ok(assessment) => (StatusCode::CREATED, axum::Json(assessment)).into_response(),
        Err(ScanServiceError::IncompleteCapture { missing }) => {
            let labels: Vec<&str> = missing.iter().map(|angle| angle.label()).collect();
            let payload = json!({
                "error": "capture all 5 angles before analyzing",
                "missing_angles": labels,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn latest_handler<R>(State(service): State<Arc<ScanService<R>>>) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.latest() {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment)).into_response(),
        Err(ScanServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "no scans yet" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn results_handler<R>(
    State(service): State<Arc<ScanService<R>>>,
    Path(scan_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = AssessmentId(scan_id);
    match service.get_or_latest(&id) {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment)).into_response(),
        Err(ScanServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "no scans yet" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
