use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::assistant::{assistant_router, AssistantService, AssistantState};
use crate::auth::{auth_router, AuthService, FileSessionStorage, InMemorySessionStorage, SessionStorage};
use crate::cli::ServeArgs;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::marketplace::{marketplace_router, seed_listings, ListingService, MarketplaceState};
use crate::routes::{with_operational_routes, AppState};
use crate::scan::{scan_router, AssessmentGenerator, ScanService};
use crate::store::InMemoryStore;
use crate::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = build_router(&config).layer(Extension(app_state)).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "livestoq marketplace demo ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Assemble the full application router from configuration.
pub(crate) fn build_router(config: &AppConfig) -> Router {
    let generator = AssessmentGenerator::new(config.assessment.mode.into());
    let store = Arc::new(InMemoryStore::with_listings(seed_listings(&generator)));
    let delay = Duration::from_millis(config.assessment.analysis_delay_ms);

    let storage: Arc<dyn SessionStorage> = match &config.session.storage_file {
        Some(path) => Arc::new(FileSessionStorage::new(path.clone())),
        None => Arc::new(InMemorySessionStorage::default()),
    };
    let auth = Arc::new(AuthService::new(storage));

    let scans = Arc::new(ScanService::new(generator, store.clone(), delay));
    let listings = Arc::new(ListingService::new(store.clone(), store));
    let assistant = Arc::new(AssistantService::new(delay));

    let router = scan_router(scans)
        .merge(auth_router(auth.clone()))
        .merge(marketplace_router(MarketplaceState {
            service: listings,
            auth: auth.clone(),
        }))
        .merge(assistant_router(AssistantState {
            service: assistant,
            auth,
        }));

    with_operational_routes(router)
}
