use crate::cli::ServeArgs;
use crate::infra::{AppState, JsonFileHistory};
use crate::routes::with_appraisal_routes;
use crate::assets;
use appraisal::config::AppConfig;
use appraisal::error::AppError;
use appraisal::telemetry;
use appraisal::workflows::appraisal::{AppraisalService, DocumentPaths};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let documents = Arc::new(DocumentPaths::from(&config.documents));
    let static_dir = std::env::var("APP_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("build"));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        documents: documents.clone(),
        static_dir: Arc::new(static_dir),
    };

    let history = Arc::new(JsonFileHistory::new(config.history_path.clone()));
    let service = Arc::new(AppraisalService::new(
        history,
        DocumentPaths::from(&config.documents),
    ));

    let app = with_appraisal_routes(service)
        .fallback(axum::routing::get(assets::serve_static))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "faculty appraisal service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
