use crate::infra::AppState;
use appraisal::workflows::appraisal::{appraisal_router, AppraisalService, HistoryRepository};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_appraisal_routes<H>(service: Arc<AppraisalService<H>>) -> axum::Router
where
    H: HistoryRepository + 'static,
{
    appraisal_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/appraisals/report/:kind",
            axum::routing::get(report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Serves the populated report documents written by the last appraisal run.
pub(crate) async fn report_endpoint(
    Extension(state): Extension<AppState>,
    Path(kind): Path<String>,
) -> impl IntoResponse {
    let path = match kind.as_str() {
        "primary" => &state.documents.primary_output,
        "corrective" => &state.documents.corrective_output,
        _ => {
            let payload = json!({ "error": "invalid report kind" });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match std::fs::read(path) {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(_) => {
            let payload = json!({ "error": "report not generated yet" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
