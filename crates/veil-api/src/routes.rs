use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, warn};
use veil_analyze::Analyzer;
use veil_core::{
    AnalysisReport, AnalysisRequest, PoisonReport, PoisonRequest, StatusCheck, StatusCheckCreate,
};
use veil_db::VeilDb;

pub struct ApiState {
    pub db: VeilDb,
    pub analyzer: Analyzer,
}

/// Full application router: JSON API under the `/api` prefix, permissive
/// CORS for browser clients.
pub fn api_router(state: Arc<ApiState>) -> Router {
    let api = Router::new()
        .route("/", get(root_handler))
        .route("/analyze", post(analyze_handler))
        .route("/poison", post(poison_handler))
        .route(
            "/status",
            get(list_status_handler).post(create_status_handler),
        )
        .with_state(state);

    Router::new()
        .route("/api/", get(root_handler))
        .nest("/api", api)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Veil - privacy audit and tracker poisoning service"
    }))
}

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

fn internal_error(detail: &str) -> ErrorResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "detail": detail })),
    )
}

async fn analyze_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisReport>, ErrorResponse> {
    // Request logged before the result so the audit trail is ordered even
    // when a crash leaves it partial.
    if let Err(e) = state
        .db
        .insert_analysis_request(&request.url, &request.options)
    {
        warn!(error = %e, "failed to persist analysis request");
    }

    let report = state
        .analyzer
        .analyze(&request.url, &request.options)
        .await
        .map_err(|e| {
            error!(url = %request.url, error = %e, "analysis failed");
            internal_error("Analysis failed")
        })?;

    if let Err(e) = state.db.insert_analysis_result(&report) {
        warn!(error = %e, "failed to persist analysis result");
    }

    Ok(Json(report))
}

async fn poison_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<PoisonRequest>,
) -> Json<PoisonReport> {
    let report = veil_poison::poison(&request);

    if let Err(e) = state.db.insert_poison_action(&request, &report) {
        warn!(error = %e, "failed to persist poison action");
    }

    Json(report)
}

async fn create_status_handler(
    State(state): State<Arc<ApiState>>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ErrorResponse> {
    let check = StatusCheck::new(input.client_name);
    state.db.insert_status_check(&check).map_err(|e| {
        error!(error = %e, "failed to persist status check");
        internal_error("Status check failed")
    })?;
    Ok(Json(check))
}

async fn list_status_handler(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<StatusCheck>>, ErrorResponse> {
    let checks = state.db.get_status_checks(1000).map_err(|e| {
        error!(error = %e, "failed to list status checks");
        internal_error("Status check failed")
    })?;
    Ok(Json(checks))
}
