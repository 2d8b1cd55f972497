//! API routes for synresd

use crate::engine;
use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use synres_shared::{
    Audience, HealthStatus, Persona, ServiceInfo, StudyRequest, StudyResult, SynresError,
    HEALTH_PATH, PERSONAS_GENERATE_PATH, STUDY_RUN_PATH,
};
use tracing::error;

type AppStateArc = Arc<AppState>;

/// Error response with a `{"detail": ...}` body. Backend failures are 500,
/// rejected request bodies keep axum's status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<SynresError> for ApiError {
    fn from(err: SynresError) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("  Request failed ({}): {}", self.status, self.detail);
        (
            self.status,
            Json(serde_json::json!({ "detail": self.detail })),
        )
            .into_response()
    }
}

// ============================================================================
// Status Routes
// ============================================================================

pub fn status_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(root))
        .route(HEALTH_PATH, get(health_check))
}

async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::running())
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthStatus> {
    Json(HealthStatus::from_ollama(state.llm.is_available().await))
}

// ============================================================================
// Study Routes
// ============================================================================

pub fn api_routes() -> Router<AppStateArc> {
    Router::new()
        .route(PERSONAS_GENERATE_PATH, post(generate_personas))
        .route(STUDY_RUN_PATH, post(run_study))
}

async fn generate_personas(
    State(state): State<AppStateArc>,
    payload: Result<Json<Audience>, JsonRejection>,
) -> Result<Json<Vec<Persona>>, ApiError> {
    let Json(audience) = payload?;
    let personas =
        engine::generate_personas(state.llm.as_ref(), &state.config.ollama, &audience).await?;
    Ok(Json(personas))
}

async fn run_study(
    State(state): State<AppStateArc>,
    payload: Result<Json<StudyRequest>, JsonRejection>,
) -> Result<Json<StudyResult>, ApiError> {
    let Json(request) = payload?;
    let result = engine::run_study(state.llm.as_ref(), &state.config.ollama, &request).await?;
    Ok(Json(result))
}
