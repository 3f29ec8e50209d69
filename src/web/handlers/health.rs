//! # Health Check Handlers
//!
//! Kubernetes-compatible health check endpoints. The service has no
//! downstream dependencies, so liveness and readiness only prove the process
//! answers. The detailed probe reports whether the browser will receive usable
//! credentials, without exposing them.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

use crate::web::response_types::{BasicHealthResponse, DetailedHealthResponse};
use crate::web::state::ClientEnvWebState;

/// Basic health check endpoint: GET /health
pub async fn health_check(State(_state): State<Arc<ClientEnvWebState>>) -> Json<BasicHealthResponse> {
    Json(BasicHealthResponse::now("ok"))
}

/// Kubernetes liveness probe: GET /health/live
pub async fn liveness_check(
    State(_state): State<Arc<ClientEnvWebState>>,
) -> Json<BasicHealthResponse> {
    Json(BasicHealthResponse::now("alive"))
}

/// Kubernetes readiness probe: GET /health/ready
pub async fn readiness_check(
    State(_state): State<Arc<ClientEnvWebState>>,
) -> Json<BasicHealthResponse> {
    Json(BasicHealthResponse::now("ready"))
}

/// Detailed health status: GET /health/detailed
///
/// Reports `degraded` (still 200) when either credential is missing or a
/// placeholder.
pub async fn detailed_health_check(
    State(state): State<Arc<ClientEnvWebState>>,
) -> Json<DetailedHealthResponse> {
    debug!("Performing detailed health check");

    let credentials = state.client_env_service().credential_status();

    Json(DetailedHealthResponse {
        status: if credentials.is_usable() {
            "healthy"
        } else {
            "degraded"
        }
        .to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment.clone(),
        uptime_seconds: state.uptime().as_secs(),
        credentials,
    })
}
