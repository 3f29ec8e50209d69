//! # Web API Routes
//!
//! Route definitions organized by functionality. Every route is public.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::constants::routes;
use crate::web::{handlers, state::ClientEnvWebState};

/// Browser client configuration
pub fn client_env_routes() -> Router<Arc<ClientEnvWebState>> {
    Router::new().route(routes::CLIENT_ENV, get(handlers::client_env::get_client_env))
}

/// Health check routes for monitoring and Kubernetes probes
pub fn health_routes() -> Router<Arc<ClientEnvWebState>> {
    Router::new()
        .route(routes::HEALTH, get(handlers::health::health_check))
        .route(routes::HEALTH_LIVE, get(handlers::health::liveness_check))
        .route(routes::HEALTH_READY, get(handlers::health::readiness_check))
        .route(
            routes::HEALTH_DETAILED,
            get(handlers::health::detailed_health_check),
        )
}
