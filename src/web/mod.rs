//! # Web API
//!
//! Axum application exposing `GET /config/client-env` and the health probes.

use axum::Router;
use std::sync::Arc;
use tracing::info;

pub mod handlers;
pub mod middleware;
pub mod response_types;
pub mod routes;
pub mod state;

pub use state::ClientEnvWebState;

/// Create the web application with all routes and middleware
pub fn create_app(state: Arc<ClientEnvWebState>) -> Router {
    let router = Router::new()
        .merge(routes::client_env_routes())
        .merge(routes::health_routes());

    let app = middleware::apply_middleware_stack(router, &state.config.web).with_state(state);

    info!("Web application created with all routes and middleware");
    app
}
