//! # Client Environment Handler
//!
//! Hands the backend URL and key to the browser. Handlers delegate to
//! `ClientEnvService`, which does the environment reads and logging.

use axum::extract::State;
use axum::http::{header, HeaderName, HeaderValue};
use axum::Json;
use std::sync::Arc;

use crate::models::ClientConfig;
use crate::web::state::ClientEnvWebState;

/// Get client configuration: GET /config/client-env
///
/// Always 200. Missing variables come back as empty strings. Query
/// parameters such as the browser's `?_=<timestamp>` cache buster are ignored,
/// and the response is marked uncacheable.
pub async fn get_client_env(
    State(state): State<Arc<ClientEnvWebState>>,
) -> ([(HeaderName, HeaderValue); 1], Json<ClientConfig>) {
    let config = state.client_env_service().client_config();

    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(config),
    )
}
