//! # Web API Middleware
//!
//! Middleware stack for every route: request ID generation, request tracing,
//! request timeout, and CORS.

pub mod request_id;

use axum::extract::Request;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{WebConfig, WebCorsConfig};
use crate::web::state::ClientEnvWebState;
use request_id::RequestId;

/// Apply the production middleware stack
///
/// Layers are listed innermost first, so the request ID is generated before
/// the tracing span opens and the span can carry it:
/// 1. CORS handling (when enabled)
/// 2. Request timeout
/// 3. Request tracing
/// 4. Request ID generation (outermost)
pub fn apply_middleware_stack(
    router: Router<Arc<ClientEnvWebState>>,
    config: &WebConfig,
) -> Router<Arc<ClientEnvWebState>> {
    let router = match create_cors_layer(&config.cors) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .extensions()
                .get::<RequestId>()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default();
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(middleware::from_fn(request_id::add_request_id))
}

/// Create CORS layer from configuration, or `None` when CORS is disabled
fn create_cors_layer(config: &WebCorsConfig) -> Option<CorsLayer> {
    if !config.enabled {
        return None;
    }

    let origins = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
            .max_age(Duration::from_secs(config.max_age_seconds)),
    )
}
