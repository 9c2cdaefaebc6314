//! API Routes
//!
//! Configures the Axum router with all result proxy endpoints.

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use super::handlers::{
    health_handler, lookup_handler, method_not_allowed, preflight_handler, print_handler,
    view_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/result` - Lookup envelope (cache or upstream)
/// - `OPTIONS /api/result` - CORS preflight, 204 with no body
/// - `GET /result/view` - Rendered HTML marksheet
/// - `GET /result/print` - Marksheet with auto-print trigger
/// - `GET /health` - Health check with cache counters
///
/// Any other method on the lookup endpoint answers 405 with an
/// `Allow: GET, OPTIONS` header and a JSON error body.
///
/// # Middleware
/// - CORS: the three allow headers (any origin, GET/OPTIONS, Content-Type)
///   are set on every response. A full CORS service would intercept OPTIONS
///   itself and answer 200, hiding the explicit 204 preflight route, so the
///   headers are attached with plain response-header layers instead.
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Build router with all endpoints
    Router::new()
        .route(
            "/api/result",
            get(lookup_handler)
                .options(preflight_handler)
                .fallback(method_not_allowed),
        )
        .route("/result/view", get(view_handler))
        .route("/result/print", get(print_handler))
        .route("/health", get(health_handler))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
