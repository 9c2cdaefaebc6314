//! API Handlers
//!
//! HTTP request handlers for the result proxy endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::debug;

use crate::cache::{CacheKey, ResultCache};
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::{Envelope, HealthResponse, LookupRequest};
use crate::normalize::{normalize, NormalizedResult};
use crate::render::DocumentView;
use crate::upstream::{parse_lenient, ParsedBody, UpstreamClient};

/// Application state shared across all handlers.
///
/// The cache is the only shared mutable resource. Concurrent lookups for the
/// same key may still race between the read and the fetch and duplicate an
/// upstream call; inserts are last-write-wins on the same key, so that costs
/// duplicate work, not correctness.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe lookup cache
    pub cache: Arc<RwLock<ResultCache>>,
    /// Upstream HTTP client
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Creates a new AppState with the given cache and upstream client.
    pub fn new(cache: ResultCache, upstream: UpstreamClient) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            upstream,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ResultCache::new(config.cache_ttl_secs), UpstreamClient::new(config))
    }
}

// == Lookup Pipeline ==
/// Runs one lookup: validate, cache check, fetch, parse, normalize, store.
///
/// Shared by the JSON endpoint and the rendered views so the cache and
/// upstream policy behave identically everywhere. Returns the envelope plus
/// the typed result the renderer consumes, so views never re-parse the
/// envelope payload; cache hits rehydrate the typed result from the stored
/// payload's own serialized form. Raw fallbacks carry an empty result.
async fn perform_lookup(
    state: &AppState,
    request: &LookupRequest,
) -> Result<(Envelope, NormalizedResult)> {
    if let Some(message) = request.validate() {
        return Err(ProxyError::InvalidInput(message));
    }

    let key = CacheKey::new(request.redg_no(), request.semester(), request.exam_held());

    {
        let mut cache = state.cache.write().await;
        if let Some(entry) = cache.get(&key) {
            debug!(key = %key, age_ms = entry.age_ms(), "Serving lookup from cache");
            let result = NormalizedResult::from_payload(&entry.payload);
            return Ok((Envelope::cached(entry.upstream_status, entry.payload), result));
        }
    }

    let response = state.upstream.fetch(request).await?;

    let (payload, result) = match parse_lenient(&response.body) {
        ParsedBody::Structured(value) => {
            let normalized = normalize(&value);
            let payload = serde_json::to_value(&normalized)
                .map_err(|e| ProxyError::Internal(e.to_string()))?;
            (payload, normalized)
        }
        raw => (raw.into_payload(), NormalizedResult::default()),
    };

    // Raw fallbacks are stored too: a known-bad upstream response should not
    // be re-fetched within the TTL.
    {
        let mut cache = state.cache.write().await;
        cache.insert(&key, payload.clone(), response.status);
    }

    Ok((Envelope::upstream(response.status, payload), result))
}

/// Handler for GET /api/result
///
/// Returns the lookup envelope. Unparseable upstream content is not a
/// client-facing error: the envelope carries `{"raw": ...}` and the request
/// still answers 200.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Query(request): Query<LookupRequest>,
) -> Result<Json<Envelope>> {
    let (envelope, _) = perform_lookup(&state, &request).await?;
    Ok(Json(envelope))
}

/// Handler for GET /result/view
///
/// Renders the lookup as an HTML marksheet.
pub async fn view_handler(
    State(state): State<AppState>,
    Query(request): Query<LookupRequest>,
) -> Result<Html<String>> {
    let (_, result) = perform_lookup(&state, &request).await?;
    let view = DocumentView::build(&result, &request.semester(), &request.resolved_year());
    Ok(Html(view.to_html()))
}

/// Handler for GET /result/print
///
/// Same marksheet with the deferred print trigger appended; opening it in a
/// new window is the "download as PDF" flow.
pub async fn print_handler(
    State(state): State<AppState>,
    Query(request): Query<LookupRequest>,
) -> Result<Html<String>> {
    let (_, result) = perform_lookup(&state, &request).await?;
    let view = DocumentView::build(&result, &request.semester(), &request.resolved_year());
    Ok(Html(view.to_printable_html()))
}

/// Handler for OPTIONS /api/result
///
/// Preflight answer: 204 with no body. The CORS allow headers are attached
/// by the router's response-header layers.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Fallback for unsupported methods on the lookup endpoint.
pub async fn method_not_allowed() -> ProxyError {
    ProxyError::MethodNotAllowed
}

/// Handler for GET /health
///
/// Returns health status plus lookup cache counters.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state.cache.read().await;
    Json(HealthResponse::healthy(cache.stats()))
}
