//! Response DTOs for the result proxy API
//!
//! Defines the envelope every lookup answer is wrapped in, plus the error
//! and health bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Where the lookup data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Cache,
    Upstream,
}

/// Uniform wrapper returned for every successful lookup (GET /api/result)
///
/// `data` is either a normalized result object or `{"raw": <text>}` when the
/// upstream body could not be parsed; callers distinguish the two by checking
/// for the `raw` key. `status` is the HTTP status the upstream answered with
/// (echoed from the cached fetch when served from cache).
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    /// Data origin: cache hit or a fresh upstream fetch
    pub source: Source,
    /// Upstream HTTP status
    pub status: u16,
    /// Normalized result or raw fallback
    pub data: Value,
}

impl Envelope {
    /// Creates an envelope for a cache hit.
    pub fn cached(status: u16, data: Value) -> Self {
        Self {
            source: Source::Cache,
            status,
            data,
        }
    }

    /// Creates an envelope for a fresh upstream fetch.
    pub fn upstream(status: u16, data: Value) -> Self {
        Self {
            source: Source::Upstream,
            status,
            data,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Lookup cache counters
    pub cache: CacheStats,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy(cache: CacheStats) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cache,
        }
    }
}
