//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Default upstream result endpoint (discovered from the BEU portal traffic).
pub const DEFAULT_UPSTREAM_BASE: &str = "https://beu-bih.ac.in/backend/v1/result/get-result";

/// User-agent sent on every upstream request.
pub const DEFAULT_USER_AGENT: &str = "Result-Viewer/1.0";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream result endpoint
    pub upstream_base: String,
    /// User-agent header value for upstream requests
    pub user_agent: String,
    /// Cache TTL in seconds for stored lookups
    pub cache_ttl_secs: u64,
    /// Upstream fetch timeout in seconds
    pub fetch_timeout_secs: u64,
    /// Optional Referer header for upstream requests
    pub referer: Option<String>,
    /// Optional Cookie header for upstream requests
    pub cookie: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_BASE` - Upstream result endpoint URL
    /// - `UPSTREAM_USER_AGENT` - User-agent for upstream requests
    /// - `CACHE_TTL_SECS` - Lookup cache TTL in seconds (default: 300)
    /// - `FETCH_TIMEOUT_SECS` - Upstream fetch timeout in seconds (default: 10)
    /// - `UPSTREAM_REFERER` / `UPSTREAM_COOKIE` - optional headers, unset by
    ///   default; the upstream's access policy is unconfirmed so both are
    ///   configuration rather than code
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            upstream_base: env::var("UPSTREAM_BASE")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_string()),
            user_agent: env::var("UPSTREAM_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            referer: env::var("UPSTREAM_REFERER").ok(),
            cookie: env::var("UPSTREAM_COOKIE").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            upstream_base: DEFAULT_UPSTREAM_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_ttl_secs: 300,
            fetch_timeout_secs: 10,
            referer: None,
            cookie: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_base, DEFAULT_UPSTREAM_BASE);
        assert_eq!(config.user_agent, "Result-Viewer/1.0");
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.fetch_timeout_secs, 10);
        assert!(config.referer.is_none());
        assert!(config.cookie.is_none());
    }
}
