//! Upstream Client Module
//!
//! One-shot HTTP client for the university result endpoint.

use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::models::LookupRequest;

/// What the upstream answered with, verbatim.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// Upstream HTTP status code
    pub status: u16,
    /// Upstream body as text (JSON, HTML, or anything in between)
    pub body: String,
}

// == Upstream Client ==
/// HTTP client for fetching results from the upstream service.
///
/// Issues exactly one GET per lookup: no retry, no backoff. The only bound
/// is the request timeout configured at construction.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    user_agent: String,
    referer: Option<String>,
    cookie: Option<String>,
}

impl UpstreamClient {
    /// Creates a new upstream client from configuration.
    ///
    /// # Panics
    /// Panics if the underlying HTTP client cannot be constructed. Falling
    /// back to a default client would silently drop the fetch timeout, so a
    /// broken TLS/runtime setup fails at startup instead.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .expect("Failed to build upstream HTTP client");

        Self {
            client,
            base_url: config.upstream_base.clone(),
            user_agent: config.user_agent.clone(),
            referer: config.referer.clone(),
            cookie: config.cookie.clone(),
        }
    }

    /// Builds the upstream query URL for a lookup.
    pub fn build_url(&self, request: &LookupRequest) -> String {
        format!(
            "{}?year={}&redg_no={}&semester={}&exam_held={}",
            self.base_url,
            urlencoding::encode(&request.resolved_year()),
            urlencoding::encode(request.redg_no()),
            urlencoding::encode(&request.semester()),
            urlencoding::encode(&request.exam_held())
        )
    }

    /// Fetches a result from the upstream.
    ///
    /// A non-2xx upstream status is not an error here; the status and body
    /// are passed through for the caller to wrap. Network failures and
    /// timeouts surface as `ProxyError::Upstream`.
    pub async fn fetch(&self, request: &LookupRequest) -> Result<UpstreamResponse> {
        let url = self.build_url(request);
        debug!(url = %url, "Fetching result from upstream");

        let mut req = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json, text/plain, */*");

        if let Some(referer) = &self.referer {
            req = req.header("Referer", referer);
        }
        if let Some(cookie) = &self.cookie {
            req = req.header("Cookie", cookie);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "Upstream responded");

        Ok(UpstreamResponse { status, body })
    }
}
