//! Backend HTTP client.
//!
//! Wraps the two GET endpoints of the SEO backend:
//! - `GET {base}/analyze?url=...` returning a [`SeoAnalysisResult`]
//! - `GET {base}/pagespeed?url=...` returning a [`PageSpeedResult`]
//!
//! Non-2xx answers become [`RequestError::Server`] carrying the body's `detail`
//! message when one is present.

mod error_body;

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::{ANALYZE_PATH, PAGESPEED_PATH};
use crate::error_handling::{categorize_reqwest_error, InitializationError, RequestError};
use crate::models::{PageSpeedResult, SeoAnalysisResult};

pub use error_body::extract_detail;

/// One of the two backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Analyze,
    PageSpeed,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Analyze => ANALYZE_PATH,
            Endpoint::PageSpeed => PAGESPEED_PATH,
        }
    }

    /// Human-readable name of the analysis behind the endpoint.
    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::Analyze => "SEO analysis",
            Endpoint::PageSpeed => "PageSpeed analysis",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Client for the SEO backend.
///
/// Cheap to clone: the underlying `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base: Url,
    http: Arc<reqwest::Client>,
}

impl BackendClient {
    /// Creates a client for the backend at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidApiBase` when `api_base` is not an
    /// absolute http or https URL.
    pub fn new(api_base: &str, http: Arc<reqwest::Client>) -> Result<Self, InitializationError> {
        let base = Url::parse(api_base)
            .map_err(|_| InitializationError::InvalidApiBase(api_base.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(InitializationError::InvalidApiBase(api_base.to_string()));
        }
        Ok(Self { base, http })
    }

    /// Builds `{base}{path}?url={target}`, keeping any path prefix of the base.
    pub fn endpoint_url(&self, endpoint: Endpoint, target: &str) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}{}", self.base.path().trim_end_matches('/'), endpoint.path());
        url.set_path(&path);
        url.set_fragment(None);
        url.query_pairs_mut().clear().append_pair("url", target);
        url
    }

    /// Runs the SEO meta-tag analysis for `target`.
    pub async fn analyze(&self, target: &str) -> Result<SeoAnalysisResult, RequestError> {
        self.get_json(Endpoint::Analyze, target).await
    }

    /// Fetches the PageSpeed Insights report for `target`.
    pub async fn pagespeed(&self, target: &str) -> Result<PageSpeedResult, RequestError> {
        self.get_json(Endpoint::PageSpeed, target).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        target: &str,
    ) -> Result<T, RequestError> {
        let url = self.endpoint_url(endpoint, target);
        let start = Instant::now();
        debug!("GET {url}");

        let transport = |source: reqwest::Error| {
            let kind = categorize_reqwest_error(&source);
            warn!("{endpoint} request failed ({kind}): {source}");
            RequestError::Transport {
                endpoint,
                kind,
                source,
            }
        };

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;
        debug!(
            "{endpoint} answered {status} ({} bytes) in {:.2}s",
            body.len(),
            start.elapsed().as_secs_f64()
        );

        if !status.is_success() {
            let detail = extract_detail(&body);
            let err = RequestError::Server {
                endpoint,
                status: status.as_u16(),
                detail,
            };
            warn!("{endpoint} returned {status} ({}): {err}", err.error_type());
            return Err(err);
        }

        serde_json::from_slice(&body).map_err(|source| {
            warn!("{endpoint} response could not be decoded: {source}");
            RequestError::Decode { endpoint, source }
        })
    }
}
