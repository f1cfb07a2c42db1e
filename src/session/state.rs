//! Committed session state.

use serde::Serialize;

use crate::client::Endpoint;
use crate::config::AnalysisSelection;
use crate::error_handling::RequestError;
use crate::models::{PageSpeedResult, SeoAnalysisResult};

/// A requested analysis that did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisFailure {
    pub endpoint: Endpoint,
    /// HTTP status, when the backend answered at all
    pub status: Option<u16>,
    /// Message shown to the user
    pub message: String,
}

impl From<&RequestError> for AnalysisFailure {
    fn from(err: &RequestError) -> Self {
        let status = match err {
            RequestError::Server { status, .. } => Some(*status),
            _ => None,
        };
        Self {
            endpoint: err.endpoint(),
            status,
            message: err.user_message(),
        }
    }
}

/// What the session currently shows.
///
/// Every submission starts from an empty state, so results from an earlier
/// submission never sit next to results for a different URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    /// Normalized URL of the current submission
    pub url: Option<String>,
    pub selection: AnalysisSelection,
    /// True while the current submission is in flight
    pub loading: bool,
    pub seo: Option<SeoAnalysisResult>,
    pub pagespeed: Option<PageSpeedResult>,
    /// One entry per requested analysis that failed
    pub failures: Vec<AnalysisFailure>,
}

impl SessionState {
    /// Failure of the given analysis, if it failed.
    pub fn failure(&self, endpoint: Endpoint) -> Option<&AnalysisFailure> {
        self.failures.iter().find(|f| f.endpoint == endpoint)
    }

    /// True when nothing has been submitted or the state was reset.
    pub fn is_idle(&self) -> bool {
        self.url.is_none() && !self.loading
    }
}
