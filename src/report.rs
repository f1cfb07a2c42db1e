//! The shaped report built from session state.

use serde::Serialize;

use crate::client::Endpoint;
use crate::session::{AnalysisFailure, SessionState};
use crate::shaping::{PageSpeedReport, PreviewPriority, SeoReport};

/// One analysis in the report: either its shaped result or why it failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Section<T> {
    Ready { report: T },
    Failed { message: String, http_status: Option<u16> },
}

impl<T> Section<T> {
    fn failed(failure: &AnalysisFailure) -> Self {
        Section::Failed {
            message: failure.message.clone(),
            http_status: failure.status,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Section::Ready { .. })
    }
}

/// Everything rendered for one submission.
///
/// A section is `None` when its analysis was not requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub url: String,
    pub seo: Option<Section<SeoReport>>,
    pub pagespeed: Option<Section<PageSpeedReport>>,
}

impl AnalysisReport {
    /// Shapes the committed state. Returns `None` while idle or loading.
    pub fn from_state(state: &SessionState, priority: PreviewPriority) -> Option<Self> {
        if state.loading {
            return None;
        }
        let url = state.url.clone()?;

        let seo = match (&state.seo, state.failure(Endpoint::Analyze)) {
            (Some(result), _) => Some(Section::Ready {
                report: SeoReport::from_result(result, priority),
            }),
            (None, Some(failure)) => Some(Section::failed(failure)),
            (None, None) => None,
        };
        let pagespeed = match (&state.pagespeed, state.failure(Endpoint::PageSpeed)) {
            (Some(result), _) => Some(Section::Ready {
                report: PageSpeedReport::from_result(result),
            }),
            (None, Some(failure)) => Some(Section::failed(failure)),
            (None, None) => None,
        };

        Some(Self {
            url,
            seo,
            pagespeed,
        })
    }
}
