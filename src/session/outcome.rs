//! Result of a single submission.

use crate::config::AnalysisSelection;
use crate::error_handling::RequestError;
use crate::models::{PageSpeedResult, SeoAnalysisResult};

/// How a submission went overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Every requested analysis succeeded
    Succeeded,
    /// At least one succeeded and at least one failed
    PartiallyFailed,
    /// Every requested analysis failed
    Failed,
}

impl OutcomeStatus {
    /// Process exit code: 0 success, 2 partial failure, 1 total failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            OutcomeStatus::Succeeded => 0,
            OutcomeStatus::PartiallyFailed => 2,
            OutcomeStatus::Failed => 1,
        }
    }
}

/// Both halves of a submission, reported separately.
///
/// A half is `None` when it was not requested.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub generation: u64,
    pub url: String,
    pub selection: AnalysisSelection,
    pub seo: Option<Result<SeoAnalysisResult, RequestError>>,
    pub pagespeed: Option<Result<PageSpeedResult, RequestError>>,
    /// False when the session moved on before the responses arrived, in
    /// which case nothing was written to the session state.
    pub committed: bool,
}

impl SubmissionOutcome {
    pub fn status(&self) -> OutcomeStatus {
        let succeeded = self.seo.as_ref().is_some_and(Result::is_ok) as usize
            + self.pagespeed.as_ref().is_some_and(Result::is_ok) as usize;
        let failed = self.errors().count();
        match (succeeded, failed) {
            (_, 0) => OutcomeStatus::Succeeded,
            (0, _) => OutcomeStatus::Failed,
            _ => OutcomeStatus::PartiallyFailed,
        }
    }

    /// Errors of the halves that failed, SEO first.
    pub fn errors(&self) -> impl Iterator<Item = &RequestError> {
        let seo = self.seo.as_ref().and_then(|r| r.as_ref().err());
        let pagespeed = self.pagespeed.as_ref().and_then(|r| r.as_ref().err());
        seo.into_iter().chain(pagespeed)
    }
}
