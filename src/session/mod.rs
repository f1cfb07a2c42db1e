//! Submission lifecycle.
//!
//! A [`Session`] owns the state shown to the user and accepts one submission
//! at a time. Each submission (and each [`Session::reset`]) starts a new
//! generation; responses belonging to an older generation are dropped instead
//! of overwriting newer state.

mod outcome;
mod state;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info};

use crate::app::{validate_and_normalize_url, ProgressTicker};
use crate::client::BackendClient;
use crate::config::{AnalysisSelection, EMPTY_SELECTION_ERROR, EMPTY_URL_ERROR};
use crate::error_handling::{RequestError, SubmitError};
use crate::models::{PageSpeedResult, SeoAnalysisResult};

pub use outcome::{OutcomeStatus, SubmissionOutcome};
pub use state::{AnalysisFailure, SessionState};

#[derive(Debug, Default)]
struct Inner {
    generation: u64,
    /// Generation of the submission currently holding the busy flag
    in_flight: Option<u64>,
    state: SessionState,
}

/// Accepts submissions and holds the committed results.
///
/// Shareable across tasks behind an `Arc`. The lock is never held across an
/// `.await`.
#[derive(Debug)]
pub struct Session {
    client: BackendClient,
    progress_interval: Option<Duration>,
    inner: Mutex<Inner>,
}

/// Releases the busy flag when a submission finishes or is dropped mid-flight.
struct InFlightGuard<'a> {
    session: &'a Session,
    generation: u64,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.session.lock();
        if inner.in_flight == Some(self.generation) {
            inner.in_flight = None;
        }
        if inner.generation == self.generation {
            inner.state.loading = false;
        }
    }
}

impl Session {
    /// Creates an idle session without progress output.
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            progress_interval: None,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Logs progress every `interval` while a submission is in flight.
    pub fn with_progress(mut self, interval: Option<Duration>) -> Self {
        self.progress_interval = interval;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.lock().state.clone()
    }

    /// True while a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.lock().in_flight.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Clears the state and supersedes any in-flight submission.
    ///
    /// A submission still running keeps going, but its responses are
    /// discarded and a new submission may start right away.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.in_flight = None;
        inner.state = SessionState::default();
        debug!("Session reset (generation {})", inner.generation);
    }

    /// Validates the input and runs the selected analyses concurrently.
    ///
    /// Results are committed to the session state only if no newer
    /// submission or reset happened in the meantime. Failures of individual
    /// analyses are reported in the outcome and recorded in the state; they
    /// are not an `Err` of this method.
    ///
    /// # Errors
    ///
    /// - `SubmitError::Validation` for an empty URL, an empty selection or a
    ///   malformed URL. No request is issued.
    /// - `SubmitError::Busy` when another submission is in flight.
    pub async fn submit(
        &self,
        url: &str,
        selection: AnalysisSelection,
    ) -> Result<SubmissionOutcome, SubmitError> {
        if url.trim().is_empty() {
            return Err(SubmitError::Validation(EMPTY_URL_ERROR.to_string()));
        }
        if selection.is_empty() {
            return Err(SubmitError::Validation(EMPTY_SELECTION_ERROR.to_string()));
        }
        let url = validate_and_normalize_url(url)?;

        let guard = self.begin(&url, selection)?;
        let generation = guard.generation;
        let total = selection.request_count();
        info!("Analyzing {url} ({total} request(s), generation {generation})");

        let pending = Arc::new(AtomicUsize::new(total));
        let ticker = match self.progress_interval {
            Some(period) => ProgressTicker::start(period, Arc::clone(&pending), total),
            None => ProgressTicker::disabled(),
        };

        let seo = async {
            if !selection.seo {
                return None;
            }
            let result = self.client.analyze(&url).await;
            pending.fetch_sub(1, Ordering::SeqCst);
            Some(result)
        };
        let pagespeed = async {
            if !selection.pagespeed {
                return None;
            }
            let result = self.client.pagespeed(&url).await;
            pending.fetch_sub(1, Ordering::SeqCst);
            Some(result)
        };
        let (seo, pagespeed) = tokio::join!(seo, pagespeed);

        ticker.shutdown().await;
        let committed = self.commit(generation, seo.as_ref(), pagespeed.as_ref());
        drop(guard);

        Ok(SubmissionOutcome {
            generation,
            url,
            selection,
            seo,
            pagespeed,
            committed,
        })
    }

    fn begin(
        &self,
        url: &str,
        selection: AnalysisSelection,
    ) -> Result<InFlightGuard<'_>, SubmitError> {
        let mut inner = self.lock();
        if inner.in_flight.is_some() {
            debug!("Rejecting submission: generation {:?} in flight", inner.in_flight);
            return Err(SubmitError::Busy);
        }
        inner.generation += 1;
        let generation = inner.generation;
        inner.in_flight = Some(generation);
        inner.state = SessionState {
            url: Some(url.to_string()),
            selection,
            loading: true,
            ..SessionState::default()
        };
        Ok(InFlightGuard {
            session: self,
            generation,
        })
    }

    fn commit(
        &self,
        generation: u64,
        seo: Option<&Result<SeoAnalysisResult, RequestError>>,
        pagespeed: Option<&Result<PageSpeedResult, RequestError>>,
    ) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation {
            info!(
                "Discarding results of superseded submission (generation {generation}, current {})",
                inner.generation
            );
            return false;
        }

        let state = &mut inner.state;
        state.loading = false;
        state.seo = seo.and_then(|r| r.as_ref().ok()).cloned();
        state.pagespeed = pagespeed.and_then(|r| r.as_ref().ok()).cloned();
        state.failures = seo
            .and_then(|r| r.as_ref().err())
            .into_iter()
            .chain(pagespeed.and_then(|r| r.as_ref().err()))
            .map(AnalysisFailure::from)
            .collect();
        true
    }
}
