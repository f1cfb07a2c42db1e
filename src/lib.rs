//! seo_insight library: SEO and PageSpeed reports from an analysis backend
//!
//! This library validates a URL, asks the backend's `/analyze` and
//! `/pagespeed` endpoints about it (concurrently), and shapes the answers into
//! display-ready reports: grouped meta tags, a social-share preview, SEO and
//! performance scores, Core Web Vitals, field data and the top optimization
//! opportunities.
//!
//! # Example
//!
//! ```no_run
//! use seo_insight::{run_analysis, AnalysisSelection, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     url: "example.com".to_string(),
//!     selection: AnalysisSelection::SEO_ONLY,
//!     ..Default::default()
//! };
//!
//! let run = run_analysis(config).await?;
//! println!("Finished in {:.1}s: {:?}", run.elapsed_seconds, run.status);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod client;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod render;
pub mod report;
pub mod session;
pub mod shaping;
mod utils;

// Re-export public API
pub use client::{BackendClient, Endpoint};
pub use config::{AnalysisSelection, Config, LogFormat, LogLevel, OutputFormat};
pub use render::{render, RenderOptions};
pub use report::{AnalysisReport, Section};
pub use run::{run_analysis, RunReport};
pub use session::{OutcomeStatus, Session, SessionState, SubmissionOutcome};
pub use utils::{sanitize_display_text, sanitize_single_line};

// Internal run module (wires configuration, client and session together)
mod run {
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::client::BackendClient;
    use crate::config::{Config, PROGRESS_TICK_INTERVAL};
    use crate::initialization::init_client;
    use crate::report::AnalysisReport;
    use crate::session::{OutcomeStatus, Session};
    use crate::shaping::PreviewPriority;

    /// Results of a single analysis run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Normalized URL that was analyzed
        pub url: String,
        /// Shaped report of the committed session state
        pub report: Option<AnalysisReport>,
        /// Overall success of the requested analyses
        pub status: OutcomeStatus,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the analyses selected in `config` against the configured backend.
    ///
    /// Failures of individual analyses do not make this function fail; they
    /// are part of the returned report and reflected in `status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the HTTP client
    /// cannot be built, or the URL/selection is rejected before any request
    /// is made.
    pub async fn run_analysis(config: Config) -> Result<RunReport> {
        config.validate().context("Invalid configuration")?;
        let start = Instant::now();

        let http = init_client(&config).context("Failed to initialize HTTP client")?;
        let client = BackendClient::new(&config.api_base, http)?;
        let session = Session::new(client)
            .with_progress(config.show_progress.then_some(PROGRESS_TICK_INTERVAL));

        let outcome = session.submit(&config.url, config.selection).await?;
        for err in outcome.errors() {
            warn!(
                "{} failed ({}): {}",
                err.endpoint().label(),
                err.error_type(),
                err
            );
        }

        let report =
            AnalysisReport::from_state(&session.snapshot(), PreviewPriority::OPEN_GRAPH_FIRST);
        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "Analysis of {} finished in {:.2}s ({:?})",
            outcome.url,
            elapsed_seconds,
            outcome.status()
        );

        Ok(RunReport {
            url: outcome.url.clone(),
            report,
            status: outcome.status(),
            elapsed_seconds,
        })
    }
}
