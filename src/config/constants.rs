//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including backend defaults, timeouts, score thresholds and display
//! placeholders.

use std::time::Duration;

/// Default base URL of the SEO analysis backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable that overrides the backend base URL.
pub const API_BASE_ENV_VAR: &str = "SEO_INSIGHT_API_BASE";

/// Path of the SEO meta-tag analysis endpoint.
pub const ANALYZE_PATH: &str = "/analyze";
/// Path of the PageSpeed endpoint.
pub const PAGESPEED_PATH: &str = "/pagespeed";

/// Per-request timeout in seconds.
///
/// The backend drives a headless browser and an LLM call for `/analyze`, and
/// the upstream PageSpeed API routinely takes 20-40s, so this is generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Interval between progress ticker messages while a submission is in flight.
pub const PROGRESS_TICK_INTERVAL: Duration = Duration::from_secs(5);

/// User-Agent sent to the backend.
pub const USER_AGENT: &str = concat!("seo_insight/", env!("CARGO_PKG_VERSION"));

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Error messages surfaced to the user
/// Shown when a request fails without a server-provided `detail`.
pub const GENERIC_REQUEST_ERROR: &str = "Failed to analyze URL";
pub const EMPTY_URL_ERROR: &str = "Please enter a URL";
pub const EMPTY_SELECTION_ERROR: &str = "Please select at least one analysis type";

// SEO score bands (0-100)
pub const SEO_GREEN_THRESHOLD: u8 = 70;
pub const SEO_YELLOW_THRESHOLD: u8 = 40;

// PageSpeed overall score bands (0-100)
pub const PAGESPEED_GREEN_THRESHOLD: u8 = 90;
pub const PAGESPEED_YELLOW_THRESHOLD: u8 = 50;

// Per-audit Lighthouse scores (0.0-1.0)
pub const AUDIT_GOOD_THRESHOLD: f64 = 0.9;
pub const AUDIT_NEEDS_IMPROVEMENT_THRESHOLD: f64 = 0.5;

/// Audits scoring below this are candidates for the opportunity list.
pub const OPPORTUNITY_SCORE_CEILING: f64 = 0.9;
/// Number of opportunities shown.
pub const MAX_OPPORTUNITIES: usize = 3;

// Display placeholders
pub const NOT_AVAILABLE: &str = "N/A";
pub const NOT_SET: &str = "Not set";
pub const NOT_FOUND: &str = "Not found";
pub const UNTITLED: &str = "Untitled";
pub const NO_DESCRIPTION: &str = "No description available";
/// Hostname shown in the social preview when the page has no usable URL.
pub const PLACEHOLDER_HOSTNAME: &str = "example.com";
