//! Configuration types.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::config::constants::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted text cards
    Text,
    /// The shaped report as a single JSON document
    Json,
}

/// Which analyses a submission runs.
///
/// Both flags false is a valid value but is rejected at submit time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSelection {
    /// Run the `/analyze` meta-tag analysis
    pub seo: bool,
    /// Run the `/pagespeed` analysis
    pub pagespeed: bool,
}

impl AnalysisSelection {
    /// Selection running both analyses.
    pub const BOTH: Self = Self {
        seo: true,
        pagespeed: true,
    };
    /// Selection running only the SEO analysis.
    pub const SEO_ONLY: Self = Self {
        seo: true,
        pagespeed: false,
    };
    /// Selection running only the PageSpeed analysis.
    pub const PAGESPEED_ONLY: Self = Self {
        seo: false,
        pagespeed: true,
    };

    /// Selection from command-line flags. Neither flag means both analyses.
    pub fn from_flags(seo: bool, pagespeed: bool) -> Self {
        if !seo && !pagespeed {
            Self::BOTH
        } else {
            Self { seo, pagespeed }
        }
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        !self.seo && !self.pagespeed
    }

    /// Number of requests a submission with this selection issues.
    pub fn request_count(&self) -> usize {
        usize::from(self.seo) + usize::from(self.pagespeed)
    }
}

/// Error returned when a `Config` field holds an unusable value.
#[derive(Debug, Clone, Error)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use seo_insight::{AnalysisSelection, Config};
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     selection: AnalysisSelection::SEO_ONLY,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL to analyze (normalized at submit time)
    pub url: String,

    /// Analyses to run
    pub selection: AnalysisSelection,

    /// Base URL of the analysis backend
    pub api_base: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Report output format
    pub output: OutputFormat,

    /// Colorize text output
    pub color: bool,

    /// Log progress messages while requests are in flight
    pub show_progress: bool,
}

impl Config {
    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Checks that the configuration is usable before any request is made.
    ///
    /// The URL and selection are deliberately not checked here: those are
    /// user input and are validated by the session at submit time.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        match url::Url::parse(&self.api_base) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
            Ok(parsed) => Err(ConfigValidationError {
                field: "api_base",
                message: format!(
                    "unsupported scheme '{}', expected http or https",
                    parsed.scheme()
                ),
            }),
            Err(e) => Err(ConfigValidationError {
                field: "api_base",
                message: format!("'{}' is not a valid URL ({e})", self.api_base),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            selection: AnalysisSelection::BOTH,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}
