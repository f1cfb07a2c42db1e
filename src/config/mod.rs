//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (backend defaults, thresholds, placeholders)
//! - Library configuration and CLI option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    AnalysisSelection, Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat,
};
