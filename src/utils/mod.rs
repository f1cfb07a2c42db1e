//! Utility functions.
//!
//! This module provides:
//! - Display-text sanitization for backend-provided strings
//! - Number formatting shared by the shaping and rendering layers

pub mod sanitize;

pub use sanitize::{sanitize_display_text, sanitize_single_line, truncate_chars};

/// Formats a number without a trailing `.0` when it is integral.
///
/// Field-data percentiles and histogram bounds arrive as JSON numbers that
/// are almost always integers (`2500`, not `2500.0`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
