//! Report rendering.
//!
//! The same [`AnalysisReport`] is rendered either as colored text cards or as
//! a JSON document.

mod json;
mod text;

use crate::config::OutputFormat;
use crate::report::AnalysisReport;

pub use json::render_json;
pub use text::{render_failure, render_text, score_bar};

/// Options for the text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colors
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Renders `report` in the requested format.
///
/// # Errors
///
/// Only JSON serialization can fail.
pub fn render(
    report: &AnalysisReport,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report, options)),
        OutputFormat::Json => render_json(report),
    }
}
