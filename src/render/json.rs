//! JSON output.

use crate::report::AnalysisReport;

/// Serializes the shaped report as pretty-printed JSON.
pub fn render_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
