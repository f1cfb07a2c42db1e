//! Real-user (Chrome UX Report) field data shaping.

use serde::Serialize;

use crate::models::{Distribution, FieldMetric, LoadingExperience};
use crate::utils::format_number;

use super::score::FieldCategory;

/// Display-ready field metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMetricView {
    /// Raw CrUX key, e.g. `LARGEST_CONTENTFUL_PAINT_MS`
    pub key: String,
    /// Humanized key, e.g. `Largest Contentful Paint Ms`
    pub label: String,
    pub category: Option<FieldCategory>,
    /// Formatted percentile (`2900`), if reported
    pub percentile: Option<String>,
    /// One line per histogram bucket
    pub distributions: Vec<String>,
}

impl FieldMetricView {
    pub fn new(key: &str, metric: &FieldMetric) -> Self {
        Self {
            key: key.to_string(),
            label: humanize_metric_key(key),
            category: metric.category.as_deref().map(FieldCategory::new),
            percentile: metric.percentile.map(format_number),
            distributions: metric.distributions.iter().map(format_distribution).collect(),
        }
    }
}

/// Overall field-data verdict plus every reported metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    pub overall_category: Option<FieldCategory>,
    pub metrics: Vec<FieldMetricView>,
}

/// Formats one histogram bucket as `{min}-{max}ms: {pct}%`, with `∞` for the
/// open-ended last bucket.
pub fn format_distribution(distribution: &Distribution) -> String {
    let max = distribution
        .max
        .map(format_number)
        .unwrap_or_else(|| "∞".to_string());
    format!(
        "{}-{}ms: {:.1}%",
        format_number(distribution.min),
        max,
        distribution.proportion * 100.0
    )
}

/// `FIRST_CONTENTFUL_PAINT_MS` → `First Contentful Paint Ms`.
pub fn humanize_metric_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn summarize_field_data(experience: &LoadingExperience) -> FieldSummary {
    FieldSummary {
        overall_category: experience
            .overall_category
            .as_deref()
            .map(FieldCategory::new),
        metrics: experience
            .metrics
            .iter()
            .map(|(key, metric)| FieldMetricView::new(key, metric))
            .collect(),
    }
}
