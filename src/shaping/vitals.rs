//! Core Web Vitals extraction.

use serde::Serialize;

use crate::config::NOT_AVAILABLE;
use crate::models::{Audit, LoadingExperience, OrderedMap};

use super::field_data::FieldMetricView;
use super::score::AuditRating;

/// A fixed vital: its label, Lighthouse audit id, and CrUX field-data key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalDefinition {
    pub name: &'static str,
    pub audit_id: &'static str,
    pub field_key: Option<&'static str>,
}

/// The vitals shown, in display order.
///
/// Total Blocking Time and Speed Index are lab-only and have no field data.
pub const CORE_WEB_VITALS: [VitalDefinition; 5] = [
    VitalDefinition {
        name: "First Contentful Paint",
        audit_id: "first-contentful-paint",
        field_key: Some("FIRST_CONTENTFUL_PAINT_MS"),
    },
    VitalDefinition {
        name: "Largest Contentful Paint",
        audit_id: "largest-contentful-paint",
        field_key: Some("LARGEST_CONTENTFUL_PAINT_MS"),
    },
    VitalDefinition {
        name: "Cumulative Layout Shift",
        audit_id: "cumulative-layout-shift",
        field_key: Some("CUMULATIVE_LAYOUT_SHIFT_SCORE"),
    },
    VitalDefinition {
        name: "Total Blocking Time",
        audit_id: "total-blocking-time",
        field_key: None,
    },
    VitalDefinition {
        name: "Speed Index",
        audit_id: "speed-index",
        field_key: None,
    },
];

/// One vital, paired with its field data when available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreWebVital {
    pub name: &'static str,
    pub audit_id: &'static str,
    /// Lighthouse `displayValue`, e.g. `1.2 s`
    pub value: Option<String>,
    pub score: Option<f64>,
    /// `None` when the score is missing; no rating is shown in that case
    pub rating: Option<AuditRating>,
    pub field: Option<FieldMetricView>,
}

impl CoreWebVital {
    /// The value, or `N/A` when the audit or its display value is missing.
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Pulls the fixed vitals out of the audit map.
pub fn extract_core_web_vitals(
    audits: &OrderedMap<Audit>,
    experience: Option<&LoadingExperience>,
) -> Vec<CoreWebVital> {
    CORE_WEB_VITALS
        .iter()
        .map(|vital| {
            let audit = audits.get(vital.audit_id);
            let score = audit.and_then(|a| a.score);
            let field = vital.field_key.and_then(|key| {
                experience
                    .and_then(|e| e.metrics.get(key))
                    .map(|metric| FieldMetricView::new(key, metric))
            });
            CoreWebVital {
                name: vital.name,
                audit_id: vital.audit_id,
                value: audit
                    .and_then(|a| a.display_value.clone())
                    .filter(|v| !v.is_empty()),
                score,
                rating: score.map(AuditRating::from_score),
                field,
            }
        })
        .collect()
}
