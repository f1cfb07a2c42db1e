//! `/pagespeed` response model.
//!
//! The backend forwards the Google PageSpeed Insights v5 payload untouched, so
//! this mirrors the subset of the Lighthouse schema that is rendered.

use serde::{Deserialize, Serialize};

use super::{lenient_score, null_as_default, OrderedMap};

/// Full `/pagespeed` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub lighthouse_result: Option<LighthouseResult>,
    #[serde(default)]
    pub loading_experience: Option<LoadingExperience>,
}

impl PageSpeedResult {
    /// The audit map, or `None` when the payload is unusable.
    ///
    /// This is the only validity check applied to PageSpeed payloads.
    pub fn audits(&self) -> Option<&OrderedMap<Audit>> {
        self.lighthouse_result.as_ref()?.audits.as_ref()
    }

    /// Overall performance category score (0.0-1.0), if reported.
    pub fn performance_score(&self) -> Option<f64> {
        self.lighthouse_result
            .as_ref()?
            .categories
            .as_ref()?
            .performance
            .as_ref()?
            .score
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseResult {
    #[serde(default)]
    pub requested_url: Option<String>,
    #[serde(default)]
    pub final_url: Option<String>,
    /// RFC 3339 timestamp of the Lighthouse run
    #[serde(default)]
    pub fetch_time: Option<String>,
    #[serde(default)]
    pub audits: Option<OrderedMap<Audit>>,
    #[serde(default)]
    pub categories: Option<Categories>,
    #[serde(default)]
    pub full_page_screenshot: Option<FullPageScreenshot>,
}

/// A single Lighthouse audit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// 0.0-1.0, `null` for informative/manual audits
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default)]
    pub display_value: Option<String>,
    #[serde(default)]
    pub details: Option<AuditDetails>,
}

impl Audit {
    /// True if the audit carries a `details.items` list (even an empty one).
    pub fn has_detail_items(&self) -> bool {
        self.details
            .as_ref()
            .is_some_and(|details| details.items.is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditDetails {
    #[serde(default)]
    pub items: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub performance: Option<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullPageScreenshot {
    #[serde(default)]
    pub screenshot: Option<Screenshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screenshot {
    /// `data:image/...;base64,` URI
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Chrome UX Report field data for the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadingExperience {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub overall_category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metrics: OrderedMap<FieldMetric>,
}

/// One real-user metric: `FAST`/`AVERAGE`/`SLOW` plus the distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMetric {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub percentile: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub distributions: Vec<Distribution>,
}

/// One bucket of a field-data histogram. The last bucket has no `max`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub proportion: f64,
}
