//! Wire models for the backend responses.
//!
//! Every field the renderers read is optional or defaulted: the payloads come
//! from an LLM (`/analyze`) and a third-party API (`/pagespeed`), so partial
//! and `null`-filled bodies are normal and are handled at render time.

mod ordered;
pub mod pagespeed;
pub mod seo;

pub use ordered::OrderedMap;
pub use pagespeed::{
    Audit, AuditDetails, Categories, Category, Distribution, FieldMetric, FullPageScreenshot,
    LighthouseResult, LoadingExperience, PageSpeedResult, Screenshot,
};
pub use seo::{
    Analysis, CurrentData, Improvements, MetaMap, MetaTags, PreviewData, SeoAnalysisResult, Tag,
};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes `null` (as well as a missing field, with `#[serde(default)]`)
/// into `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Renders any JSON scalar as text. `null` is `None`; other values keep their
/// JSON spelling (`5`, `true`).
pub(crate) fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Deserializes an optional text field, stringifying numbers and booleans.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

/// Deserializes a score sent either as a number or as a numeric string.
///
/// Anything else (objects, words, non-finite values) becomes `None`.
pub(crate) fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let score = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        other => {
            log::debug!("Ignoring non-numeric score: {other}");
            None
        }
    };
    Ok(score.filter(|s| s.is_finite()))
}

/// Deserializes a list of strings, dropping items that are not strings.
///
/// A missing, `null` or non-list value is an empty list.
pub(crate) fn string_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                other => {
                    log::debug!("Skipping non-text list item: {other}");
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    })
}
