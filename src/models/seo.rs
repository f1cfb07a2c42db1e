//! `/analyze` response model.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{lenient_score, lenient_text, null_as_default, string_items, value_to_text};

/// A single `<meta>` element as reported by the backend.
///
/// Tags in the standard/other groups usually carry `name`, OpenGraph tags
/// carry `property`, and the backend also passes through `charset` and
/// `http_equiv` for tags that have neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_equiv: Option<String>,
}

impl Tag {
    /// Tag with a `name` attribute.
    pub fn named(name: &str, content: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    /// Tag with a `property` attribute.
    pub fn property(property: &str, content: &str) -> Self {
        Self {
            property: Some(property.to_string()),
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    /// The attribute identifying the tag: `name`, then `property`, then
    /// `http-equiv`, then `charset`. Empty attributes are skipped.
    pub fn key(&self) -> Option<&str> {
        [&self.name, &self.property, &self.http_equiv]
            .into_iter()
            .find_map(|attr| attr.as_deref().filter(|s| !s.is_empty()))
            .or_else(|| self.charset.as_deref().map(|_| "charset"))
    }

    /// The tag's value. For a bare `<meta charset>` this is the charset.
    pub fn value(&self) -> &str {
        self.content
            .as_deref()
            .or_else(|| {
                if self.key() == Some("charset") {
                    self.charset.as_deref()
                } else {
                    None
                }
            })
            .unwrap_or("")
    }
}

/// Meta tags grouped by family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaTags {
    #[serde(default, deserialize_with = "null_as_default")]
    pub standard: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub opengraph: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub twitter: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other: Vec<Tag>,
}

/// A key/value map of preview metadata, in document order.
///
/// The backend has sent Twitter card data both as an object
/// (`{"twitter:title": "..."}`) and as a list of tags
/// (`[{"name": "twitter:title", "content": "..."}]`); both deserialize into the
/// same form. Values are `None` when the tag is present but unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaMap(Vec<(String, Option<String>)>);

impl MetaMap {
    /// Value for `key`, treating empty strings as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
            .filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for MetaMap {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MetaMapRepr {
    Object(serde_json::Map<String, Value>),
    Tags(Vec<Tag>),
}

impl<'de> Deserialize<'de> for MetaMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = Option::<MetaMapRepr>::deserialize(deserializer)?;
        Ok(match repr {
            None => MetaMap::default(),
            Some(MetaMapRepr::Object(object)) => object
                .into_iter()
                .map(|(k, v)| (k, value_to_text(v)))
                .collect(),
            Some(MetaMapRepr::Tags(tags)) => tags
                .into_iter()
                .filter_map(|tag| {
                    let key = tag.key()?.to_string();
                    Some((key, tag.content))
                })
                .collect(),
        })
    }
}

/// Link-preview ("debugger-style") data prepared by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewData {
    #[serde(default)]
    pub og_data: MetaMap,
    #[serde(default)]
    pub twitter_data: MetaMap,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub warnings: Vec<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub notices: Vec<String>,
}

/// What the page currently has.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta_tags: MetaTags,
    #[serde(default)]
    pub preview_data: Option<PreviewData>,
}

/// Suggested replacements produced by the analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Improvements {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub standard: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub opengraph: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub twitter: Vec<Tag>,
}

/// Scored analysis of the current tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// 0-100, as returned; see [`Analysis::score`] for the display value.
    #[serde(default, deserialize_with = "lenient_score")]
    pub performance_score: Option<f64>,
    #[serde(default, deserialize_with = "string_items")]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub improvements: Option<Improvements>,
}

impl Analysis {
    /// The performance score rounded and clamped to 0..=100. Missing scores are 0.
    pub fn score(&self) -> u8 {
        match self.performance_score {
            Some(s) if s.is_finite() => s.round().clamp(0.0, 100.0) as u8,
            _ => 0,
        }
    }
}

/// Full `/analyze` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoAnalysisResult {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_data: CurrentData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub analysis: Analysis,
}
