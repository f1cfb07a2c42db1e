//! Meta-tag grouping.

use serde::Serialize;

use crate::models::{MetaTags, Tag};

/// Key shown for a tag that has no identifying attribute.
const UNNAMED_TAG: &str = "(unnamed)";

/// A display-ready `key: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub key: String,
    pub value: String,
}

impl From<&Tag> for TagEntry {
    fn from(tag: &Tag) -> Self {
        Self {
            key: tag.key().unwrap_or(UNNAMED_TAG).to_string(),
            value: tag.value().to_string(),
        }
    }
}

/// One family of meta tags, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTagGroup {
    /// Family name, e.g. `OpenGraph`
    pub category: String,
    /// Card heading, e.g. `OpenGraph Tags`
    pub heading: String,
    pub entries: Vec<TagEntry>,
    /// Set exactly when `entries` is empty.
    pub placeholder: Option<String>,
}

impl MetaTagGroup {
    pub fn new(category: &str, tags: &[Tag]) -> Self {
        let entries: Vec<TagEntry> = tags.iter().map(TagEntry::from).collect();
        let placeholder = entries.is_empty().then(|| empty_placeholder(category));
        Self {
            category: category.to_string(),
            heading: format!("{category} Tags"),
            entries,
            placeholder,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Text shown in place of an empty tag list.
pub fn empty_placeholder(category: &str) -> String {
    format!("No {} tags found", category.to_lowercase())
}

/// The four fixed groups, in display order.
pub fn group_meta_tags(meta_tags: &MetaTags) -> Vec<MetaTagGroup> {
    vec![
        MetaTagGroup::new("Standard", &meta_tags.standard),
        MetaTagGroup::new("OpenGraph", &meta_tags.opengraph),
        MetaTagGroup::new("Twitter", &meta_tags.twitter),
        MetaTagGroup::new("Other", &meta_tags.other),
    ]
}
