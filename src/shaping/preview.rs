//! Social-share preview projection.
//!
//! A shared link shows one title, description and image. Pages often declare
//! these several times (OpenGraph, Twitter card, plain `<title>`), so the
//! preview picks one value per field according to a single named policy.

use serde::Serialize;

use crate::config::{NO_DESCRIPTION, NOT_SET, PLACEHOLDER_HOSTNAME, UNTITLED};
use crate::models::{MetaMap, PreviewData};

use super::meta_tags::TagEntry;

/// Where a preview value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PreviewSource {
    OpenGraph,
    Twitter,
    Page,
}

/// Order in which sources are consulted for each preview field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewPriority {
    /// Order for title, description and image
    pub content: &'static [PreviewSource],
    /// Order for the link URL (Twitter cards carry no canonical URL)
    pub url: &'static [PreviewSource],
}

impl PreviewPriority {
    /// OpenGraph, then Twitter card, then the page's own title/description.
    pub const OPEN_GRAPH_FIRST: Self = Self {
        content: &[
            PreviewSource::OpenGraph,
            PreviewSource::Twitter,
            PreviewSource::Page,
        ],
        url: &[PreviewSource::OpenGraph, PreviewSource::Page],
    };
}

/// A value chosen for the preview, with its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chosen {
    pub value: String,
    pub source: PreviewSource,
}

/// Display-ready social preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialPreview {
    /// Falls back to `Untitled`
    pub title: String,
    pub title_source: Option<PreviewSource>,
    /// Falls back to `No description available`
    pub description: String,
    pub description_source: Option<PreviewSource>,
    pub image: Option<Chosen>,
    pub url: Option<Chosen>,
    /// Host of `url` without a leading `www.`
    pub hostname: String,
    pub opengraph: Vec<TagEntry>,
    pub twitter: Vec<TagEntry>,
    pub warnings: Vec<String>,
    pub notices: Vec<String>,
}

struct Field {
    og_key: &'static str,
    twitter_key: &'static str,
}

const TITLE: Field = Field {
    og_key: "og:title",
    twitter_key: "twitter:title",
};
const DESCRIPTION: Field = Field {
    og_key: "og:description",
    twitter_key: "twitter:description",
};
const IMAGE: Field = Field {
    og_key: "og:image",
    twitter_key: "twitter:image",
};
const URL: Field = Field {
    og_key: "og:url",
    twitter_key: "twitter:url",
};

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn choose(
    order: &[PreviewSource],
    field: &Field,
    data: &PreviewData,
    page_value: Option<&str>,
) -> Option<Chosen> {
    order.iter().find_map(|source| {
        let value = match source {
            PreviewSource::OpenGraph => non_empty(data.og_data.get(field.og_key)),
            PreviewSource::Twitter => non_empty(data.twitter_data.get(field.twitter_key)),
            PreviewSource::Page => non_empty(page_value),
        }?;
        Some(Chosen {
            value: value.to_string(),
            source: *source,
        })
    })
}

fn entries(map: &MetaMap) -> Vec<TagEntry> {
    map.iter()
        .map(|(key, value)| TagEntry {
            key: key.to_string(),
            value: non_empty(value).unwrap_or(NOT_SET).to_string(),
        })
        .collect()
}

/// Host of `url` with a leading `www.` removed.
///
/// Returns the placeholder host when `url` is absent or does not parse.
pub fn display_hostname(url: Option<&str>) -> String {
    url.and_then(|u| url::Url::parse(u).ok())
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .map(|host| host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
        .unwrap_or_else(|| PLACEHOLDER_HOSTNAME.to_string())
}

/// Projects backend preview data into what a shared link would show.
pub fn project_preview(data: &PreviewData, priority: PreviewPriority) -> SocialPreview {
    let title = choose(priority.content, &TITLE, data, data.title.as_deref());
    let description = choose(
        priority.content,
        &DESCRIPTION,
        data,
        data.meta_description.as_deref(),
    );
    // The page itself has no image fallback.
    let image = choose(priority.content, &IMAGE, data, None);
    let url = choose(priority.url, &URL, data, data.url.as_deref());
    let hostname = display_hostname(url.as_ref().map(|c| c.value.as_str()));

    SocialPreview {
        title_source: title.as_ref().map(|c| c.source),
        title: title.map_or_else(|| UNTITLED.to_string(), |c| c.value),
        description_source: description.as_ref().map(|c| c.source),
        description: description.map_or_else(|| NO_DESCRIPTION.to_string(), |c| c.value),
        image,
        url,
        hostname,
        opengraph: entries(&data.og_data),
        twitter: entries(&data.twitter_data),
        warnings: data.warnings.clone(),
        notices: data.notices.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(pairs: &[(&str, &str)]) -> MetaMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect()
    }

    fn full_data() -> PreviewData {
        PreviewData {
            og_data: meta(&[
                ("og:title", "OG Title"),
                ("og:description", "OG Description"),
                ("og:image", "https://cdn.example.com/og.png"),
                ("og:url", "https://www.example.org/post"),
            ]),
            twitter_data: meta(&[
                ("twitter:title", "TW Title"),
                ("twitter:description", "TW Description"),
                ("twitter:image", "https://cdn.example.com/tw.png"),
            ]),
            title: Some("Page Title".to_string()),
            meta_description: Some("Page Description".to_string()),
            url: Some("https://page.example.net/".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_graph_wins() {
        let preview = project_preview(&full_data(), PreviewPriority::OPEN_GRAPH_FIRST);
        assert_eq!(preview.title, "OG Title");
        assert_eq!(preview.title_source, Some(PreviewSource::OpenGraph));
        assert_eq!(preview.description, "OG Description");
        assert_eq!(
            preview.image.unwrap().value,
            "https://cdn.example.com/og.png"
        );
        assert_eq!(preview.url.unwrap().value, "https://www.example.org/post");
        assert_eq!(preview.hostname, "example.org");
    }

    #[test]
    fn test_twitter_is_second() {
        let mut data = full_data();
        data.og_data = meta(&[("og:title", ""), ("og:type", "website")]);
        let preview = project_preview(&data, PreviewPriority::OPEN_GRAPH_FIRST);
        assert_eq!(preview.title, "TW Title");
        assert_eq!(preview.title_source, Some(PreviewSource::Twitter));
        assert_eq!(preview.description, "TW Description");
        assert_eq!(
            preview.image.as_ref().unwrap().source,
            PreviewSource::Twitter
        );
        // url skips Twitter and falls back to the page
        let url = preview.url.unwrap();
        assert_eq!(url.source, PreviewSource::Page);
        assert_eq!(preview.hostname, "page.example.net");
    }

    #[test]
    fn test_page_fallbacks_and_literals() {
        let data = PreviewData {
            title: Some("Page Title".to_string()),
            ..Default::default()
        };
        let preview = project_preview(&data, PreviewPriority::OPEN_GRAPH_FIRST);
        assert_eq!(preview.title, "Page Title");
        assert_eq!(preview.title_source, Some(PreviewSource::Page));
        assert_eq!(preview.description, "No description available");
        assert_eq!(preview.description_source, None);
        assert!(preview.image.is_none());
        assert!(preview.url.is_none());
        assert_eq!(preview.hostname, "example.com");

        let empty = project_preview(&PreviewData::default(), PreviewPriority::OPEN_GRAPH_FIRST);
        assert_eq!(empty.title, "Untitled");
    }

    #[test]
    fn test_display_hostname() {
        assert_eq!(
            display_hostname(Some("https://www.rust-lang.org/learn")),
            "rust-lang.org"
        );
        assert_eq!(display_hostname(Some("http://docs.rs")), "docs.rs");
        // Only a leading www. is stripped
        assert_eq!(
            display_hostname(Some("https://shop.www.example.com")),
            "shop.www.example.com"
        );
        assert_eq!(display_hostname(None), "example.com");
        assert_eq!(display_hostname(Some("not a url")), "example.com");
    }

    #[test]
    fn test_entries_mark_unset_values() {
        let data = PreviewData {
            og_data: vec![
                ("og:title".to_string(), Some("T".to_string())),
                ("og:image".to_string(), None),
                ("og:type".to_string(), Some(String::new())),
            ]
            .into_iter()
            .collect(),
            warnings: vec!["Missing og:image".to_string()],
            ..Default::default()
        };
        let preview = project_preview(&data, PreviewPriority::OPEN_GRAPH_FIRST);
        let values: Vec<&str> = preview.opengraph.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["T", "Not set", "Not set"]);
        assert_eq!(preview.warnings, vec!["Missing og:image".to_string()]);
        assert!(preview.twitter.is_empty());
    }
}
