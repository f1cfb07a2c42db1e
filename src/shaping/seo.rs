//! SEO result view.

use serde::Serialize;

use crate::config::NOT_FOUND;
use crate::models::{Improvements, SeoAnalysisResult};

use super::meta_tags::{group_meta_tags, MetaTagGroup, TagEntry};
use super::preview::{project_preview, PreviewPriority, SocialPreview};
use super::score::SeoBand;

/// Score, band and weaknesses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    /// Clamped to 0..=100
    pub score: u8,
    pub band: SeoBand,
    pub weaknesses: Vec<String>,
}

/// Suggested title alongside the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSuggestion {
    /// Current page title, or `Not found`
    pub current: String,
    pub suggested: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImprovementsView {
    pub title: Option<TitleSuggestion>,
    pub standard: Vec<TagEntry>,
    pub opengraph: Vec<TagEntry>,
    pub twitter: Vec<TagEntry>,
}

impl ImprovementsView {
    fn new(improvements: &Improvements, current_title: Option<&str>) -> Self {
        let title = improvements
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|suggested| TitleSuggestion {
                current: current_title
                    .filter(|t| !t.is_empty())
                    .unwrap_or(NOT_FOUND)
                    .to_string(),
                suggested: suggested.to_string(),
            });
        Self {
            title,
            standard: improvements.standard.iter().map(TagEntry::from).collect(),
            opengraph: improvements.opengraph.iter().map(TagEntry::from).collect(),
            twitter: improvements.twitter.iter().map(TagEntry::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.standard.is_empty()
            && self.opengraph.is_empty()
            && self.twitter.is_empty()
    }
}

/// Everything shown for an `/analyze` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoReport {
    pub url: Option<String>,
    pub preview: Option<SocialPreview>,
    pub groups: Vec<MetaTagGroup>,
    pub analysis: AnalysisView,
    /// `None` when the backend suggested nothing
    pub improvements: Option<ImprovementsView>,
}

impl SeoReport {
    pub fn from_result(result: &SeoAnalysisResult, priority: PreviewPriority) -> Self {
        let current = &result.current_data;
        let score = result.analysis.score();
        let improvements = result
            .analysis
            .improvements
            .as_ref()
            .map(|i| ImprovementsView::new(i, current.title.as_deref()))
            .filter(|view| !view.is_empty());

        Self {
            url: result.url.clone(),
            preview: current
                .preview_data
                .as_ref()
                .map(|data| project_preview(data, priority)),
            groups: group_meta_tags(&current.meta_tags),
            analysis: AnalysisView {
                score,
                band: SeoBand::from_score(score),
                weaknesses: result.analysis.weaknesses.clone(),
            },
            improvements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> SeoAnalysisResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_result() {
        let report = SeoReport::from_result(
            &parse(json!({"current_data": {"title": "Home"}})),
            PreviewPriority::OPEN_GRAPH_FIRST,
        );
        assert_eq!(report.analysis.score, 0);
        assert_eq!(report.analysis.band, SeoBand::Red);
        assert!(report.analysis.weaknesses.is_empty());
        assert!(report.preview.is_none());
        assert!(report.improvements.is_none());
        assert_eq!(report.groups.len(), 4);
        assert!(report.groups.iter().all(|g| g.placeholder.is_some()));
    }

    #[test]
    fn test_score_is_clamped_before_banding() {
        let report = SeoReport::from_result(
            &parse(json!({"analysis": {"performance_score": 140}})),
            PreviewPriority::OPEN_GRAPH_FIRST,
        );
        assert_eq!(report.analysis.score, 100);
        assert_eq!(report.analysis.band, SeoBand::Green);

        let report = SeoReport::from_result(
            &parse(json!({"analysis": {"performance_score": 55}})),
            PreviewPriority::OPEN_GRAPH_FIRST,
        );
        assert_eq!(report.analysis.band, SeoBand::Yellow);
    }

    #[test]
    fn test_title_suggestion_uses_not_found() {
        let report = SeoReport::from_result(
            &parse(json!({
                "current_data": {"title": ""},
                "analysis": {"improvements": {"title": "Better Title | Brand"}}
            })),
            PreviewPriority::OPEN_GRAPH_FIRST,
        );
        let title = report.improvements.unwrap().title.unwrap();
        assert_eq!(title.current, "Not found");
        assert_eq!(title.suggested, "Better Title | Brand");
    }

    #[test]
    fn test_improvement_tags() {
        let report = SeoReport::from_result(
            &parse(json!({
                "current_data": {"title": "Old"},
                "analysis": {"improvements": {
                    "standard": [{"name": "description", "content": "Describe the page"}],
                    "opengraph": [{"property": "og:image", "content": "https://x.test/i.png"}]
                }}
            })),
            PreviewPriority::OPEN_GRAPH_FIRST,
        );
        let improvements = report.improvements.unwrap();
        assert!(improvements.title.is_none());
        assert_eq!(improvements.standard[0].key, "description");
        assert_eq!(improvements.opengraph[0].key, "og:image");
        assert!(improvements.twitter.is_empty());
    }

    #[test]
    fn test_empty_improvements_are_dropped() {
        let report = SeoReport::from_result(
            &parse(json!({"analysis": {"improvements": {"title": null, "standard": []}}})),
            PreviewPriority::OPEN_GRAPH_FIRST,
        );
        assert!(report.improvements.is_none());
    }
}
