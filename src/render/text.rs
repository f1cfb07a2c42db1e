//! Colored text cards.

use colored::Colorize;

use crate::report::{AnalysisReport, Section};
use crate::shaping::{
    BandColor, CoreWebVital, FieldMetricView, MetaTagGroup, Opportunity, PageSpeedDetails,
    PageSpeedReport, ScreenshotInfo, SeoReport, SocialPreview, TagEntry,
};
use crate::utils::{sanitize_display_text, sanitize_single_line, truncate_chars};

use super::RenderOptions;

const SCORE_BAR_WIDTH: usize = 30;
const DESCRIPTION_MAX_CHARS: usize = 240;
const INDENT: &str = "  ";

const NO_WEAKNESSES: &str = "No major weaknesses found";
const NO_IMPROVEMENTS: &str = "No specific improvements suggested";
const NO_PAGESPEED_DATA: &str = "No Data Available";
const NO_PAGESPEED_DATA_DETAIL: &str = "The PageSpeed Insights report data is empty or invalid.";
const NO_OPPORTUNITIES: &str = "No data available";

/// Applies colors only when enabled.
struct Painter {
    color: bool,
}

impl Painter {
    fn band(&self, text: &str, color: BandColor) -> String {
        if !self.color {
            return text.to_string();
        }
        match color {
            BandColor::Green => text.green().to_string(),
            BandColor::Yellow => text.yellow().to_string(),
            BandColor::Red => text.red().to_string(),
        }
    }

    fn title(&self, text: &str) -> String {
        if self.color {
            text.bold().bright_white().to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().truecolor(0xFF, 0x7B, 0x25).to_string()
        } else {
            text.to_string()
        }
    }

    fn muted(&self, text: &str) -> String {
        if self.color {
            text.dimmed().italic().to_string()
        } else {
            text.to_string()
        }
    }

    fn key(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Lines of one rendered report.
struct Out {
    painter: Painter,
    lines: Vec<String>,
}

impl Out {
    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", INDENT.repeat(depth), text.as_ref()));
    }

    fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    fn card(&mut self, title: &str) {
        self.blank();
        let rule = "─".repeat(title.chars().count().max(8));
        let heading = self.painter.heading(title);
        self.line(0, heading);
        self.line(0, rule);
    }

    fn entry(&mut self, depth: usize, entry: &TagEntry) {
        let key = self.painter.key(&format!("{}:", sanitize_single_line(&entry.key)));
        self.line(depth, format!("{key} {}", sanitize_single_line(&entry.value)));
    }

    fn muted(&mut self, depth: usize, text: &str) {
        let text = self.painter.muted(text);
        self.line(depth, text);
    }
}

/// A horizontal bar filled in proportion to `score` (0-100).
pub fn score_bar(score: u8, width: usize) -> String {
    let filled = (usize::from(score.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One-line summary of a failed analysis.
pub fn render_failure(label: &str, message: &str, options: RenderOptions) -> String {
    let painter = Painter {
        color: options.color,
    };
    painter.error(&format!("✗ {label} failed: {}", sanitize_single_line(message)))
}

/// Renders the whole report as text cards.
pub fn render_text(report: &AnalysisReport, options: RenderOptions) -> String {
    let mut out = Out {
        painter: Painter {
            color: options.color,
        },
        lines: Vec::new(),
    };
    let title = out
        .painter
        .title(&format!("Results for {}", sanitize_single_line(&report.url)));
    out.line(0, title);

    match &report.seo {
        Some(Section::Ready { report }) => seo_report(&mut out, report),
        Some(Section::Failed { message, .. }) => {
            out.blank();
            out.line(0, render_failure("SEO analysis", message, options));
        }
        None => {}
    }
    match &report.pagespeed {
        Some(Section::Ready { report }) => pagespeed_report(&mut out, report),
        Some(Section::Failed { message, .. }) => {
            out.blank();
            out.line(0, render_failure("PageSpeed analysis", message, options));
        }
        None => {}
    }

    let mut text = out.lines.join("\n");
    text.push('\n');
    text
}

fn seo_report(out: &mut Out, report: &SeoReport) {
    out.card("SEO Meta Results");

    if let Some(preview) = &report.preview {
        social_preview(out, preview);
    }
    for group in &report.groups {
        meta_tag_group(out, group);
    }

    out.card("SEO Analysis");
    let analysis = &report.analysis;
    let color = analysis.band.color();
    let bar = out
        .painter
        .band(&score_bar(analysis.score, SCORE_BAR_WIDTH), color);
    let score = out.painter.band(&format!("{}/100", analysis.score), color);
    out.line(1, format!("Performance Score  {score}"));
    out.line(1, bar);
    if analysis.weaknesses.is_empty() {
        out.muted(1, NO_WEAKNESSES);
    } else {
        out.line(1, "Weaknesses");
        for weakness in &analysis.weaknesses {
            let mark = out.painter.band("✗", BandColor::Red);
            out.line(2, format!("{mark} {}", sanitize_single_line(weakness)));
        }
    }

    out.card("Suggested Improvements");
    let Some(improvements) = &report.improvements else {
        out.muted(1, NO_IMPROVEMENTS);
        return;
    };
    if let Some(title) = &improvements.title {
        out.line(1, "Title");
        out.line(2, format!("Current:   {}", sanitize_single_line(&title.current)));
        out.line(2, format!("Suggested: {}", sanitize_single_line(&title.suggested)));
    }
    for (heading, entries) in [
        ("Standard Meta Tags", &improvements.standard),
        ("OpenGraph Tags", &improvements.opengraph),
        ("Twitter Tags", &improvements.twitter),
    ] {
        if entries.is_empty() {
            continue;
        }
        out.line(1, heading);
        for entry in entries {
            out.entry(2, entry);
        }
    }
}

fn social_preview(out: &mut Out, preview: &SocialPreview) {
    out.card("Social Preview");
    out.muted(1, &preview.hostname.to_uppercase());
    let title = out.painter.title(&sanitize_single_line(&preview.title));
    out.line(1, title);
    out.line(1, sanitize_single_line(&preview.description));
    match &preview.image {
        Some(image) => out.line(1, format!("Image: {}", sanitize_single_line(&image.value))),
        None => out.muted(1, "No image"),
    }

    for (heading, entries) in [
        ("OpenGraph", &preview.opengraph),
        ("Twitter", &preview.twitter),
    ] {
        if entries.is_empty() {
            continue;
        }
        out.line(1, heading);
        for entry in entries {
            out.entry(2, entry);
        }
    }
    for warning in &preview.warnings {
        let mark = out.painter.band("⚠", BandColor::Yellow);
        out.line(1, format!("{mark} {}", sanitize_single_line(warning)));
    }
    for notice in &preview.notices {
        out.line(1, format!("ℹ {}", sanitize_single_line(notice)));
    }
}

fn meta_tag_group(out: &mut Out, group: &MetaTagGroup) {
    out.card(&group.heading);
    if let Some(placeholder) = &group.placeholder {
        out.muted(1, placeholder);
        return;
    }
    for entry in &group.entries {
        out.entry(1, entry);
    }
}

fn pagespeed_report(out: &mut Out, report: &PageSpeedReport) {
    out.card("PageSpeed Insights");
    let details = match report {
        PageSpeedReport::NoData => {
            let title = out.painter.title(NO_PAGESPEED_DATA);
            out.line(1, title);
            out.muted(1, NO_PAGESPEED_DATA_DETAIL);
            return;
        }
        PageSpeedReport::Report(details) => details,
    };
    pagespeed_details(out, details);
}

fn pagespeed_details(out: &mut Out, details: &PageSpeedDetails) {
    if let Some(url) = &details.url {
        out.line(1, sanitize_single_line(url));
    }
    if let Some(analyzed_at) = &details.analyzed_at {
        out.muted(1, &format!("Analyzed on: {analyzed_at}"));
    }

    if let Some(banner) = &details.score {
        let color = banner.band.color();
        let score = out
            .painter
            .band(&format!("{} {}", banner.score, banner.band.label()), color);
        let bar = out
            .painter
            .band(&score_bar(banner.score, SCORE_BAR_WIDTH), color);
        out.blank();
        out.line(1, format!("Overall Performance Score  {score}"));
        out.line(1, bar);
    }

    out.card("Core Web Vitals");
    for vital in &details.vitals {
        core_web_vital(out, vital);
    }

    if let Some(screenshot) = &details.screenshot {
        out.card("Full Page Screenshot");
        out.line(1, describe_screenshot(screenshot));
    }

    if let Some(field_data) = &details.field_data {
        out.card("Field Data Summary");
        let overall = match &field_data.overall_category {
            Some(category) => out
                .painter
                .band(&sanitize_single_line(category.as_str()), category.color()),
            None => "N/A".to_string(),
        };
        out.line(1, format!("Overall Loading Experience: {overall}"));
        for metric in &field_data.metrics {
            out.blank();
            out.line(1, sanitize_single_line(&metric.label));
            field_metric(out, 2, metric, "User distribution:");
        }
    }

    out.card("Top Optimization Opportunities");
    if details.opportunities.is_empty() {
        out.muted(1, NO_OPPORTUNITIES);
    }
    for (index, opportunity) in details.opportunities.iter().enumerate() {
        self::opportunity(out, index + 1, opportunity);
    }
}

fn core_web_vital(out: &mut Out, vital: &CoreWebVital) {
    let rating = vital
        .rating
        .map(|r| format!("  {}", out.painter.band(r.label(), r.color())))
        .unwrap_or_default();
    out.line(
        1,
        format!("{:<26}{:>10}{rating}", vital.name, sanitize_single_line(vital.display_value())),
    );
    if let Some(field) = &vital.field {
        field_metric(out, 2, field, "Real-user distribution:");
    }
}

fn field_metric(out: &mut Out, depth: usize, metric: &FieldMetricView, distribution_label: &str) {
    let category = match &metric.category {
        Some(category) => out
            .painter
            .band(&sanitize_single_line(category.as_str()), category.color()),
        None => "N/A".to_string(),
    };
    let percentile = metric.percentile.as_deref().unwrap_or("N/A");
    out.line(depth, format!("Field: {category} (P{percentile})"));
    if !metric.distributions.is_empty() {
        out.muted(depth, distribution_label);
        for bucket in &metric.distributions {
            out.line(depth + 1, bucket);
        }
    }
}

fn describe_screenshot(screenshot: &ScreenshotInfo) -> String {
    let mut parts = Vec::new();
    if let Some(mime_type) = &screenshot.mime_type {
        parts.push(sanitize_single_line(mime_type));
    }
    if let (Some(width), Some(height)) = (screenshot.width, screenshot.height) {
        parts.push(format!("{width}x{height}"));
    }
    parts.push(format_bytes(screenshot.bytes));
    parts.join(", ")
}

fn format_bytes(bytes: usize) -> String {
    match bytes {
        b if b >= 1024 * 1024 => format!("{:.1} MiB", b as f64 / (1024.0 * 1024.0)),
        b if b >= 1024 => format!("{:.1} KiB", b as f64 / 1024.0),
        b => format!("{b} B"),
    }
}

fn opportunity(out: &mut Out, rank: usize, opportunity: &Opportunity) {
    let title = opportunity
        .title
        .as_deref()
        .map(sanitize_single_line)
        .unwrap_or_else(|| opportunity.audit_id.clone());
    let title = out.painter.band(&title, BandColor::Yellow);
    out.blank();
    out.line(1, format!("{rank}. {title}"));
    if let Some(description) = &opportunity.description {
        let description = truncate_chars(&sanitize_display_text(description), DESCRIPTION_MAX_CHARS);
        for line in description.lines() {
            out.line(2, line);
        }
    }
    if let Some(display_value) = &opportunity.display_value {
        out.line(2, sanitize_single_line(display_value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PageSpeedResult, SeoAnalysisResult};
    use crate::shaping::PreviewPriority;
    use serde_json::json;

    const PLAIN: RenderOptions = RenderOptions { color: false };

    fn seo_section(value: serde_json::Value) -> Option<Section<SeoReport>> {
        let result: SeoAnalysisResult = serde_json::from_value(value).unwrap();
        Some(Section::Ready {
            report: SeoReport::from_result(&result, PreviewPriority::OPEN_GRAPH_FIRST),
        })
    }

    fn pagespeed_section(value: serde_json::Value) -> Option<Section<PageSpeedReport>> {
        let result: PageSpeedResult = serde_json::from_value(value).unwrap();
        Some(Section::Ready {
            report: PageSpeedReport::from_result(&result),
        })
    }

    fn report(
        seo: Option<Section<SeoReport>>,
        pagespeed: Option<Section<PageSpeedReport>>,
    ) -> AnalysisReport {
        AnalysisReport {
            url: "https://example.com".to_string(),
            seo,
            pagespeed,
        }
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0, 10), "░".repeat(10));
        assert_eq!(score_bar(100, 10), "█".repeat(10));
        assert_eq!(score_bar(72, 10), format!("{}{}", "█".repeat(7), "░".repeat(3)));
        assert_eq!(score_bar(255, 4), "████");
    }

    #[test]
    fn test_seo_cards() {
        let text = render_text(
            &report(
                seo_section(json!({
                    "current_data": {
                        "title": "Home",
                        "meta_tags": {"standard": [{"name": "description", "content": "A page"}]}
                    },
                    "analysis": {"performance_score": 72, "weaknesses": ["Missing og:image"]}
                })),
                None,
            ),
            PLAIN,
        );
        assert!(text.contains("Standard Tags"));
        assert!(text.contains("description: A page"));
        assert!(text.contains("No opengraph tags found"));
        assert!(text.contains("No twitter tags found"));
        assert!(text.contains("No other tags found"));
        assert!(text.contains("72/100"));
        assert!(text.contains("Missing og:image"));
        assert!(text.contains("No specific improvements suggested"));
        assert!(!text.contains("PageSpeed"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_no_weaknesses_placeholder() {
        let text = render_text(&report(seo_section(json!({})), None), PLAIN);
        assert!(text.contains("0/100"));
        assert!(text.contains("No major weaknesses found"));
    }

    #[test]
    fn test_tag_content_is_stripped_of_escapes() {
        let text = render_text(
            &report(
                seo_section(json!({
                    "current_data": {"meta_tags": {"other": [
                        {"name": "x", "content": "<b>bold</b>\u{1b}[31mred"}
                    ]}}
                })),
                None,
            ),
            PLAIN,
        );
        assert!(text.contains("x: <b>bold</b>[31mred"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_field_data_is_stripped_of_escapes() {
        let text = render_text(
            &report(
                None,
                pagespeed_section(json!({
                    "lighthouseResult": {"audits": {}},
                    "loadingExperience": {
                        "overall_category": "FAST\u{1b}[2J",
                        "metrics": {
                            "FIRST_CONTENTFUL_PAINT_MS": {"category": "FAST"},
                            "EVIL\u{1b}]0;x\u{7}_MS": {"category": "SLOW\u{9b}1m"}
                        }
                    }
                })),
            ),
            PLAIN,
        );
        assert!(text.contains("Overall Loading Experience: FAST[2J"));
        assert!(text.contains("Field: SLOW1m"));
        assert!(text.contains("First Contentful Paint Ms"));
        assert!(!text.contains('\u{1b}'));
        assert!(!text.contains('\u{9b}'));
        assert!(!text.contains('\u{7}'));
    }

    #[test]
    fn test_failed_section_has_no_cards() {
        let text = render_text(
            &report(
                Some(Section::Failed {
                    message: "invalid URL".to_string(),
                    http_status: Some(400),
                }),
                None,
            ),
            PLAIN,
        );
        assert!(text.contains("SEO analysis failed: invalid URL"));
        assert!(!text.contains("Standard Tags"));
        assert!(!text.contains("SEO Analysis"));
    }

    #[test]
    fn test_pagespeed_no_data_only() {
        let text = render_text(&report(None, pagespeed_section(json!({}))), PLAIN);
        assert!(text.contains("No Data Available"));
        assert!(!text.contains("Core Web Vitals"));
        assert!(!text.contains("Overall Performance Score"));
        assert!(!text.contains("Opportunities"));
    }

    #[test]
    fn test_pagespeed_cards() {
        let text = render_text(
            &report(
                None,
                pagespeed_section(json!({
                    "lighthouseResult": {
                        "requestedUrl": "https://example.com/",
                        "audits": {
                            "first-contentful-paint": {"score": 0.95, "displayValue": "0.9 s"},
                            "unused-javascript": {"title": "Reduce unused JavaScript", "score": 0.2,
                                "displayValue": "Potential savings of 120 KiB", "details": {"items": [{}]}}
                        },
                        "categories": {"performance": {"score": 0.0}}
                    },
                    "loadingExperience": {
                        "overall_category": "AVERAGE",
                        "metrics": {"FIRST_CONTENTFUL_PAINT_MS": {"category": "FAST", "percentile": 1200,
                            "distributions": [{"min": 0, "max": 1800, "proportion": 0.9}]}}
                    }
                })),
            ),
            PLAIN,
        );
        assert!(text.contains("Overall Performance Score  0 Poor"));
        assert!(text.contains("0.9 s  Good"));
        // Missing audits render N/A with no rating
        assert!(text.contains("Speed Index"));
        assert!(text.contains("N/A"));
        assert!(text.contains("Field: FAST (P1200)"));
        assert!(text.contains("0-1800ms: 90.0%"));
        assert!(text.contains("Overall Loading Experience: AVERAGE"));
        assert!(text.contains("First Contentful Paint Ms"));
        assert!(text.contains("1. Reduce unused JavaScript"));
        assert!(text.contains("Potential savings of 120 KiB"));
    }

    #[test]
    fn test_describe_screenshot() {
        let info = ScreenshotInfo {
            mime_type: Some("image/webp".to_string()),
            width: Some(412),
            height: Some(3000),
            bytes: 150 * 1024,
        };
        assert_eq!(describe_screenshot(&info), "image/webp, 412x3000, 150.0 KiB");
    }
}
