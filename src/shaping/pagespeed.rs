//! PageSpeed result view.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{PageSpeedResult, Screenshot};

use super::field_data::{summarize_field_data, FieldSummary};
use super::opportunities::{rank_opportunities, Opportunity};
use super::score::{to_percent, PageSpeedBand};
use super::vitals::{extract_core_web_vitals, CoreWebVital};

/// Overall performance score on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBanner {
    pub score: u8,
    pub band: PageSpeedBand,
}

/// Full-page screenshot metadata. The image itself is not drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenshotInfo {
    /// e.g. `image/webp`
    pub mime_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Approximate decoded size
    pub bytes: usize,
}

impl ScreenshotInfo {
    fn from_screenshot(screenshot: &Screenshot) -> Option<Self> {
        let data = screenshot.data.as_deref().filter(|d| !d.is_empty())?;
        let (mime_type, payload) = match data
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
        {
            Some((header, payload)) => (
                header.split(';').next().filter(|m| !m.is_empty()).map(str::to_string),
                payload,
            ),
            None => (None, data),
        };
        Some(Self {
            mime_type,
            width: screenshot.width,
            height: screenshot.height,
            bytes: payload.trim_end_matches('=').len() * 3 / 4,
        })
    }
}

/// Everything shown for a usable `/pagespeed` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSpeedDetails {
    /// Requested URL, falling back to the final URL
    pub url: Option<String>,
    /// Lighthouse run time in UTC, or the raw value when unparsable
    pub analyzed_at: Option<String>,
    /// Present whenever the category score is, including a score of 0
    pub score: Option<ScoreBanner>,
    pub vitals: Vec<CoreWebVital>,
    pub screenshot: Option<ScreenshotInfo>,
    pub field_data: Option<FieldSummary>,
    pub opportunities: Vec<Opportunity>,
}

/// A PageSpeed payload is usable only if it carries `lighthouseResult.audits`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageSpeedReport {
    NoData,
    Report(Box<PageSpeedDetails>),
}

impl PageSpeedReport {
    pub fn from_result(result: &PageSpeedResult) -> Self {
        let (Some(lighthouse), Some(audits)) = (result.lighthouse_result.as_ref(), result.audits())
        else {
            return PageSpeedReport::NoData;
        };

        let score = result.performance_score().map(|s| {
            let score = to_percent(s);
            ScoreBanner {
                score,
                band: PageSpeedBand::from_score(score),
            }
        });

        PageSpeedReport::Report(Box::new(PageSpeedDetails {
            url: lighthouse
                .requested_url
                .clone()
                .or_else(|| lighthouse.final_url.clone()),
            analyzed_at: lighthouse.fetch_time.as_deref().map(format_fetch_time),
            score,
            vitals: extract_core_web_vitals(audits, result.loading_experience.as_ref()),
            screenshot: lighthouse
                .full_page_screenshot
                .as_ref()
                .and_then(|f| f.screenshot.as_ref())
                .and_then(ScreenshotInfo::from_screenshot),
            field_data: result.loading_experience.as_ref().map(summarize_field_data),
            opportunities: rank_opportunities(audits),
        }))
    }
}

/// Formats an RFC 3339 timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn format_fetch_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        Err(e) => {
            log::debug!("Unparsable fetchTime {raw:?}: {e}");
            raw.to_string()
        }
    }
}
