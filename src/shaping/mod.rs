//! Pure functions turning backend payloads into display-ready views.

pub mod field_data;
pub mod meta_tags;
pub mod opportunities;
pub mod pagespeed;
pub mod preview;
pub mod score;
pub mod seo;
pub mod vitals;

pub use field_data::{format_distribution, humanize_metric_key, FieldMetricView, FieldSummary};
pub use meta_tags::{group_meta_tags, MetaTagGroup, TagEntry};
pub use opportunities::{rank_opportunities, Opportunity};
pub use pagespeed::{PageSpeedDetails, PageSpeedReport, ScoreBanner, ScreenshotInfo};
pub use preview::{
    display_hostname, project_preview, Chosen, PreviewPriority, PreviewSource, SocialPreview,
};
pub use score::{AuditRating, BandColor, FieldCategory, PageSpeedBand, SeoBand};
pub use seo::{AnalysisView, ImprovementsView, SeoReport, TitleSuggestion};
pub use vitals::{extract_core_web_vitals, CoreWebVital, CORE_WEB_VITALS};
