//! Score banding.
//!
//! SEO scores and PageSpeed scores use different thresholds on the same
//! 0-100 scale, so they get distinct types.

use serde::Serialize;

use crate::config::{
    AUDIT_GOOD_THRESHOLD, AUDIT_NEEDS_IMPROVEMENT_THRESHOLD, PAGESPEED_GREEN_THRESHOLD,
    PAGESPEED_YELLOW_THRESHOLD, SEO_GREEN_THRESHOLD, SEO_YELLOW_THRESHOLD,
};

/// Traffic-light color used when rendering a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Green,
    Yellow,
    Red,
}

/// Band of an SEO performance score (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoBand {
    Green,
    Yellow,
    Red,
}

impl SeoBand {
    /// `>= 70` green, `>= 40` yellow, otherwise red.
    pub fn from_score(score: u8) -> Self {
        if score >= SEO_GREEN_THRESHOLD {
            SeoBand::Green
        } else if score >= SEO_YELLOW_THRESHOLD {
            SeoBand::Yellow
        } else {
            SeoBand::Red
        }
    }

    pub fn color(&self) -> BandColor {
        match self {
            SeoBand::Green => BandColor::Green,
            SeoBand::Yellow => BandColor::Yellow,
            SeoBand::Red => BandColor::Red,
        }
    }
}

/// Band of an overall PageSpeed performance score (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageSpeedBand {
    Excellent,
    NeedsImprovement,
    Poor,
}

impl PageSpeedBand {
    /// `>= 90` excellent, `>= 50` needs improvement, otherwise poor.
    pub fn from_score(score: u8) -> Self {
        if score >= PAGESPEED_GREEN_THRESHOLD {
            PageSpeedBand::Excellent
        } else if score >= PAGESPEED_YELLOW_THRESHOLD {
            PageSpeedBand::NeedsImprovement
        } else {
            PageSpeedBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageSpeedBand::Excellent => "Excellent",
            PageSpeedBand::NeedsImprovement => "Needs Improvement",
            PageSpeedBand::Poor => "Poor",
        }
    }

    pub fn color(&self) -> BandColor {
        match self {
            PageSpeedBand::Excellent => BandColor::Green,
            PageSpeedBand::NeedsImprovement => BandColor::Yellow,
            PageSpeedBand::Poor => BandColor::Red,
        }
    }
}

/// Rating of a single Lighthouse audit score (0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditRating {
    Good,
    NeedsImprovement,
    Poor,
}

impl AuditRating {
    pub fn from_score(score: f64) -> Self {
        if score >= AUDIT_GOOD_THRESHOLD {
            AuditRating::Good
        } else if score >= AUDIT_NEEDS_IMPROVEMENT_THRESHOLD {
            AuditRating::NeedsImprovement
        } else {
            AuditRating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuditRating::Good => "Good",
            AuditRating::NeedsImprovement => "Needs Improvement",
            AuditRating::Poor => "Poor",
        }
    }

    pub fn color(&self) -> BandColor {
        match self {
            AuditRating::Good => BandColor::Green,
            AuditRating::NeedsImprovement => BandColor::Yellow,
            AuditRating::Poor => BandColor::Red,
        }
    }
}

/// Chrome UX Report category of a field metric.
///
/// Anything other than `FAST` and `AVERAGE` (normally `SLOW`) is treated as slow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCategory(String);

impl FieldCategory {
    pub fn new(category: &str) -> Self {
        Self(category.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn color(&self) -> BandColor {
        match self.0.as_str() {
            "FAST" => BandColor::Green,
            "AVERAGE" => BandColor::Yellow,
            _ => BandColor::Red,
        }
    }
}

/// Converts a Lighthouse 0.0-1.0 category score to the 0-100 display scale.
pub fn to_percent(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seo_band_boundaries() {
        assert_eq!(SeoBand::from_score(100), SeoBand::Green);
        assert_eq!(SeoBand::from_score(70), SeoBand::Green);
        assert_eq!(SeoBand::from_score(69), SeoBand::Yellow);
        assert_eq!(SeoBand::from_score(40), SeoBand::Yellow);
        assert_eq!(SeoBand::from_score(39), SeoBand::Red);
        assert_eq!(SeoBand::from_score(0), SeoBand::Red);
    }

    #[test]
    fn test_seo_band_every_score() {
        for s in 0..=100u8 {
            let expected = if s >= 70 {
                SeoBand::Green
            } else if s >= 40 {
                SeoBand::Yellow
            } else {
                SeoBand::Red
            };
            assert_eq!(SeoBand::from_score(s), expected, "score {}", s);
        }
    }

    #[test]
    fn test_pagespeed_band_boundaries() {
        assert_eq!(PageSpeedBand::from_score(90), PageSpeedBand::Excellent);
        assert_eq!(PageSpeedBand::from_score(89), PageSpeedBand::NeedsImprovement);
        assert_eq!(PageSpeedBand::from_score(50), PageSpeedBand::NeedsImprovement);
        assert_eq!(PageSpeedBand::from_score(49), PageSpeedBand::Poor);
        assert_eq!(PageSpeedBand::from_score(0), PageSpeedBand::Poor);
        assert_eq!(PageSpeedBand::from_score(90).label(), "Excellent");
        assert_eq!(PageSpeedBand::from_score(75).label(), "Needs Improvement");
        assert_eq!(PageSpeedBand::from_score(10).label(), "Poor");
    }

    #[test]
    fn test_bands_are_not_unified() {
        // 75 is green for SEO but only "Needs Improvement" for PageSpeed.
        assert_eq!(SeoBand::from_score(75).color(), BandColor::Green);
        assert_eq!(PageSpeedBand::from_score(75).color(), BandColor::Yellow);
        // 45 is yellow for SEO but poor for PageSpeed.
        assert_eq!(SeoBand::from_score(45).color(), BandColor::Yellow);
        assert_eq!(PageSpeedBand::from_score(45).color(), BandColor::Red);
    }

    #[test]
    fn test_audit_rating() {
        assert_eq!(AuditRating::from_score(1.0), AuditRating::Good);
        assert_eq!(AuditRating::from_score(0.9), AuditRating::Good);
        assert_eq!(AuditRating::from_score(0.89), AuditRating::NeedsImprovement);
        assert_eq!(AuditRating::from_score(0.5), AuditRating::NeedsImprovement);
        assert_eq!(AuditRating::from_score(0.49), AuditRating::Poor);
        assert_eq!(AuditRating::from_score(0.0).label(), "Poor");
    }

    #[test]
    fn test_field_category_colors() {
        assert_eq!(FieldCategory::new("FAST").color(), BandColor::Green);
        assert_eq!(FieldCategory::new("AVERAGE").color(), BandColor::Yellow);
        assert_eq!(FieldCategory::new("SLOW").color(), BandColor::Red);
        assert_eq!(FieldCategory::new("NONE").color(), BandColor::Red);
    }

    #[test]
    fn test_to_percent() {
        assert_eq!(to_percent(0.874), 87);
        assert_eq!(to_percent(0.875), 88);
        assert_eq!(to_percent(1.0), 100);
        assert_eq!(to_percent(0.0), 0);
    }
}
