//! Optimization opportunity ranking.

use serde::Serialize;

use crate::config::{MAX_OPPORTUNITIES, OPPORTUNITY_SCORE_CEILING};
use crate::models::{Audit, OrderedMap};

/// A failing audit worth fixing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub audit_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_value: Option<String>,
    pub score: f64,
}

fn qualifies(audit: &Audit) -> Option<f64> {
    let score = audit.score?;
    (score < OPPORTUNITY_SCORE_CEILING && audit.has_detail_items()).then_some(score)
}

/// The worst-scoring audits that carry detail items, worst first.
///
/// Keeps audits with a score below 0.9 and a `details.items` list, sorts them
/// ascending by score and returns at most three. Equal scores keep document
/// order. Fewer qualifying audits are returned as-is, never padded.
pub fn rank_opportunities(audits: &OrderedMap<Audit>) -> Vec<Opportunity> {
    let mut candidates: Vec<Opportunity> = audits
        .iter()
        .filter_map(|(id, audit)| {
            let score = qualifies(audit)?;
            Some(Opportunity {
                audit_id: audit.id.clone().unwrap_or_else(|| id.to_string()),
                title: audit.title.clone(),
                description: audit.description.clone(),
                display_value: audit.display_value.clone(),
                score,
            })
        })
        .collect();

    // `sort_by` is stable, so ties stay in document order.
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    candidates.truncate(MAX_OPPORTUNITIES);
    candidates
}
