//! Mitigation recommendations keyed by asset type, event type, and risk tier.

mod rules;
mod summary;

pub use summary::{estimate_total_cost, executive_summary};

use super::classification::RiskLevel;
use super::domain::{AssetType, EventType};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
        }
    }
}

/// Relative implementation cost, `$` to `$$$$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CostTier {
    #[serde(rename = "$")]
    Low,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    High,
    #[serde(rename = "$$$$")]
    VeryHigh,
}

impl CostTier {
    pub const fn symbol(self) -> &'static str {
        match self {
            CostTier::Low => "$",
            CostTier::Moderate => "$$",
            CostTier::High => "$$$",
            CostTier::VeryHigh => "$$$$",
        }
    }

    pub const fn level(self) -> u32 {
        match self {
            CostTier::Low => 1,
            CostTier::Moderate => 2,
            CostTier::High => 3,
            CostTier::VeryHigh => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: &'static str,
    pub description: &'static str,
    pub timeline: &'static str,
    pub cost_tier: CostTier,
}

/// Ranked recommendations: CRITICAL first, then HIGH, then MEDIUM, keeping
/// declaration order within a priority. Never empty.
pub fn recommend(
    asset_type: AssetType,
    event_type: EventType,
    risk_level: RiskLevel,
) -> Vec<Recommendation> {
    let mut targeted_match = false;
    let mut selected: Vec<Recommendation> = rules::RECOMMENDATION_RULES
        .iter()
        .filter(|rule| rule.matches(asset_type, event_type, risk_level))
        .inspect(|rule| targeted_match |= rule.is_targeted())
        .map(|rule| rule.recommendation)
        .collect();

    if !targeted_match {
        selected.extend(
            rules::FALLBACK_RECOMMENDATIONS
                .iter()
                .filter(|(level, _)| *level == risk_level)
                .map(|(_, recommendation)| *recommendation),
        );
    }

    // sort_by_key is stable, so declaration order survives within a priority.
    selected.sort_by_key(|recommendation| recommendation.priority);
    selected
}
