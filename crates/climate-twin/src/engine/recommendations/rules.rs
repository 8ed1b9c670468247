use super::{CostTier, Priority, Recommendation};
use crate::engine::classification::RiskLevel;
use crate::engine::domain::{AssetType, EventType};

pub(super) struct RecommendationRule {
    asset: Option<AssetType>,
    event: Option<EventType>,
    min_level: RiskLevel,
    pub(super) recommendation: Recommendation,
}

impl RecommendationRule {
    pub(super) fn matches(
        &self,
        asset_type: AssetType,
        event_type: EventType,
        risk_level: RiskLevel,
    ) -> bool {
        self.asset.map_or(true, |asset| asset == asset_type)
            && self.event.map_or(true, |event| event == event_type)
            && risk_level >= self.min_level
    }

    /// Rules scoped to an asset or event count as a table hit.
    pub(super) fn is_targeted(&self) -> bool {
        self.asset.is_some() || self.event.is_some()
    }
}

#[allow(clippy::too_many_arguments)]
const fn rule(
    asset: Option<AssetType>,
    event: Option<EventType>,
    min_level: RiskLevel,
    priority: Priority,
    action: &'static str,
    description: &'static str,
    timeline: &'static str,
    cost_tier: CostTier,
) -> RecommendationRule {
    RecommendationRule {
        asset,
        event,
        min_level,
        recommendation: Recommendation {
            priority,
            action,
            description,
            timeline,
            cost_tier,
        },
    }
}

const fn advice(
    priority: Priority,
    action: &'static str,
    description: &'static str,
    timeline: &'static str,
    cost_tier: CostTier,
) -> Recommendation {
    Recommendation {
        priority,
        action,
        description,
        timeline,
        cost_tier,
    }
}

use AssetType::{Bridge, Building, Road};
use EventType::{Flood, Heatwave, HighWind};

pub(super) const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    rule(
        None,
        None,
        RiskLevel::Critical,
        Priority::Critical,
        "Immediate structural inspection required",
        "Engage certified structural engineers for an emergency assessment",
        "Within 24 hours",
        CostTier::VeryHigh,
    ),
    rule(
        None,
        None,
        RiskLevel::Critical,
        Priority::Critical,
        "Consider temporary closure or load restrictions",
        "Restrict access until safety can be verified",
        "Immediate",
        CostTier::Low,
    ),
    // bridge
    rule(
        Some(Bridge),
        Some(Flood),
        RiskLevel::Medium,
        Priority::High,
        "Install scour protection",
        "Add riprap or concrete aprons to prevent foundation undermining",
        "3-6 months",
        CostTier::High,
    ),
    rule(
        Some(Bridge),
        Some(Flood),
        RiskLevel::Medium,
        Priority::Medium,
        "Improve deck drainage",
        "Enhance deck drainage to prevent water accumulation",
        "2-4 months",
        CostTier::Moderate,
    ),
    rule(
        Some(Bridge),
        Some(Flood),
        RiskLevel::High,
        Priority::High,
        "Strengthen foundation",
        "Add supplemental piling or extend foundation depth",
        "6-12 months",
        CostTier::VeryHigh,
    ),
    rule(
        Some(Bridge),
        Some(HighWind),
        RiskLevel::Medium,
        Priority::High,
        "Add wind bracing",
        "Install cross-bracing and cable stays to reduce wind-induced vibration",
        "4-8 months",
        CostTier::High,
    ),
    rule(
        Some(Bridge),
        Some(HighWind),
        RiskLevel::Medium,
        Priority::Medium,
        "Aerodynamic modifications",
        "Install wind fairings or modify the deck profile",
        "6-10 months",
        CostTier::VeryHigh,
    ),
    // building
    rule(
        Some(Building),
        Some(Flood),
        RiskLevel::Medium,
        Priority::High,
        "Install flood barriers",
        "Deploy removable flood panels or permanent water barriers",
        "1-3 months",
        CostTier::Moderate,
    ),
    rule(
        Some(Building),
        Some(Flood),
        RiskLevel::Medium,
        Priority::Medium,
        "Waterproof basement",
        "Apply waterproofing membranes and sealants to the foundation",
        "2-4 months",
        CostTier::Moderate,
    ),
    rule(
        Some(Building),
        Some(Flood),
        RiskLevel::Medium,
        Priority::Medium,
        "Elevate critical systems",
        "Move electrical and HVAC equipment above the flood level",
        "3-6 months",
        CostTier::High,
    ),
    rule(
        Some(Building),
        Some(Heatwave),
        RiskLevel::Medium,
        Priority::High,
        "Upgrade cooling systems",
        "Install or enhance mechanical cooling capacity",
        "2-4 months",
        CostTier::High,
    ),
    rule(
        Some(Building),
        Some(Heatwave),
        RiskLevel::Medium,
        Priority::Medium,
        "Apply reflective roof coating",
        "Cool roof coating to reduce solar heat absorption",
        "1-2 months",
        CostTier::Moderate,
    ),
    rule(
        Some(Building),
        Some(Heatwave),
        RiskLevel::Medium,
        Priority::Medium,
        "Install thermal insulation",
        "Improve envelope insulation to reduce thermal stress",
        "3-5 months",
        CostTier::High,
    ),
    rule(
        Some(Building),
        Some(HighWind),
        RiskLevel::Medium,
        Priority::High,
        "Reinforce structural connections",
        "Strengthen roof-to-wall and wall-to-foundation connections",
        "3-6 months",
        CostTier::High,
    ),
    rule(
        Some(Building),
        Some(HighWind),
        RiskLevel::Medium,
        Priority::Medium,
        "Install impact-resistant windows",
        "Replace glazing with hurricane-rated systems",
        "2-4 months",
        CostTier::VeryHigh,
    ),
    // road
    rule(
        Some(Road),
        Some(Flood),
        RiskLevel::Medium,
        Priority::High,
        "Improve drainage infrastructure",
        "Upgrade storm drains, culverts, and retention basins",
        "4-8 months",
        CostTier::High,
    ),
    rule(
        Some(Road),
        Some(Flood),
        RiskLevel::Medium,
        Priority::Medium,
        "Elevate roadway sections",
        "Raise critical sections above projected flood levels",
        "6-12 months",
        CostTier::VeryHigh,
    ),
    rule(
        Some(Road),
        Some(Flood),
        RiskLevel::Medium,
        Priority::Medium,
        "Install flood warning systems",
        "Deploy water level sensors and automated signage",
        "2-3 months",
        CostTier::Moderate,
    ),
    rule(
        Some(Road),
        Some(Heatwave),
        RiskLevel::Medium,
        Priority::High,
        "Apply cool pavement treatment",
        "Use reflective sealants or light-colored aggregates",
        "3-5 months",
        CostTier::Moderate,
    ),
    rule(
        Some(Road),
        Some(Heatwave),
        RiskLevel::Medium,
        Priority::Medium,
        "Resurface with heat-resistant materials",
        "Use polymer-modified or heat-resistant asphalt mixes",
        "6-10 months",
        CostTier::High,
    ),
    rule(
        None,
        None,
        RiskLevel::High,
        Priority::High,
        "Install structural health monitoring system",
        "Deploy sensors to track stress, vibration, and deformation in real time",
        "1-2 months",
        CostTier::High,
    ),
];

pub(super) const FALLBACK_RECOMMENDATIONS: &[(RiskLevel, Recommendation)] = &[
    (
        RiskLevel::Low,
        advice(
            Priority::Medium,
            "Maintain routine inspection schedule",
            "Continue periodic inspections and log condition changes",
            "Annual",
            CostTier::Low,
        ),
    ),
    (
        RiskLevel::Low,
        advice(
            Priority::Medium,
            "Record baseline condition data",
            "Capture current condition measurements for future comparison",
            "3-6 months",
            CostTier::Low,
        ),
    ),
    (
        RiskLevel::Medium,
        advice(
            Priority::High,
            "Commission detailed vulnerability assessment",
            "Evaluate hazard-specific failure modes with a qualified engineer",
            "1-3 months",
            CostTier::Moderate,
        ),
    ),
    (
        RiskLevel::Medium,
        advice(
            Priority::Medium,
            "Develop hazard-specific maintenance plan",
            "Schedule preventive work targeting the exposed components",
            "3-6 months",
            CostTier::Moderate,
        ),
    ),
    (
        RiskLevel::High,
        advice(
            Priority::High,
            "Design targeted retrofit",
            "Scope structural upgrades for the governing hazard",
            "3-6 months",
            CostTier::High,
        ),
    ),
    (
        RiskLevel::High,
        advice(
            Priority::High,
            "Prepare event response plan",
            "Define closure triggers, inspection routes, and contacts for the next event",
            "1 month",
            CostTier::Low,
        ),
    ),
    (
        RiskLevel::Critical,
        advice(
            Priority::High,
            "Fast-track retrofit program",
            "Prioritize funding for structural strengthening ahead of the next season",
            "1-3 months",
            CostTier::VeryHigh,
        ),
    ),
];
