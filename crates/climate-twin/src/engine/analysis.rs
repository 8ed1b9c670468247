use super::classification::RiskLevel;
use super::degradation::baseline_integrity;
use super::domain::{AssetType, ClimateEvent, EventType, InfrastructureAsset, SeverityLabel};
use super::failure::failure_probability;
use super::hazards;
use super::insights::{self, InsightContext};
use super::recommendations::{self, Recommendation};
use super::reinforcement::{self, Reinforcement, StressModifiers};
use super::scoring::{self, ComponentBreakdown};
use super::EngineError;
use serde::Serialize;
use tracing::debug;

/// Outcome of one asset/event analysis. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    pub asset_type: AssetType,
    pub event_type: EventType,
    pub stress_score: f64,
    pub risk_level: RiskLevel,
    pub failure_probability: f64,
    pub insights: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub component_breakdown: ComponentBreakdown,
    pub reinforcements_applied: Vec<Reinforcement>,
    pub estimated_total_cost: &'static str,
    pub executive_summary: String,
}

pub(crate) fn run(
    asset: &InfrastructureAsset,
    event: &ClimateEvent,
    reinforcements: &[Reinforcement],
) -> Result<AssessmentResult, EngineError> {
    event.validate()?;

    let reinforcements = reinforcement::dedupe(reinforcements);
    let modifiers = StressModifiers::for_reinforcements(
        asset.asset_type(),
        event.event_type(),
        &reinforcements,
    )?;

    let integrity = baseline_integrity(asset.age_years());
    let hazard = hazards::assess(asset, event);
    let stress = scoring::score(integrity, hazard, asset.age_years(), modifiers);
    let risk_level = RiskLevel::from_score(stress.value);
    let failure = failure_probability(
        stress.value,
        integrity,
        modifiers.condition,
        &asset.properties(),
    );

    let insights = insights::generate(&InsightContext {
        asset,
        event,
        integrity,
        hazard,
    });
    let recommendations =
        recommendations::recommend(asset.asset_type(), event.event_type(), risk_level);
    let estimated_total_cost = recommendations::estimate_total_cost(&recommendations);
    let executive_summary = recommendations::executive_summary(
        risk_level,
        stress.value,
        failure,
        &insights,
        &recommendations,
    );

    debug!(
        asset_type = asset.asset_type().key(),
        event_type = event.event_type().key(),
        severity = event.severity_label().map_or("unlabelled", SeverityLabel::label),
        stress_score = stress.value,
        risk_level = risk_level.key(),
        failure_probability = failure,
        reinforcements = reinforcements.len(),
        "assessment computed"
    );

    Ok(AssessmentResult {
        asset_id: asset.id().map(str::to_string),
        asset_type: asset.asset_type(),
        event_type: event.event_type(),
        stress_score: stress.value,
        risk_level,
        failure_probability: failure,
        insights,
        recommendations,
        component_breakdown: stress.breakdown,
        reinforcements_applied: reinforcements,
        estimated_total_cost,
        executive_summary,
    })
}
