use super::Recommendation;
use crate::engine::classification::RiskLevel;

/// Insights quoted in the executive summary.
const SUMMARY_INSIGHT_LIMIT: usize = 2;

/// Rough budget band from the summed cost tiers (`$` = 1 ... `$$$$` = 4).
pub fn estimate_total_cost(recommendations: &[Recommendation]) -> &'static str {
    let total: u32 = recommendations
        .iter()
        .map(|recommendation| recommendation.cost_tier.level())
        .sum();

    match total {
        t if t < 5 => "$10,000 - $50,000",
        t if t < 10 => "$50,000 - $250,000",
        t if t < 15 => "$250,000 - $1,000,000",
        _ => "$1,000,000+",
    }
}

pub fn executive_summary(
    risk_level: RiskLevel,
    stress_score: f64,
    failure_probability: f64,
    insights: &[String],
    recommendations: &[Recommendation],
) -> String {
    let mut summary = format!(
        "Analysis reveals {} risk level with stress score of {:.1}/100 and {:.1}% failure probability. Assessment indicates {}.",
        risk_level.label(),
        stress_score,
        failure_probability,
        risk_level.description()
    );

    let findings: Vec<&str> = insights
        .iter()
        .take(SUMMARY_INSIGHT_LIMIT)
        .map(|insight| insight.trim_end_matches('.'))
        .collect();
    if !findings.is_empty() {
        summary.push_str(" Key findings: ");
        summary.push_str(&findings.join("; "));
        summary.push('.');
    }

    if let Some(top) = recommendations.first() {
        summary.push_str(&format!(
            " Top recommendation: {} ({}, {}).",
            top.action,
            top.priority.label(),
            top.timeline
        ));
    }

    summary
}
