use climate_twin::engine::{
    AssessmentResult, ClimatePreset, InfrastructureAsset, MaterialCatalogEntry,
    PortfolioScreening, ReinforcementCatalogEntry, RiskLevel, ScenarioComparison,
    ScenarioRanking,
};

pub(crate) fn render_assessment(asset: &InfrastructureAsset, result: &AssessmentResult) {
    println!(
        "{} ({}, {:.0} years) vs {}",
        asset.id().unwrap_or(result.asset_type.label()),
        asset.material().label(),
        asset.age_years(),
        result.event_type.label()
    );
    println!(
        "Stress score {:.1}/100 | risk {} | failure probability {:.1}%",
        result.stress_score,
        result.risk_level.label(),
        result.failure_probability
    );

    let breakdown = &result.component_breakdown;
    println!(
        "Breakdown: condition {:.1} + severity {:.1} + vulnerability {:.1}, x{:.3} age amplifier",
        breakdown.baseline, breakdown.severity, breakdown.vulnerability, breakdown.age_amplifier
    );
    if !result.reinforcements_applied.is_empty() {
        let applied: Vec<&str> = result
            .reinforcements_applied
            .iter()
            .map(|reinforcement| reinforcement.profile().label)
            .collect();
        println!("Reinforcements: {}", applied.join(", "));
    }

    if !result.insights.is_empty() {
        println!("Insights:");
        for insight in &result.insights {
            println!("  - {insight}");
        }
    }

    println!("Recommendations (est. {}):", result.estimated_total_cost);
    for recommendation in &result.recommendations {
        println!(
            "  [{}] {} ({}, {}): {}",
            recommendation.priority.label(),
            recommendation.action,
            recommendation.timeline,
            recommendation.cost_tier.symbol(),
            recommendation.description
        );
    }
    println!("Summary: {}", result.executive_summary);
}

pub(crate) fn render_comparison(comparison: &ScenarioComparison) {
    for outcome in [&comparison.baseline, &comparison.modified] {
        println!(
            "- {}: stress {:.1} ({}) | failure {:.1}% | cost x{:.1}",
            outcome.name,
            outcome.assessment.stress_score,
            outcome.assessment.risk_level.label(),
            outcome.assessment.failure_probability,
            outcome.cost_multiplier
        );
    }
    println!(
        "Risk reduction {:.1}% | failure reduction {:.1}% | cost multiplier {:.1} | cost-benefit {:.2} | winner: {}",
        comparison.risk_reduction_percent,
        comparison.failure_reduction_percent,
        comparison.cost_multiplier,
        comparison.cost_benefit_ratio,
        comparison.winner.key()
    );
    println!("{}", comparison.summary);
}

pub(crate) fn render_ranking(ranking: &ScenarioRanking) {
    for entry in &ranking.scenarios {
        let reduction = entry
            .risk_reduction_percent
            .map(|value| format!("{value:+.1}%"))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "{}. {} | stress {:.1} ({}) | cost x{:.1} | vs first {}",
            entry.rank,
            entry.outcome.name,
            entry.outcome.assessment.stress_score,
            entry.outcome.assessment.risk_level.label(),
            entry.outcome.cost_multiplier,
            reduction
        );
    }
    println!("{}", ranking.summary);
}

pub(crate) fn render_screening(screening: &PortfolioScreening, top: Option<usize>) {
    println!(
        "Screened {} assets against {} ({} rows rejected)",
        screening.screened,
        screening.event_type.label(),
        screening.rejected.len()
    );
    let tiers: Vec<String> = RiskLevel::ordered()
        .into_iter()
        .rev()
        .map(|level| format!("{} {}", level.label(), screening.count(level)))
        .collect();
    println!("Tiers: {}", tiers.join(" | "));

    let limit = top.unwrap_or(screening.results.len());
    for entry in screening.results.iter().take(limit) {
        let assessment = &entry.assessment;
        println!(
            "  line {:>4} {:<12} {:<9} stress {:>5.1} ({}) failure {:>5.1}%{}",
            entry.line,
            assessment.asset_id.as_deref().unwrap_or("-"),
            assessment.asset_type.key(),
            assessment.stress_score,
            assessment.risk_level.label(),
            assessment.failure_probability,
            entry
                .location
                .as_deref()
                .map(|location| format!(" @ {location}"))
                .unwrap_or_default()
        );
    }

    for rejected in &screening.rejected {
        println!("  rejected line {}: {}", rejected.line, rejected.reason);
    }
}

pub(crate) fn render_materials(catalog: &[MaterialCatalogEntry]) {
    println!("Materials:");
    for entry in catalog {
        let properties = &entry.properties;
        println!(
            "  {:<20} tensile {:>5.0} MPa | compressive {:>5.0} MPa | expansion {:.1e}/°C | corrosion {:.1} | water {:.1} | wind {:.1}",
            entry.key,
            properties.tensile_strength_mpa,
            properties.compressive_strength_mpa,
            properties.thermal_expansion_per_c,
            properties.corrosion_resistance,
            properties.water_resistance,
            properties.wind_resistance
        );
    }
}

pub(crate) fn render_reinforcements(catalog: &[ReinforcementCatalogEntry]) {
    println!("Reinforcements:");
    for entry in catalog {
        let profile = &entry.profile;
        let hazards: Vec<&str> = profile.hazards.iter().map(|hazard| hazard.key()).collect();
        println!(
            "  {:<26} {:<8} hazards [{}] | vulnerability x{:.2} | exposure x{:.2} | condition x{:.2} | cost +{:.1}",
            entry.reinforcement.key(),
            profile.asset_type.key(),
            hazards.join(", "),
            profile.vulnerability_multiplier,
            profile.exposure_multiplier,
            profile.condition_multiplier,
            profile.cost_weight
        );
    }
}

pub(crate) fn render_presets(presets: &[ClimatePreset]) {
    println!("Climate scenarios:");
    for preset in presets {
        println!(
            "  {:<18} {:<10} {}: {}",
            preset.id,
            preset.event.event_type().key(),
            preset.name,
            preset.description
        );
    }
}
