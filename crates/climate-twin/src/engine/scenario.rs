//! What-if comparison between a baseline configuration and a modified one.

use super::analysis::{self, AssessmentResult};
use super::domain::{ClimateEvent, InfrastructureAsset};
use super::reinforcement::{self, Reinforcement};
use super::EngineError;
use serde::{Deserialize, Serialize};

/// One configuration to assess: an asset, the event it faces, and any
/// strategies applied on top. Repeated strategies count once.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub asset: InfrastructureAsset,
    pub event: ClimateEvent,
    reinforcements: Vec<Reinforcement>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, asset: InfrastructureAsset, event: ClimateEvent) -> Self {
        Self {
            name: name.into(),
            asset,
            event,
            reinforcements: Vec::new(),
        }
    }

    pub fn with_reinforcements(mut self, reinforcements: &[Reinforcement]) -> Self {
        let mut combined = self.reinforcements;
        combined.extend_from_slice(reinforcements);
        self.reinforcements = reinforcement::dedupe(&combined);
        self
    }

    pub fn reinforcements(&self) -> &[Reinforcement] {
        &self.reinforcements
    }

    /// Cost relative to the untouched asset.
    pub fn cost_multiplier(&self) -> f64 {
        reinforcement::cost_multiplier(&self.reinforcements)
    }

    pub fn assess(&self) -> Result<AssessmentResult, EngineError> {
        analysis::run(&self.asset, &self.event, &self.reinforcements)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Baseline,
    Modified,
}

impl Winner {
    pub const fn key(self) -> &'static str {
        match self {
            Winner::Baseline => "baseline",
            Winner::Modified => "modified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub cost_multiplier: f64,
    pub assessment: AssessmentResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioComparison {
    pub baseline: ScenarioOutcome,
    pub modified: ScenarioOutcome,
    pub risk_reduction_percent: f64,
    pub failure_reduction_percent: f64,
    pub cost_multiplier: f64,
    pub cost_benefit_ratio: f64,
    pub winner: Winner,
    pub summary: String,
}

impl ScenarioComparison {
    pub fn run(baseline: &Scenario, modified: &Scenario) -> Result<Self, EngineError> {
        let baseline_outcome = ScenarioOutcome {
            name: baseline.name.clone(),
            cost_multiplier: baseline.cost_multiplier(),
            assessment: baseline.assess()?,
        };
        let modified_outcome = ScenarioOutcome {
            name: modified.name.clone(),
            cost_multiplier: modified.cost_multiplier(),
            assessment: modified.assess()?,
        };
        Self::from_outcomes(baseline_outcome, modified_outcome)
    }

    /// Derive the comparison metrics. A zero baseline stress leaves the
    /// reduction ratio undefined and is reported as `DegenerateBaseline`.
    pub fn from_outcomes(
        baseline: ScenarioOutcome,
        modified: ScenarioOutcome,
    ) -> Result<Self, EngineError> {
        let baseline_stress = baseline.assessment.stress_score;
        if baseline_stress <= 0.0 {
            return Err(EngineError::DegenerateBaseline);
        }

        let modified_stress = modified.assessment.stress_score;
        let risk_reduction_percent = (baseline_stress - modified_stress) / baseline_stress * 100.0;

        let baseline_failure = baseline.assessment.failure_probability;
        let failure_reduction_percent = if baseline_failure > 0.0 {
            (baseline_failure - modified.assessment.failure_probability) / baseline_failure * 100.0
        } else {
            0.0
        };

        let cost_multiplier = modified.cost_multiplier / baseline.cost_multiplier;
        let cost_benefit_ratio = risk_reduction_percent / cost_multiplier;

        let winner = if modified_stress < baseline_stress
            || (modified_stress == baseline_stress
                && modified.cost_multiplier < baseline.cost_multiplier)
        {
            Winner::Modified
        } else {
            Winner::Baseline
        };

        let summary = comparison_summary(
            &baseline,
            &modified,
            winner,
            risk_reduction_percent,
            failure_reduction_percent,
            cost_multiplier,
            cost_benefit_ratio,
        );

        Ok(Self {
            baseline,
            modified,
            risk_reduction_percent,
            failure_reduction_percent,
            cost_multiplier,
            cost_benefit_ratio,
            winner,
            summary,
        })
    }
}

fn comparison_summary(
    baseline: &ScenarioOutcome,
    modified: &ScenarioOutcome,
    winner: Winner,
    risk_reduction_percent: f64,
    failure_reduction_percent: f64,
    cost_multiplier: f64,
    cost_benefit_ratio: f64,
) -> String {
    let preferred = match winner {
        Winner::Baseline => baseline,
        Winner::Modified => modified,
    };

    format!(
        "'{}' is preferred: stress {:.1} -> {:.1} ({:+.1}% risk reduction), failure probability {:.1}% -> {:.1}% ({:+.1}% reduction), at {:.1}x baseline cost (cost-benefit {:.2}).",
        preferred.name,
        baseline.assessment.stress_score,
        modified.assessment.stress_score,
        risk_reduction_percent,
        baseline.assessment.failure_probability,
        modified.assessment.failure_probability,
        failure_reduction_percent,
        cost_multiplier,
        cost_benefit_ratio
    )
}

/// Position of one scenario in an n-way ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedScenario {
    pub rank: usize,
    #[serde(flatten)]
    pub outcome: ScenarioOutcome,
    /// Stress reduction relative to the first scenario supplied; absent when
    /// that scenario scored zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reduction_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRanking {
    pub scenarios: Vec<RankedScenario>,
    pub summary: String,
}

/// Order scenarios by stress, cheaper first on ties. The first scenario is the
/// reference for reductions.
pub fn rank(scenarios: &[Scenario]) -> Result<ScenarioRanking, EngineError> {
    let mut outcomes = scenarios
        .iter()
        .map(|scenario| {
            Ok(ScenarioOutcome {
                name: scenario.name.clone(),
                cost_multiplier: scenario.cost_multiplier(),
                assessment: scenario.assess()?,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;
    let reference_stress = match outcomes.first() {
        Some(reference) => reference.assessment.stress_score,
        None => return Err(EngineError::NoScenarios),
    };

    outcomes.sort_by(|left, right| {
        left.assessment
            .stress_score
            .total_cmp(&right.assessment.stress_score)
            .then(left.cost_multiplier.total_cmp(&right.cost_multiplier))
    });

    let ranked: Vec<RankedScenario> = outcomes
        .into_iter()
        .enumerate()
        .map(|(index, outcome)| {
            let risk_reduction_percent = (reference_stress > 0.0).then(|| {
                (reference_stress - outcome.assessment.stress_score) / reference_stress * 100.0
            });
            RankedScenario {
                rank: index + 1,
                outcome,
                risk_reduction_percent,
            }
        })
        .collect();

    let summary = match ranked.first() {
        Some(best) => format!(
            "{} scenarios ranked; '{}' carries the lowest stress at {:.1}/100 ({}) for {:.1}x baseline cost.",
            ranked.len(),
            best.outcome.name,
            best.outcome.assessment.stress_score,
            best.outcome.assessment.risk_level.label(),
            best.outcome.cost_multiplier
        ),
        None => String::new(),
    };

    Ok(ScenarioRanking {
        scenarios: ranked,
        summary,
    })
}
