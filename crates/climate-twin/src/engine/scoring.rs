//! Composite stress score.

use super::hazards::HazardAssessment;
use super::reinforcement::StressModifiers;
use serde::Serialize;

pub const INTEGRITY_WEIGHT: f64 = 0.3;
pub const SEVERITY_WEIGHT: f64 = 0.4;
pub const VULNERABILITY_WEIGHT: f64 = 0.3;

/// Age past which compounding deterioration amplifies the score.
pub const AGE_AMPLIFIER_ONSET_YEARS: f64 = 10.0;
pub const AGE_AMPLIFIER_RATE_PER_YEAR: f64 = 0.005;
pub const AGE_AMPLIFIER_CAP: f64 = 0.15;

pub const MAX_STRESS: f64 = 100.0;

/// Multiplier `>= 1` applied on top of the weighted terms.
pub fn age_amplifier(age_years: f64) -> f64 {
    let excess = (age_years - AGE_AMPLIFIER_ONSET_YEARS).max(0.0);
    1.0 + (excess * AGE_AMPLIFIER_RATE_PER_YEAR).min(AGE_AMPLIFIER_CAP)
}

/// Named contributions behind a score. Point values are on the 0-100 scale
/// before the age amplifier is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentBreakdown {
    pub integrity: f64,
    pub severity_factor: f64,
    pub vulnerability_factor: f64,
    pub baseline: f64,
    pub severity: f64,
    pub vulnerability: f64,
    pub age_amplifier: f64,
    pub modifiers: StressModifiers,
}

impl ComponentBreakdown {
    pub fn weighted_total(&self) -> f64 {
        self.baseline + self.severity + self.vulnerability
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StressScore {
    pub value: f64,
    pub breakdown: ComponentBreakdown,
}

pub fn score(
    integrity: f64,
    hazard: HazardAssessment,
    age_years: f64,
    modifiers: StressModifiers,
) -> StressScore {
    let baseline = MAX_STRESS * (1.0 - integrity) * modifiers.condition * INTEGRITY_WEIGHT;
    let severity = MAX_STRESS * hazard.severity * modifiers.exposure * SEVERITY_WEIGHT;
    let vulnerability =
        MAX_STRESS * hazard.vulnerability * modifiers.vulnerability * VULNERABILITY_WEIGHT;

    let breakdown = ComponentBreakdown {
        integrity,
        severity_factor: hazard.severity,
        vulnerability_factor: hazard.vulnerability,
        baseline,
        severity,
        vulnerability,
        age_amplifier: age_amplifier(age_years),
        modifiers,
    };

    let value = (breakdown.weighted_total() * breakdown.age_amplifier).clamp(0.0, MAX_STRESS);
    StressScore { value, breakdown }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((INTEGRITY_WEIGHT + SEVERITY_WEIGHT + VULNERABILITY_WEIGHT - 1.0).abs() < 1e-12);
    }

    #[test]
    fn amplifier_starts_after_onset_and_caps() {
        assert_eq!(age_amplifier(0.0), 1.0);
        assert_eq!(age_amplifier(AGE_AMPLIFIER_ONSET_YEARS), 1.0);
        assert!((age_amplifier(40.0) - 1.15).abs() < 1e-12);
        assert!((age_amplifier(120.0) - 1.15).abs() < 1e-12);
        assert!(age_amplifier(25.0) > 1.0 && age_amplifier(25.0) < 1.15);
    }

    #[test]
    fn score_is_clamped_to_scale() {
        let hazard = HazardAssessment {
            severity: 1.0,
            vulnerability: 1.0,
        };
        let result = score(0.3, hazard, 80.0, StressModifiers::default());
        assert_eq!(result.value, MAX_STRESS);
        assert!(result.breakdown.weighted_total() > MAX_STRESS / 1.15);
    }

    #[test]
    fn new_asset_with_no_hazard_scores_zero() {
        let hazard = HazardAssessment {
            severity: 0.0,
            vulnerability: 0.0,
        };
        let result = score(1.0, hazard, 0.0, StressModifiers::default());
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn modifiers_scale_their_terms() {
        let hazard = HazardAssessment {
            severity: 0.5,
            vulnerability: 0.5,
        };
        let modifiers = StressModifiers {
            condition: 0.5,
            exposure: 1.0,
            vulnerability: 0.5,
        };
        let plain = score(0.5, hazard, 5.0, StressModifiers::default());
        let modified = score(0.5, hazard, 5.0, modifiers);
        assert!((modified.breakdown.baseline - plain.breakdown.baseline / 2.0).abs() < 1e-9);
        assert_eq!(modified.breakdown.severity, plain.breakdown.severity);
        assert!(modified.value < plain.value);
    }
}
