//! Failure probability from stress, adjusted for material quality and age.

use super::domain::MaterialProperties;

pub const LOGISTIC_STEEPNESS: f64 = 0.08;
pub const LOGISTIC_MIDPOINT: f64 = 50.0;

const BASE_FACTOR: f64 = 0.18;
const DEGRADATION_WEIGHT: f64 = 0.42;
const WEAKNESS_WEIGHT: f64 = 0.2;

/// Tensile strength (MPa) treated as best-in-class.
const REFERENCE_TENSILE_MPA: f64 = 600.0;

/// Logistic curve over the stress score, in percent.
pub fn logistic(stress_score: f64) -> f64 {
    100.0 / (1.0 + (-LOGISTIC_STEEPNESS * (stress_score - LOGISTIC_MIDPOINT)).exp())
}

/// Material weakness in `[0, 1]`: 0 for an ideal material.
pub fn material_weakness(properties: &MaterialProperties) -> f64 {
    let tensile = (properties.tensile_strength_mpa / REFERENCE_TENSILE_MPA).min(1.0);
    let quality = 0.2 * tensile
        + 0.4 * properties.corrosion_resistance
        + 0.4 * properties.water_resistance;
    (1.0 - quality).clamp(0.0, 1.0)
}

/// Percent in `[0, 100]`. `condition_multiplier` scales the degradation term
/// the same way reinforcement scales the stress baseline.
pub fn failure_probability(
    stress_score: f64,
    integrity: f64,
    condition_multiplier: f64,
    properties: &MaterialProperties,
) -> f64 {
    let degradation = (1.0 - integrity) * condition_multiplier;
    let adjustment = BASE_FACTOR
        + DEGRADATION_WEIGHT * degradation
        + WEAKNESS_WEIGHT * material_weakness(properties);
    (logistic(stress_score) * adjustment).clamp(0.0, 100.0)
}
