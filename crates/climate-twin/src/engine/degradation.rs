//! Age-driven loss of structural integrity.

/// Characteristic lifetime of the exponential decay, in years.
pub const CHARACTERISTIC_LIFETIME_YEARS: f64 = 50.0;
/// Integrity never drops below this fraction from age alone.
pub const INTEGRITY_FLOOR: f64 = 0.3;

/// Remaining structural integrity in `[0.3, 1.0]`. Callers validate the age.
pub fn baseline_integrity(age_years: f64) -> f64 {
    (-age_years.max(0.0) / CHARACTERISTIC_LIFETIME_YEARS)
        .exp()
        .max(INTEGRITY_FLOOR)
}
