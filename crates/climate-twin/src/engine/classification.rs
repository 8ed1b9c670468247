use serde::{Deserialize, Serialize};

pub const MEDIUM_THRESHOLD: f64 = 30.0;
pub const HIGH_THRESHOLD: f64 = 60.0;
pub const CRITICAL_THRESHOLD: f64 = 85.0;

/// Ordinal risk tier. Ordering follows severity, so `>= RiskLevel::High` reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Bands are lower-bound inclusive: 30.0 is medium, 85.0 is critical.
    pub fn from_score(stress_score: f64) -> Self {
        match stress_score {
            s if s >= CRITICAL_THRESHOLD => RiskLevel::Critical,
            s if s >= HIGH_THRESHOLD => RiskLevel::High,
            s if s >= MEDIUM_THRESHOLD => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub const fn ordered() -> [RiskLevel; 4] {
        [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            RiskLevel::Low => "minimal structural concerns",
            RiskLevel::Medium => "moderate vulnerability requiring preventive measures",
            RiskLevel::High => "significant structural risk requiring urgent intervention",
            RiskLevel::Critical => "critical failure risk demanding immediate action",
        }
    }

    /// A representative score inside the band, used when exercising tier tables.
    pub const fn representative_score(self) -> f64 {
        match self {
            RiskLevel::Low => 15.0,
            RiskLevel::Medium => 45.0,
            RiskLevel::High => 72.0,
            RiskLevel::Critical => 92.0,
        }
    }
}
