//! Deterministic stress and scenario analysis.
//!
//! Data flows one way: age becomes integrity, the event becomes hazard
//! severity and vulnerability, those combine into a stress score, and the
//! score drives the risk tier, failure probability, insights, and
//! recommendations. [`StressEngine`] is the entry point; it carries no state,
//! so one instance can serve any number of concurrent callers.

pub mod analysis;
pub mod classification;
pub mod degradation;
pub mod domain;
mod error;
pub mod failure;
pub mod hazards;
pub mod insights;
pub mod portfolio;
pub mod presets;
pub mod recommendations;
pub mod reinforcement;
pub mod scenario;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use analysis::AssessmentResult;
pub use classification::RiskLevel;
pub use domain::{
    material_catalog, AssetType, ClimateEvent, EventType, InfrastructureAsset, Material,
    MaterialCatalogEntry,
};
pub use error::EngineError;
pub use portfolio::{AssetRegister, PortfolioImportError, PortfolioImporter, PortfolioScreening};
pub use presets::{climate_presets, preset_event, ClimatePreset};
pub use recommendations::{CostTier, Priority, Recommendation};
pub use reinforcement::{reinforcement_catalog, Reinforcement, ReinforcementCatalogEntry};
pub use scenario::{Scenario, ScenarioComparison, ScenarioRanking, Winner};

#[derive(Debug, Clone, Copy, Default)]
pub struct StressEngine;

impl StressEngine {
    pub const fn new() -> Self {
        Self
    }

    pub fn analyze(
        &self,
        asset: &InfrastructureAsset,
        event: &ClimateEvent,
    ) -> Result<AssessmentResult, EngineError> {
        analysis::run(asset, event, &[])
    }

    /// Analyze with retrofit strategies applied. Every strategy must target
    /// the asset's type.
    pub fn analyze_reinforced(
        &self,
        asset: &InfrastructureAsset,
        event: &ClimateEvent,
        reinforcements: &[Reinforcement],
    ) -> Result<AssessmentResult, EngineError> {
        analysis::run(asset, event, reinforcements)
    }

    pub fn compare(
        &self,
        baseline: &Scenario,
        modified: &Scenario,
    ) -> Result<ScenarioComparison, EngineError> {
        ScenarioComparison::run(baseline, modified)
    }

    pub fn rank(&self, scenarios: &[Scenario]) -> Result<ScenarioRanking, EngineError> {
        scenario::rank(scenarios)
    }

    pub fn screen_portfolio(
        &self,
        register: AssetRegister,
        event: &ClimateEvent,
    ) -> Result<PortfolioScreening, EngineError> {
        portfolio::screen(register, event)
    }
}
