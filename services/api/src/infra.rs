use climate_twin::engine::{
    preset_event, ClimateEvent, InfrastructureAsset, Reinforcement, Scenario, StressEngine,
};
use climate_twin::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use serde_json::Value;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: StressEngine,
    pub(crate) portfolio_row_limit: usize,
}

/// Either an inline event record or the id of a climate preset.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct EventSource {
    #[serde(default)]
    pub(crate) event: Option<Value>,
    #[serde(default, alias = "preset")]
    pub(crate) climate_scenario: Option<String>,
}

impl EventSource {
    pub(crate) fn is_empty(&self) -> bool {
        self.event.is_none() && self.climate_scenario.is_none()
    }

    pub(crate) fn resolve(self) -> Result<ClimateEvent, AppError> {
        match (self.event, self.climate_scenario) {
            (Some(event), _) => Ok(ClimateEvent::from_value(event)?),
            (None, Some(id)) => Ok(preset_event(&id)?),
            (None, None) => Err(AppError::Input(
                "either `event` or `climate_scenario` is required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ScenarioRequest {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) asset: Option<Value>,
    #[serde(flatten)]
    pub(crate) event: EventSource,
    #[serde(default)]
    pub(crate) reinforcements: Vec<Reinforcement>,
}

impl ScenarioRequest {
    /// Build the scenario, borrowing the asset and event of `fallback` for
    /// anything left out.
    pub(crate) fn into_scenario(
        self,
        default_name: &str,
        fallback: Option<&Scenario>,
    ) -> Result<Scenario, AppError> {
        let name = self.name.unwrap_or_else(|| default_name.to_string());

        let asset = match (self.asset, fallback) {
            (Some(asset), _) => InfrastructureAsset::from_value(asset)?,
            (None, Some(fallback)) => fallback.asset.clone(),
            (None, None) => return Err(AppError::Input(format!("{name}: `asset` is required"))),
        };

        let event = match (self.event.is_empty(), fallback) {
            (true, Some(fallback)) => fallback.event.clone(),
            _ => self.event.resolve()?,
        };

        Ok(Scenario::new(name, asset, event).with_reinforcements(&self.reinforcements))
    }
}

/// Baseline plus one modified configuration. The modified side inherits the
/// baseline asset and event unless it overrides them.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CompareRequest {
    pub(crate) baseline: ScenarioRequest,
    pub(crate) modified: ScenarioRequest,
}

impl CompareRequest {
    pub(crate) fn into_scenarios(self) -> Result<(Scenario, Scenario), AppError> {
        let baseline = self.baseline.into_scenario("Baseline", None)?;
        let modified = self.modified.into_scenario("Modified", Some(&baseline))?;
        Ok((baseline, modified))
    }
}

/// Several configurations ranked against the first.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RankRequest {
    pub(crate) scenarios: Vec<ScenarioRequest>,
}

impl RankRequest {
    pub(crate) fn into_scenarios(self) -> Result<Vec<Scenario>, AppError> {
        let mut built: Vec<Scenario> = Vec::with_capacity(self.scenarios.len());
        for (index, request) in self.scenarios.into_iter().enumerate() {
            let default_name = format!("Scenario {}", index + 1);
            let scenario = request.into_scenario(&default_name, built.first())?;
            built.push(scenario);
        }
        Ok(built)
    }
}

pub(crate) fn parse_reinforcement(raw: &str) -> Result<Reinforcement, String> {
    Reinforcement::from_key(raw).map_err(|err| err.to_string())
}
