//! Catalog of retrofit strategies and the stress modifiers they imply.

use super::domain::{AssetType, EventType};
use super::EngineError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reinforcement {
    #[serde(alias = "bridge_foundation_strengthening")]
    FoundationStrengthening,
    #[serde(alias = "bridge_deck_rehabilitation")]
    DeckRehabilitation,
    #[serde(alias = "bridge_wind_bracing")]
    WindBracing,
    #[serde(alias = "building_flood_barriers")]
    FloodBarriers,
    #[serde(alias = "building_cooling_upgrade")]
    CoolingUpgrade,
    #[serde(alias = "building_structural_reinforcement")]
    StructuralReinforcement,
    #[serde(alias = "road_drainage_improvement")]
    DrainageImprovement,
    #[serde(alias = "road_heat_resistant_surface")]
    HeatResistantSurface,
    #[serde(alias = "road_elevation")]
    RoadwayElevation,
}

/// Declared effect of a strategy. Exposure and vulnerability multipliers only
/// apply to the listed hazards; the condition multiplier always applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReinforcementProfile {
    pub label: &'static str,
    pub description: &'static str,
    pub asset_type: AssetType,
    pub hazards: &'static [EventType],
    pub vulnerability_multiplier: f64,
    pub exposure_multiplier: f64,
    pub condition_multiplier: f64,
    pub cost_weight: f64,
}

impl Reinforcement {
    pub const fn ordered() -> [Reinforcement; 9] {
        [
            Reinforcement::FoundationStrengthening,
            Reinforcement::DeckRehabilitation,
            Reinforcement::WindBracing,
            Reinforcement::FloodBarriers,
            Reinforcement::CoolingUpgrade,
            Reinforcement::StructuralReinforcement,
            Reinforcement::DrainageImprovement,
            Reinforcement::HeatResistantSurface,
            Reinforcement::RoadwayElevation,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Reinforcement::FoundationStrengthening => "foundation_strengthening",
            Reinforcement::DeckRehabilitation => "deck_rehabilitation",
            Reinforcement::WindBracing => "wind_bracing",
            Reinforcement::FloodBarriers => "flood_barriers",
            Reinforcement::CoolingUpgrade => "cooling_upgrade",
            Reinforcement::StructuralReinforcement => "structural_reinforcement",
            Reinforcement::DrainageImprovement => "drainage_improvement",
            Reinforcement::HeatResistantSurface => "heat_resistant_surface",
            Reinforcement::RoadwayElevation => "roadway_elevation",
        }
    }

    /// Resolve a strategy key. The asset-prefixed spellings
    /// (`bridge_wind_bracing`, `road_elevation`) are accepted too.
    pub fn from_key(raw: &str) -> Result<Self, EngineError> {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        let unprefixed = ["bridge_", "building_"]
            .iter()
            .find_map(|prefix| normalized.strip_prefix(prefix))
            .unwrap_or(normalized.as_str());
        let unprefixed = match unprefixed {
            "road_elevation" => "roadway_elevation",
            other => other.strip_prefix("road_").unwrap_or(other),
        };

        Reinforcement::ordered()
            .into_iter()
            .find(|reinforcement| reinforcement.key() == unprefixed)
            .ok_or_else(|| EngineError::InvalidAsset(format!("unknown reinforcement '{raw}'")))
    }

    pub const fn profile(self) -> ReinforcementProfile {
        match self {
            Reinforcement::FoundationStrengthening => ReinforcementProfile {
                label: "Foundation Strengthening",
                description: "Supplemental piling and scour protection around piers",
                asset_type: AssetType::Bridge,
                hazards: &[EventType::Flood, EventType::HighWind],
                vulnerability_multiplier: 0.7,
                exposure_multiplier: 1.0,
                condition_multiplier: 0.85,
                cost_weight: 1.8,
            },
            Reinforcement::DeckRehabilitation => ReinforcementProfile {
                label: "Deck Rehabilitation",
                description: "Replace deteriorated deck sections and restore deck drainage",
                asset_type: AssetType::Bridge,
                hazards: &[EventType::Flood],
                vulnerability_multiplier: 1.0,
                exposure_multiplier: 0.8,
                condition_multiplier: 0.7,
                cost_weight: 1.4,
            },
            Reinforcement::WindBracing => ReinforcementProfile {
                label: "Wind Bracing",
                description: "Cross-bracing and cable dampers to limit wind-induced vibration",
                asset_type: AssetType::Bridge,
                hazards: &[EventType::HighWind],
                vulnerability_multiplier: 0.5,
                exposure_multiplier: 1.0,
                condition_multiplier: 0.9,
                cost_weight: 1.2,
            },
            Reinforcement::FloodBarriers => ReinforcementProfile {
                label: "Flood Barrier System",
                description: "Removable flood panels with foundation waterproofing",
                asset_type: AssetType::Building,
                hazards: &[EventType::Flood],
                vulnerability_multiplier: 0.5,
                exposure_multiplier: 1.0,
                condition_multiplier: 0.9,
                cost_weight: 0.9,
            },
            Reinforcement::CoolingUpgrade => ReinforcementProfile {
                label: "Enhanced Cooling",
                description: "Upgraded HVAC capacity with reflective roof coating",
                asset_type: AssetType::Building,
                hazards: &[EventType::Heatwave],
                vulnerability_multiplier: 0.4,
                exposure_multiplier: 1.0,
                condition_multiplier: 0.95,
                cost_weight: 1.1,
            },
            Reinforcement::StructuralReinforcement => ReinforcementProfile {
                label: "Structural Reinforcement",
                description: "Strengthened roof-to-wall and wall-to-foundation connections",
                asset_type: AssetType::Building,
                hazards: &[EventType::HighWind],
                vulnerability_multiplier: 0.55,
                exposure_multiplier: 1.0,
                condition_multiplier: 0.85,
                cost_weight: 1.5,
            },
            Reinforcement::DrainageImprovement => ReinforcementProfile {
                label: "Drainage Upgrade",
                description: "Larger storm drains, culverts, and retention capacity",
                asset_type: AssetType::Road,
                hazards: &[EventType::Flood],
                vulnerability_multiplier: 0.45,
                exposure_multiplier: 1.0,
                condition_multiplier: 0.9,
                cost_weight: 1.0,
            },
            Reinforcement::HeatResistantSurface => ReinforcementProfile {
                label: "Heat-Resistant Surfacing",
                description: "Cool pavement treatment over polymer-modified asphalt",
                asset_type: AssetType::Road,
                hazards: &[EventType::Heatwave],
                vulnerability_multiplier: 0.5,
                exposure_multiplier: 1.0,
                condition_multiplier: 0.9,
                cost_weight: 0.8,
            },
            Reinforcement::RoadwayElevation => ReinforcementProfile {
                label: "Roadway Elevation",
                description: "Raise critical sections above projected flood levels",
                asset_type: AssetType::Road,
                hazards: &[EventType::Flood],
                vulnerability_multiplier: 0.3,
                exposure_multiplier: 1.0,
                condition_multiplier: 0.85,
                cost_weight: 2.0,
            },
        }
    }
}

/// Multipliers applied to the three stress terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StressModifiers {
    pub condition: f64,
    pub exposure: f64,
    pub vulnerability: f64,
}

impl Default for StressModifiers {
    fn default() -> Self {
        Self {
            condition: 1.0,
            exposure: 1.0,
            vulnerability: 1.0,
        }
    }
}

impl StressModifiers {
    /// Fold the declared strategies into one set of multipliers.
    pub fn for_reinforcements(
        asset_type: AssetType,
        event_type: EventType,
        reinforcements: &[Reinforcement],
    ) -> Result<Self, EngineError> {
        let mut modifiers = Self::default();
        for reinforcement in reinforcements {
            let profile = reinforcement.profile();
            if profile.asset_type != asset_type {
                return Err(EngineError::InvalidAsset(format!(
                    "{} applies to {} assets, not {}",
                    reinforcement.key(),
                    profile.asset_type.key(),
                    asset_type.key()
                )));
            }

            modifiers.condition *= profile.condition_multiplier;
            if profile.hazards.contains(&event_type) {
                modifiers.exposure *= profile.exposure_multiplier;
                modifiers.vulnerability *= profile.vulnerability_multiplier;
            }
        }
        Ok(modifiers)
    }
}

/// Cost relative to doing nothing: `1.0` plus the declared cost weights.
pub fn cost_multiplier(reinforcements: &[Reinforcement]) -> f64 {
    1.0 + reinforcements
        .iter()
        .map(|reinforcement| reinforcement.profile().cost_weight)
        .sum::<f64>()
}

/// Drop repeated strategies, keeping the first occurrence.
pub(crate) fn dedupe(reinforcements: &[Reinforcement]) -> Vec<Reinforcement> {
    let mut unique = Vec::with_capacity(reinforcements.len());
    for reinforcement in reinforcements {
        if !unique.contains(reinforcement) {
            unique.push(*reinforcement);
        }
    }
    unique
}

#[derive(Debug, Clone, Serialize)]
pub struct ReinforcementCatalogEntry {
    pub reinforcement: Reinforcement,
    #[serde(flatten)]
    pub profile: ReinforcementProfile,
}

pub fn reinforcement_catalog() -> Vec<ReinforcementCatalogEntry> {
    Reinforcement::ordered()
        .into_iter()
        .map(|reinforcement| ReinforcementCatalogEntry {
            reinforcement,
            profile: reinforcement.profile(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_flood_package_costs_four_point_two() {
        let package = [
            Reinforcement::FoundationStrengthening,
            Reinforcement::DeckRehabilitation,
        ];
        assert!((cost_multiplier(&package) - 4.2).abs() < 1e-9);
    }

    #[test]
    fn hazard_scoped_multipliers_skip_unrelated_events() {
        let modifiers = StressModifiers::for_reinforcements(
            AssetType::Building,
            EventType::Heatwave,
            &[Reinforcement::FloodBarriers],
        )
        .expect("building strategy");
        assert_eq!(modifiers.vulnerability, 1.0);
        assert_eq!(modifiers.exposure, 1.0);
        assert_eq!(modifiers.condition, 0.9);
    }

    #[test]
    fn multipliers_compound() {
        let modifiers = StressModifiers::for_reinforcements(
            AssetType::Bridge,
            EventType::Flood,
            &[
                Reinforcement::FoundationStrengthening,
                Reinforcement::DeckRehabilitation,
            ],
        )
        .expect("bridge strategies");
        assert!((modifiers.condition - 0.595).abs() < 1e-9);
        assert!((modifiers.vulnerability - 0.7).abs() < 1e-9);
        assert!((modifiers.exposure - 0.8).abs() < 1e-9);
    }

    #[test]
    fn rejects_strategy_for_other_asset_type() {
        let result = StressModifiers::for_reinforcements(
            AssetType::Road,
            EventType::Flood,
            &[Reinforcement::FloodBarriers],
        );
        assert!(matches!(result, Err(EngineError::InvalidAsset(_))));
    }

    #[test]
    fn accepts_prefixed_keys() {
        let parsed: Vec<Reinforcement> =
            serde_json::from_str(r#"["bridge_foundation_strengthening", "road_elevation"]"#)
                .expect("aliases parse");
        assert_eq!(
            parsed,
            vec![
                Reinforcement::FoundationStrengthening,
                Reinforcement::RoadwayElevation
            ]
        );
    }

    #[test]
    fn from_key_matches_serde_spellings() {
        for reinforcement in Reinforcement::ordered() {
            assert_eq!(
                Reinforcement::from_key(reinforcement.key()).expect("plain key"),
                reinforcement
            );
        }
        assert_eq!(
            Reinforcement::from_key("Building-Cooling-Upgrade").expect("prefixed key"),
            Reinforcement::CoolingUpgrade
        );
        assert_eq!(
            Reinforcement::from_key("road_drainage_improvement").expect("prefixed key"),
            Reinforcement::DrainageImprovement
        );
        assert_eq!(
            Reinforcement::from_key("road_elevation").expect("alias"),
            Reinforcement::RoadwayElevation
        );
        assert!(matches!(
            Reinforcement::from_key("moat"),
            Err(EngineError::InvalidAsset(_))
        ));
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let unique = dedupe(&[
            Reinforcement::WindBracing,
            Reinforcement::DeckRehabilitation,
            Reinforcement::WindBracing,
        ]);
        assert_eq!(
            unique,
            vec![Reinforcement::WindBracing, Reinforcement::DeckRehabilitation]
        );
    }
}
