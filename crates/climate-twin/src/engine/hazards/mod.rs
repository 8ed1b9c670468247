//! Per-hazard severity and asset vulnerability models.
//!
//! Both asset and hazard sets are closed, so dispatch is an exhaustive match
//! over every (asset, event) pairing.

mod flood;
mod heat;
mod wind;

pub use flood::{SCOUR_WEIGHT, SUBMERSION_WEIGHT, WATER_DAMAGE_WEIGHT};
pub use heat::THERMAL_EXPANSION_REFERENCE;

use super::domain::{AssetGeometry, ClimateEvent, InfrastructureAsset};
use serde::Serialize;

/// Normalized hazard intensity and asset susceptibility, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HazardAssessment {
    pub severity: f64,
    pub vulnerability: f64,
}

pub fn assess(asset: &InfrastructureAsset, event: &ClimateEvent) -> HazardAssessment {
    let properties = asset.properties();

    let (severity, vulnerability) = match event {
        ClimateEvent::Flood(flood) => {
            let drivers = flood::FloodDrivers::from_event(flood);
            let vulnerability = match asset.geometry() {
                AssetGeometry::Bridge(bridge) => {
                    flood::bridge_vulnerability(bridge, flood, &drivers, &properties)
                }
                AssetGeometry::Building(building) => {
                    flood::building_vulnerability(building, flood, &properties)
                }
                AssetGeometry::Road(road) => flood::road_vulnerability(road, flood, &properties),
            };
            (flood::severity(flood, &drivers), vulnerability)
        }
        ClimateEvent::Heatwave(heat) => {
            let vulnerability = match asset.geometry() {
                AssetGeometry::Bridge(bridge) => {
                    heat::bridge_vulnerability(bridge, heat, &properties)
                }
                AssetGeometry::Building(building) => {
                    heat::building_vulnerability(building, heat, &properties)
                }
                AssetGeometry::Road(road) => heat::road_vulnerability(road, heat, asset.material()),
            };
            (heat::severity(heat), vulnerability)
        }
        ClimateEvent::HighWind(wind) => {
            let vulnerability = match asset.geometry() {
                AssetGeometry::Bridge(bridge) => {
                    wind::bridge_vulnerability(bridge, wind, &properties)
                }
                AssetGeometry::Building(building) => {
                    wind::building_vulnerability(building, wind, &properties)
                }
                AssetGeometry::Road(road) => wind::road_vulnerability(road, wind),
            };
            (wind::severity(wind), vulnerability)
        }
    };

    HazardAssessment {
        severity,
        vulnerability,
    }
}
