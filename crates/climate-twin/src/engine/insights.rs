//! Ordered explanatory statements derived from the resolved quantities.
//!
//! Each rule is independent and evaluated in declaration order; a rule may only
//! append its own sentence.

use super::domain::{AssetGeometry, ClimateEvent, CoolingSystem, InfrastructureAsset};
use super::hazards::HazardAssessment;
use tracing::trace;

const BRIDGE_CLEARANCE_WARNING_M: f64 = 2.0;
const SURGE_WARNING_M: f64 = 2.0;
const DEGRADED_INTEGRITY: f64 = 0.6;

/// Quantities the rules may inspect.
pub struct InsightContext<'a> {
    pub asset: &'a InfrastructureAsset,
    pub event: &'a ClimateEvent,
    pub integrity: f64,
    pub hazard: HazardAssessment,
}

struct InsightRule {
    name: &'static str,
    render: fn(&InsightContext<'_>) -> Option<String>,
}

const INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        name: "asset_age",
        render: asset_age,
    },
    InsightRule {
        name: "event_severity",
        render: event_severity,
    },
    InsightRule {
        name: "structural_vulnerability",
        render: structural_vulnerability,
    },
    InsightRule {
        name: "bridge_clearance",
        render: bridge_clearance,
    },
    InsightRule {
        name: "basement_inundation",
        render: basement_inundation,
    },
    InsightRule {
        name: "material_response",
        render: material_response,
    },
    InsightRule {
        name: "passive_cooling",
        render: passive_cooling,
    },
    InsightRule {
        name: "storm_surge",
        render: storm_surge,
    },
    InsightRule {
        name: "degraded_integrity",
        render: degraded_integrity,
    },
];

pub fn generate(context: &InsightContext<'_>) -> Vec<String> {
    INSIGHT_RULES
        .iter()
        .filter_map(|rule| {
            let insight = (rule.render)(context)?;
            trace!(rule = rule.name, "insight fired");
            Some(insight)
        })
        .collect()
}

/// Names of the rules in evaluation order.
#[cfg(test)]
pub(crate) fn rule_names() -> impl Iterator<Item = &'static str> {
    INSIGHT_RULES.iter().map(|rule| rule.name)
}

fn asset_age(context: &InsightContext<'_>) -> Option<String> {
    let age = context.asset.age_years();
    if age > 50.0 {
        Some(format!(
            "Asset age of {age:.0} years significantly increases vulnerability through material fatigue and accumulated degradation."
        ))
    } else if age > 30.0 {
        Some(format!(
            "Asset age of {age:.0} years moderately increases vulnerability; deferred maintenance compounds event damage."
        ))
    } else {
        None
    }
}

fn event_severity(context: &InsightContext<'_>) -> Option<String> {
    let severity = context.hazard.severity;
    let event = context.event.event_type().label().to_ascii_lowercase();
    if severity > 0.8 {
        Some(format!(
            "Extreme {event} conditions (severity {severity:.2}) exceed typical design thresholds."
        ))
    } else if severity > 0.6 {
        Some(format!(
            "High {event} severity ({severity:.2}) places significant demand on the structure."
        ))
    } else {
        None
    }
}

fn structural_vulnerability(context: &InsightContext<'_>) -> Option<String> {
    let vulnerability = context.hazard.vulnerability;
    (vulnerability > 0.7).then(|| {
        format!(
            "{} shows high structural vulnerability ({vulnerability:.2}) to {} loading.",
            context.asset.asset_type().label(),
            context.event.event_type().label().to_ascii_lowercase()
        )
    })
}

fn bridge_clearance(context: &InsightContext<'_>) -> Option<String> {
    let (AssetGeometry::Bridge(bridge), ClimateEvent::Flood(flood)) =
        (context.asset.geometry(), context.event)
    else {
        return None;
    };

    let clearance = bridge.height_above_water - flood.water_level;
    if clearance <= 0.0 {
        Some(format!(
            "Water level of {:.1} m overtops the {:.1} m deck clearance; the deck will be submerged.",
            flood.water_level, bridge.height_above_water
        ))
    } else if clearance < BRIDGE_CLEARANCE_WARNING_M {
        Some(format!(
            "Water level of {:.1} m comes within {clearance:.1} m of the deck; debris impact on the superstructure is likely.",
            flood.water_level
        ))
    } else {
        None
    }
}

fn basement_inundation(context: &InsightContext<'_>) -> Option<String> {
    match (context.asset.geometry(), context.event) {
        (AssetGeometry::Building(building), ClimateEvent::Flood(flood))
            if building.has_basement && flood.water_level > 0.0 =>
        {
            Some(format!(
                "Basement inundation expected at {:.1} m water level; below-grade systems are exposed.",
                flood.water_level
            ))
        }
        _ => None,
    }
}

fn material_response(context: &InsightContext<'_>) -> Option<String> {
    let material = context.asset.material();
    let properties = material.properties();
    match context.event {
        ClimateEvent::Flood(_) if properties.water_resistance < 0.5 => Some(format!(
            "{} has limited water resistance ({:.0}%), accelerating moisture damage and corrosion.",
            material.label(),
            properties.water_resistance * 100.0
        )),
        ClimateEvent::Heatwave(_) if properties.thermal_expansion_per_c > 1.0e-5 => Some(format!(
            "{} expands {:.1e} per °C, concentrating thermal stress at joints and bearings.",
            material.label(),
            properties.thermal_expansion_per_c
        )),
        ClimateEvent::HighWind(_) if properties.wind_resistance < 0.3 => Some(format!(
            "{} offers low wind resistance ({:.0}%), leaving connections and cladding exposed.",
            material.label(),
            properties.wind_resistance * 100.0
        )),
        _ => None,
    }
}

fn passive_cooling(context: &InsightContext<'_>) -> Option<String> {
    match (context.asset.geometry(), context.event) {
        (AssetGeometry::Building(building), ClimateEvent::Heatwave(heat))
            if building.cooling_system != CoolingSystem::Mechanical
                && heat.max_temperature > 40.0 =>
        {
            Some(format!(
                "Reliance on {} offers little relief at {:.0} °C; interior overheating is likely.",
                building.cooling_system.label(),
                heat.max_temperature
            ))
        }
        _ => None,
    }
}

fn storm_surge(context: &InsightContext<'_>) -> Option<String> {
    match context.event {
        ClimateEvent::HighWind(wind) if wind.storm_surge >= SURGE_WARNING_M => Some(format!(
            "Storm surge of {:.1} m adds coastal flooding loads on top of wind pressure.",
            wind.storm_surge
        )),
        _ => None,
    }
}

fn degraded_integrity(context: &InsightContext<'_>) -> Option<String> {
    (context.integrity < DEGRADED_INTEGRITY).then(|| {
        format!(
            "Baseline structural integrity is degraded to {:.0}% of original capacity.",
            context.integrity * 100.0
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domain::{
        BridgeGeometry, BuildingGeometry, FloodEvent, HeatwaveEvent, Material, WindEvent,
    };

    fn flood(level: f64) -> ClimateEvent {
        ClimateEvent::Flood(FloodEvent {
            rainfall_intensity: 60.0,
            water_level: level,
            duration_hours: 12.0,
            severity: None,
            flow_velocity: None,
        })
    }

    fn quiet_hazard() -> HazardAssessment {
        HazardAssessment {
            severity: 0.3,
            vulnerability: 0.2,
        }
    }

    #[test]
    fn young_asset_in_mild_event_yields_no_insights() {
        let asset = InfrastructureAsset::bridge(Material::Composite, 5.0, BridgeGeometry::default())
            .expect("bridge");
        let event = flood(1.0);
        let context = InsightContext {
            asset: &asset,
            event: &event,
            integrity: 0.9,
            hazard: quiet_hazard(),
        };
        assert!(generate(&context).is_empty());
    }

    #[test]
    fn rules_fire_in_declaration_order() {
        let asset = InfrastructureAsset::bridge(
            Material::Steel,
            55.0,
            BridgeGeometry {
                height_above_water: 5.0,
                ..BridgeGeometry::default()
            },
        )
        .expect("bridge");
        let event = flood(4.0);
        let context = InsightContext {
            asset: &asset,
            event: &event,
            integrity: 0.33,
            hazard: HazardAssessment {
                severity: 0.9,
                vulnerability: 0.75,
            },
        };

        let insights = generate(&context);
        assert_eq!(insights.len(), 6);
        assert!(insights[0].contains("55 years significantly"));
        assert!(insights[1].starts_with("Extreme flood"));
        assert!(insights[2].starts_with("Bridge shows high structural vulnerability"));
        assert!(insights[3].contains("within 1.0 m of the deck"));
        assert!(insights[4].starts_with("Steel has limited water resistance (30%)"));
        assert!(insights[5].contains("33%"));
    }

    #[test]
    fn overtopped_deck_is_reported() {
        let asset = InfrastructureAsset::bridge(
            Material::Composite,
            2.0,
            BridgeGeometry {
                height_above_water: 3.0,
                ..BridgeGeometry::default()
            },
        )
        .expect("bridge");
        let event = flood(3.5);
        let context = InsightContext {
            asset: &asset,
            event: &event,
            integrity: 0.96,
            hazard: quiet_hazard(),
        };
        let insights = generate(&context);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].contains("overtops"));
    }

    #[test]
    fn heat_insights_cover_expansion_and_cooling() {
        let asset = InfrastructureAsset::building(
            Material::Steel,
            10.0,
            BuildingGeometry {
                cooling_system: CoolingSystem::Unconditioned,
                ..BuildingGeometry::default()
            },
        )
        .expect("building");
        let event = ClimateEvent::Heatwave(HeatwaveEvent {
            max_temperature: 44.0,
            min_temperature: 30.0,
            duration_days: 6.0,
            humidity: 50.0,
            severity: None,
        });
        let context = InsightContext {
            asset: &asset,
            event: &event,
            integrity: 0.82,
            hazard: quiet_hazard(),
        };
        let insights = generate(&context);
        assert_eq!(insights.len(), 2);
        assert!(insights[0].contains("1.2e-5"));
        assert!(insights[1].contains("no cooling"));
    }

    #[test]
    fn surge_insight_requires_two_metres() {
        let asset =
            InfrastructureAsset::building(Material::Composite, 1.0, BuildingGeometry::default())
                .expect("building");
        let mut wind = WindEvent {
            sustained_wind_speed: 100.0,
            gust_speed: 130.0,
            duration_hours: 8.0,
            storm_surge: 1.9,
            severity: None,
        };
        let below = ClimateEvent::HighWind(wind.clone());
        wind.storm_surge = 2.0;
        let at = ClimateEvent::HighWind(wind);

        let count = |event: &ClimateEvent| {
            generate(&InsightContext {
                asset: &asset,
                event,
                integrity: 0.98,
                hazard: quiet_hazard(),
            })
            .len()
        };
        assert_eq!(count(&below), 0);
        assert_eq!(count(&at), 1);
    }

    #[test]
    fn rule_names_are_unique() {
        let names: Vec<_> = rule_names().collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
