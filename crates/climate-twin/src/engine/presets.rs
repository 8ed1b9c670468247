//! Named climate scenarios callers can reference instead of spelling out an event.

use super::domain::{ClimateEvent, FloodEvent, HeatwaveEvent, SeverityLabel, WindEvent};
use super::EngineError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimatePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub event: ClimateEvent,
}

const PRESET_IDS: [&str; 6] = [
    "100year_flood",
    "moderate_flood",
    "extreme_heatwave",
    "moderate_heatwave",
    "hurricane_winds",
    "severe_storm",
];

/// Identifiers in catalog order.
pub fn preset_ids() -> &'static [&'static str] {
    &PRESET_IDS
}

pub fn climate_presets() -> Vec<ClimatePreset> {
    PRESET_IDS.iter().filter_map(|id| build(id)).collect()
}

pub fn preset(id: &str) -> Result<ClimatePreset, EngineError> {
    let normalized = id.trim().to_ascii_lowercase();
    build(&normalized).ok_or_else(|| {
        EngineError::InvalidEvent(format!(
            "unknown climate scenario '{id}' (expected one of: {})",
            preset_ids().join(", ")
        ))
    })
}

pub fn preset_event(id: &str) -> Result<ClimateEvent, EngineError> {
    preset(id).map(|preset| preset.event)
}

fn build(id: &str) -> Option<ClimatePreset> {
    let preset = match id {
        "100year_flood" => ClimatePreset {
            id: "100year_flood",
            name: "100-Year Flood",
            description: "Extreme rainfall with riverine flooding and fast currents",
            event: ClimateEvent::Flood(FloodEvent {
                rainfall_intensity: 120.0,
                water_level: 4.5,
                duration_hours: 24.0,
                severity: Some(SeverityLabel::Extreme),
                flow_velocity: Some(3.5),
            }),
        },
        "moderate_flood" => ClimatePreset {
            id: "moderate_flood",
            name: "Moderate Flood",
            description: "Heavy seasonal rainfall with localized flooding",
            event: ClimateEvent::Flood(FloodEvent {
                rainfall_intensity: 40.0,
                water_level: 1.5,
                duration_hours: 8.0,
                severity: Some(SeverityLabel::Moderate),
                flow_velocity: None,
            }),
        },
        "extreme_heatwave" => ClimatePreset {
            id: "extreme_heatwave",
            name: "Extreme Heatwave",
            description: "Prolonged record temperatures with little overnight relief",
            event: ClimateEvent::Heatwave(HeatwaveEvent {
                max_temperature: 45.0,
                min_temperature: 32.0,
                duration_days: 10.0,
                humidity: 40.0,
                severity: Some(SeverityLabel::Extreme),
            }),
        },
        "moderate_heatwave" => ClimatePreset {
            id: "moderate_heatwave",
            name: "Moderate Heatwave",
            description: "Several days of above-normal temperatures",
            event: ClimateEvent::Heatwave(HeatwaveEvent {
                max_temperature: 38.0,
                min_temperature: 28.0,
                duration_days: 5.0,
                humidity: 55.0,
                severity: Some(SeverityLabel::Moderate),
            }),
        },
        "hurricane_winds" => ClimatePreset {
            id: "hurricane_winds",
            name: "Hurricane Winds",
            description: "Category 3 hurricane landfall with coastal storm surge",
            event: ClimateEvent::HighWind(WindEvent {
                sustained_wind_speed: 150.0,
                gust_speed: 200.0,
                duration_hours: 12.0,
                storm_surge: 3.0,
                severity: Some(SeverityLabel::Extreme),
            }),
        },
        "severe_storm" => ClimatePreset {
            id: "severe_storm",
            name: "Severe Storm",
            description: "Strong convective storm with damaging gusts",
            event: ClimateEvent::HighWind(WindEvent {
                sustained_wind_speed: 90.0,
                gust_speed: 120.0,
                duration_hours: 6.0,
                storm_surge: 0.5,
                severity: Some(SeverityLabel::High),
            }),
        },
        _ => return None,
    };
    Some(preset)
}
