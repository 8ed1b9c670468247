use crate::engine::domain::{
    BridgeGeometry, BuildingGeometry, FloodEvent, MaterialProperties, RoadGeometry,
};

const RAINFALL_WEIGHT: f64 = 0.25;
const WATER_LEVEL_WEIGHT: f64 = 0.45;
const EROSION_WEIGHT: f64 = 0.30;

pub const SUBMERSION_WEIGHT: f64 = 0.4;
pub const SCOUR_WEIGHT: f64 = 0.4;
pub const WATER_DAMAGE_WEIGHT: f64 = 0.2;

/// Depth over the deck, in metres, that counts as full submersion.
const SUBMERSION_DEPTH_SCALE_M: f64 = 10.0;
const MAX_FLOW_VELOCITY_MS: f64 = 5.0;

/// Normalized drivers of a flood, shared by the severity and vulnerability terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FloodDrivers {
    pub rainfall: f64,
    pub water_level: f64,
    pub erosion: f64,
    pub duration: f64,
}

impl FloodDrivers {
    pub(crate) fn from_event(event: &FloodEvent) -> Self {
        let velocity = event
            .flow_velocity
            .unwrap_or_else(|| event.water_level.max(0.1).sqrt().min(MAX_FLOW_VELOCITY_MS));

        Self {
            rainfall: rainfall_factor(event.rainfall_intensity),
            water_level: water_level_factor(event.water_level),
            erosion: erosion_factor(velocity),
            duration: duration_factor(event.duration_hours),
        }
    }
}

pub(crate) fn severity(event: &FloodEvent, drivers: &FloodDrivers) -> f64 {
    let intensity = drivers.rainfall * RAINFALL_WEIGHT
        + drivers.water_level * WATER_LEVEL_WEIGHT
        + drivers.erosion * EROSION_WEIGHT;
    (intensity * drivers.duration * event.severity_multiplier()).clamp(0.0, 1.0)
}

pub(crate) fn bridge_vulnerability(
    bridge: &BridgeGeometry,
    event: &FloodEvent,
    drivers: &FloodDrivers,
    properties: &MaterialProperties,
) -> f64 {
    let overtopping = (event.water_level - bridge.height_above_water).max(0.0);
    let submersion = (overtopping / SUBMERSION_DEPTH_SCALE_M).min(1.0);
    let scour = (drivers.erosion * bridge.foundation_type.scour_susceptibility()).min(1.0);
    combine(submersion, scour, properties)
}

pub(crate) fn building_vulnerability(
    building: &BuildingGeometry,
    event: &FloodEvent,
    properties: &MaterialProperties,
) -> f64 {
    let depth = event.water_level;
    let ground_floor = if depth > 0.5 {
        (depth / 2.0).min(1.0)
    } else {
        0.0
    };
    let basement = if building.has_basement && depth > 0.0 {
        (depth / 3.0).min(1.0)
    } else {
        0.0
    };
    let submersion = (0.6 * ground_floor + 0.4 * basement).min(1.0);
    let scour = if depth > building.foundation_depth {
        0.8
    } else {
        0.2
    };
    combine(submersion, scour, properties)
}

pub(crate) fn road_vulnerability(
    road: &RoadGeometry,
    event: &FloodEvent,
    properties: &MaterialProperties,
) -> f64 {
    let standing = (event.water_level - road.elevation).max(0.0);
    let submersion = if standing > 0.3 {
        1.0
    } else if standing > 0.15 {
        0.7
    } else {
        0.3
    };
    let washout =
        road_rainfall_factor(event.rainfall_intensity) * road.drainage_quality.washout_factor();
    combine(submersion, washout.min(1.0), properties)
}

fn combine(submersion: f64, scour: f64, properties: &MaterialProperties) -> f64 {
    let water_damage = 1.0 - properties.water_resistance;
    (SUBMERSION_WEIGHT * submersion + SCOUR_WEIGHT * scour + WATER_DAMAGE_WEIGHT * water_damage)
        .clamp(0.0, 1.0)
}

fn rainfall_factor(mm_per_hour: f64) -> f64 {
    match mm_per_hour {
        r if r < 10.0 => 0.2,
        r if r < 30.0 => 0.4 + (r - 10.0) / 50.0,
        r if r < 100.0 => 0.7 + (r - 30.0) / 200.0,
        r => (0.9 + (r - 100.0) / 300.0).min(1.0),
    }
}

fn water_level_factor(metres: f64) -> f64 {
    match metres {
        w if w < 1.0 => 0.3,
        w if w < 3.0 => 0.5 + (w - 1.0) / 5.0,
        w if w < 5.0 => 0.8 + (w - 3.0) / 10.0,
        _ => 0.95,
    }
}

fn erosion_factor(velocity_ms: f64) -> f64 {
    match velocity_ms {
        v if v < 1.0 => 0.2,
        v if v < 2.0 => 0.4 + (v - 1.0) / 2.5,
        v => (0.7 + (v - 2.0) / 5.0).min(1.0),
    }
}

fn duration_factor(hours: f64) -> f64 {
    match hours {
        d if d < 6.0 => 0.7,
        d if d < 24.0 => 0.85 + (d - 6.0) / 60.0,
        d => (1.0 + (d - 24.0) / 100.0).min(1.0),
    }
}

fn road_rainfall_factor(mm_per_hour: f64) -> f64 {
    match mm_per_hour {
        r if r < 20.0 => 0.2,
        r if r < 50.0 => 0.4 + (r - 20.0) / 60.0,
        r => (0.9 + (r - 50.0) / 100.0).min(1.0),
    }
}
