use crate::engine::domain::{
    BridgeGeometry, BuildingGeometry, MaterialProperties, RoadGeometry, WindEvent,
};

const SUSTAINED_WEIGHT: f64 = 0.45;
const GUST_WEIGHT: f64 = 0.55;

/// Span (m) at which a deck is fully exposed to aerodynamic loading.
const REFERENCE_SPAN_M: f64 = 500.0;
/// Height (m) at which a building is fully exposed.
const REFERENCE_HEIGHT_M: f64 = 100.0;

const ROAD_DEBRIS_CAP: f64 = 0.3;
const ROAD_OVERTOPPING_CAP: f64 = 0.4;

pub(crate) fn severity(event: &WindEvent) -> f64 {
    let speed = sustained_factor(event.sustained_wind_speed) * SUSTAINED_WEIGHT
        + gust_factor(event.gust_speed) * GUST_WEIGHT;
    (speed
        * duration_factor(event.duration_hours)
        * surge_factor(event.storm_surge)
        * event.severity_multiplier())
    .clamp(0.0, 1.0)
}

pub(crate) fn bridge_vulnerability(
    bridge: &BridgeGeometry,
    event: &WindEvent,
    properties: &MaterialProperties,
) -> f64 {
    let exposure = (bridge.span_length / REFERENCE_SPAN_M).min(1.0);
    let loading = match event.gust_speed {
        w if w < 80.0 => 0.1,
        w if w < 120.0 => 0.3 + (w - 80.0) / 80.0,
        w => (0.8 + (w - 120.0) / 150.0).min(1.0),
    };
    let resistance = 0.5 + 0.5 * (1.0 - properties.wind_resistance);
    (exposure * loading * resistance).clamp(0.0, 1.0)
}

pub(crate) fn building_vulnerability(
    building: &BuildingGeometry,
    event: &WindEvent,
    properties: &MaterialProperties,
) -> f64 {
    let exposure = (building.height / REFERENCE_HEIGHT_M).min(1.0);
    let loading = match event.gust_speed {
        w if w < 100.0 => 0.1,
        w if w < 150.0 => 0.3 + (w - 100.0) / 100.0,
        w => (0.8 + (w - 150.0) / 100.0).min(1.0),
    };
    (exposure * loading * (1.0 - properties.wind_resistance)).clamp(0.0, 1.0)
}

pub(crate) fn road_vulnerability(road: &RoadGeometry, event: &WindEvent) -> f64 {
    let debris = (event.sustained_wind_speed / 400.0).min(ROAD_DEBRIS_CAP);
    let overtopping = if event.storm_surge > road.elevation {
        ((event.storm_surge - road.elevation) / 5.0).min(ROAD_OVERTOPPING_CAP)
    } else {
        0.0
    };
    (debris + overtopping).clamp(0.0, 1.0)
}

fn sustained_factor(kmh: f64) -> f64 {
    match kmh {
        s if s < 50.0 => 0.2,
        s if s < 80.0 => 0.3 + (s - 50.0) / 100.0,
        s if s < 120.0 => 0.6 + (s - 80.0) / 150.0,
        s if s < 150.0 => 0.85 + (s - 120.0) / 200.0,
        _ => 1.0,
    }
}

fn gust_factor(kmh: f64) -> f64 {
    match kmh {
        g if g < 80.0 => 0.3,
        g if g < 120.0 => 0.5 + (g - 80.0) / 100.0,
        g if g < 160.0 => 0.75 + (g - 120.0) / 200.0,
        _ => 0.95,
    }
}

fn duration_factor(hours: f64) -> f64 {
    match hours {
        d if d < 6.0 => 0.75,
        d if d < 24.0 => 0.85 + (d - 6.0) / 60.0,
        d => (0.95 + (d - 24.0) / 200.0).min(1.0),
    }
}

/// Coastal surge amplifies wind damage; capped at 1.3x.
fn surge_factor(metres: f64) -> f64 {
    match metres {
        s if s < 0.5 => 1.0,
        s if s < 2.0 => 1.1 + (s - 0.5) / 10.0,
        s => (1.2 + (s - 2.0) / 20.0).min(1.3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domain::Material;

    fn storm(sustained: f64, gust: f64, surge: f64) -> WindEvent {
        WindEvent {
            sustained_wind_speed: sustained,
            gust_speed: gust,
            duration_hours: 12.0,
            storm_surge: surge,
            severity: None,
        }
    }

    #[test]
    fn storm_surge_amplifies_severity() {
        assert!(severity(&storm(120.0, 150.0, 3.0)) > severity(&storm(120.0, 150.0, 0.0)));
    }

    #[test]
    fn severity_is_bounded() {
        let mut event = storm(250.0, 300.0, 6.0);
        event.severity = Some(crate::engine::domain::SeverityLabel::Extreme);
        assert_eq!(severity(&event), 1.0);
    }

    #[test]
    fn taller_buildings_catch_more_wind() {
        let event = storm(130.0, 170.0, 0.0);
        let props = Material::ReinforcedConcrete.properties();
        let low = BuildingGeometry {
            height: 12.0,
            ..BuildingGeometry::default()
        };
        let tall = BuildingGeometry {
            height: 90.0,
            ..BuildingGeometry::default()
        };
        assert!(
            building_vulnerability(&tall, &event, &props)
                > building_vulnerability(&low, &event, &props)
        );
    }

    #[test]
    fn elevated_roads_escape_surge_overtopping() {
        let event = storm(100.0, 130.0, 2.0);
        let low = RoadGeometry::default();
        let raised = RoadGeometry {
            elevation: 3.0,
            ..RoadGeometry::default()
        };
        assert!(road_vulnerability(&raised, &event) < road_vulnerability(&low, &event));
    }
}
