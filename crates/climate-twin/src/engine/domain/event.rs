use crate::engine::EngineError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Flood,
    Heatwave,
    HighWind,
}

impl EventType {
    pub const fn ordered() -> [EventType; 3] {
        [EventType::Flood, EventType::Heatwave, EventType::HighWind]
    }

    pub const fn key(self) -> &'static str {
        match self {
            EventType::Flood => "flood",
            EventType::Heatwave => "heatwave",
            EventType::HighWind => "high_wind",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EventType::Flood => "Flood",
            EventType::Heatwave => "Heatwave",
            EventType::HighWind => "High Wind",
        }
    }

    pub fn from_key(raw: &str) -> Result<Self, EngineError> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        EventType::ordered()
            .into_iter()
            .find(|event_type| event_type.key() == normalized)
            .ok_or_else(|| EngineError::UnsupportedEventType(raw.to_string()))
    }
}

/// Qualitative label attached to an event by forecasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLabel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl SeverityLabel {
    pub const fn multiplier(self) -> f64 {
        match self {
            SeverityLabel::Low => 0.5,
            SeverityLabel::Moderate => 0.75,
            SeverityLabel::High => 1.0,
            SeverityLabel::Extreme => 1.3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SeverityLabel::Low => "low",
            SeverityLabel::Moderate => "moderate",
            SeverityLabel::High => "high",
            SeverityLabel::Extreme => "extreme",
        }
    }
}

fn label_multiplier(label: Option<SeverityLabel>) -> f64 {
    label.map_or(1.0, SeverityLabel::multiplier)
}

/// Rainfall in mm/hr, water level in metres, flow velocity in m/s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloodEvent {
    pub rainfall_intensity: f64,
    pub water_level: f64,
    #[serde(default = "default_flood_hours", alias = "duration")]
    pub duration_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_velocity: Option<f64>,
}

impl FloodEvent {
    pub fn severity_multiplier(&self) -> f64 {
        label_multiplier(self.severity)
    }
}

/// Temperatures in °C, humidity in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatwaveEvent {
    pub max_temperature: f64,
    pub min_temperature: f64,
    #[serde(default = "default_heat_days", alias = "duration")]
    pub duration_days: f64,
    #[serde(default = "default_humidity")]
    pub humidity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityLabel>,
}

impl HeatwaveEvent {
    pub fn severity_multiplier(&self) -> f64 {
        label_multiplier(self.severity)
    }

    pub fn diurnal_range(&self) -> f64 {
        self.max_temperature - self.min_temperature
    }
}

/// Wind speeds in km/h, storm surge in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindEvent {
    pub sustained_wind_speed: f64,
    pub gust_speed: f64,
    #[serde(default = "default_wind_hours", alias = "duration")]
    pub duration_hours: f64,
    #[serde(default)]
    pub storm_surge: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityLabel>,
}

impl WindEvent {
    pub fn severity_multiplier(&self) -> f64 {
        label_multiplier(self.severity)
    }
}

fn default_flood_hours() -> f64 {
    12.0
}

fn default_heat_days() -> f64 {
    5.0
}

fn default_humidity() -> f64 {
    50.0
}

fn default_wind_hours() -> f64 {
    8.0
}

/// A single extreme event, tagged by `event_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ClimateEvent {
    Flood(FloodEvent),
    Heatwave(HeatwaveEvent),
    HighWind(WindEvent),
}

impl ClimateEvent {
    pub const fn event_type(&self) -> EventType {
        match self {
            ClimateEvent::Flood(_) => EventType::Flood,
            ClimateEvent::Heatwave(_) => EventType::Heatwave,
            ClimateEvent::HighWind(_) => EventType::HighWind,
        }
    }

    pub fn severity_label(&self) -> Option<SeverityLabel> {
        match self {
            ClimateEvent::Flood(flood) => flood.severity,
            ClimateEvent::Heatwave(heat) => heat.severity,
            ClimateEvent::HighWind(wind) => wind.severity,
        }
    }

    /// Parse a loosely-typed record. `type` is accepted as an alias of
    /// `event_type`; fields belonging to other hazards are ignored.
    pub fn from_value(value: Value) -> Result<Self, EngineError> {
        let tag = match value.get("event_type").or_else(|| value.get("type")) {
            Some(Value::String(tag)) => EventType::from_key(tag)?,
            Some(_) => {
                return Err(EngineError::InvalidEvent(
                    "event_type must be a string".to_string(),
                ))
            }
            None if value.is_object() => {
                return Err(EngineError::InvalidEvent("missing event_type".to_string()))
            }
            None => {
                return Err(EngineError::InvalidEvent(
                    "event must be a JSON object".to_string(),
                ))
            }
        };

        let event = match tag {
            EventType::Flood => ClimateEvent::Flood(parse_fields(value)?),
            EventType::Heatwave => ClimateEvent::Heatwave(parse_fields(value)?),
            EventType::HighWind => ClimateEvent::HighWind(parse_fields(value)?),
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        match self {
            ClimateEvent::Flood(flood) => {
                non_negative("rainfall_intensity", flood.rainfall_intensity)?;
                non_negative("water_level", flood.water_level)?;
                non_negative("duration_hours", flood.duration_hours)?;
                if let Some(velocity) = flood.flow_velocity {
                    non_negative("flow_velocity", velocity)?;
                }
                Ok(())
            }
            ClimateEvent::Heatwave(heat) => {
                finite("max_temperature", heat.max_temperature)?;
                finite("min_temperature", heat.min_temperature)?;
                non_negative("duration_days", heat.duration_days)?;
                if heat.min_temperature > heat.max_temperature {
                    return Err(EngineError::InvalidEvent(format!(
                        "min_temperature {} exceeds max_temperature {}",
                        heat.min_temperature, heat.max_temperature
                    )));
                }
                if !(0.0..=100.0).contains(&heat.humidity) {
                    return Err(EngineError::InvalidEvent(format!(
                        "humidity must be a percentage (found {})",
                        heat.humidity
                    )));
                }
                Ok(())
            }
            ClimateEvent::HighWind(wind) => {
                non_negative("sustained_wind_speed", wind.sustained_wind_speed)?;
                non_negative("gust_speed", wind.gust_speed)?;
                non_negative("duration_hours", wind.duration_hours)?;
                non_negative("storm_surge", wind.storm_surge)
            }
        }
    }
}

fn finite(field: &str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidEvent(format!(
            "{field} must be a finite number"
        )))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), EngineError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(EngineError::InvalidEvent(format!(
            "{field} must not be negative (found {value})"
        )));
    }
    Ok(())
}

fn parse_fields<T: DeserializeOwned>(value: Value) -> Result<T, EngineError> {
    serde_json::from_value(value).map_err(|err| EngineError::InvalidEvent(err.to_string()))
}
