use super::materials::{Material, MaterialProperties};
use crate::engine::EngineError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Bridge,
    Building,
    Road,
}

impl AssetType {
    pub const fn ordered() -> [AssetType; 3] {
        [AssetType::Bridge, AssetType::Building, AssetType::Road]
    }

    pub const fn key(self) -> &'static str {
        match self {
            AssetType::Bridge => "bridge",
            AssetType::Building => "building",
            AssetType::Road => "road",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AssetType::Bridge => "Bridge",
            AssetType::Building => "Building",
            AssetType::Road => "Road",
        }
    }

    pub fn from_key(raw: &str) -> Result<Self, EngineError> {
        let normalized = raw.trim().to_ascii_lowercase();
        AssetType::ordered()
            .into_iter()
            .find(|asset_type| asset_type.key() == normalized)
            .ok_or_else(|| EngineError::UnsupportedAssetType(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundationType {
    Pile,
    Caisson,
    Spread,
}

impl FoundationType {
    /// Share of flow-driven erosion that reaches the foundation as scour.
    pub const fn scour_susceptibility(self) -> f64 {
        match self {
            FoundationType::Pile => 0.2,
            FoundationType::Caisson => 0.3,
            FoundationType::Spread => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolingSystem {
    Mechanical,
    #[serde(alias = "natural_ventilation")]
    Natural,
    #[serde(rename = "none")]
    Unconditioned,
}

impl CoolingSystem {
    pub const fn heat_exposure(self) -> f64 {
        match self {
            CoolingSystem::Mechanical => 0.4,
            CoolingSystem::Natural => 0.7,
            CoolingSystem::Unconditioned => 1.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CoolingSystem::Mechanical => "mechanical cooling",
            CoolingSystem::Natural => "natural ventilation",
            CoolingSystem::Unconditioned => "no cooling",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrainageQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl DrainageQuality {
    /// Fraction of heavy rainfall that ends up as surface washout.
    pub const fn washout_factor(self) -> f64 {
        match self {
            DrainageQuality::Excellent => 0.3,
            DrainageQuality::Good => 0.6,
            DrainageQuality::Fair => 0.8,
            DrainageQuality::Poor => 1.0,
        }
    }
}

/// Bridge geometry. Lengths in metres, capacity in tonnes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeGeometry {
    pub span_length: f64,
    pub height_above_water: f64,
    pub load_capacity: f64,
    pub foundation_type: FoundationType,
}

impl Default for BridgeGeometry {
    fn default() -> Self {
        Self {
            span_length: 100.0,
            height_above_water: 10.0,
            load_capacity: 50.0,
            foundation_type: FoundationType::Pile,
        }
    }
}

/// Building geometry. Lengths in metres, floor area in square metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingGeometry {
    pub floors: u32,
    pub height: f64,
    pub floor_area: f64,
    pub foundation_depth: f64,
    pub has_basement: bool,
    pub cooling_system: CoolingSystem,
}

impl Default for BuildingGeometry {
    fn default() -> Self {
        Self {
            floors: 5,
            height: 15.0,
            floor_area: 1000.0,
            foundation_depth: 3.0,
            has_basement: false,
            cooling_system: CoolingSystem::Mechanical,
        }
    }
}

/// Road geometry. Length in kilometres, width and elevation in metres,
/// traffic in vehicles per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadGeometry {
    pub length: f64,
    pub width: f64,
    pub traffic_volume: f64,
    pub drainage_quality: DrainageQuality,
    pub elevation: f64,
}

impl Default for RoadGeometry {
    fn default() -> Self {
        Self {
            length: 5.0,
            width: 10.0,
            traffic_volume: 10_000.0,
            drainage_quality: DrainageQuality::Good,
            elevation: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "asset_type", rename_all = "snake_case")]
pub enum AssetGeometry {
    Bridge(BridgeGeometry),
    Building(BuildingGeometry),
    Road(RoadGeometry),
}

impl AssetGeometry {
    pub const fn asset_type(&self) -> AssetType {
        match self {
            AssetGeometry::Bridge(_) => AssetType::Bridge,
            AssetGeometry::Building(_) => AssetType::Building,
            AssetGeometry::Road(_) => AssetType::Road,
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        match self {
            AssetGeometry::Bridge(bridge) => {
                non_negative("span_length", bridge.span_length)?;
                non_negative("height_above_water", bridge.height_above_water)?;
                non_negative("load_capacity", bridge.load_capacity)
            }
            AssetGeometry::Building(building) => {
                non_negative("height", building.height)?;
                non_negative("floor_area", building.floor_area)?;
                non_negative("foundation_depth", building.foundation_depth)
            }
            AssetGeometry::Road(road) => {
                non_negative("length", road.length)?;
                non_negative("width", road.width)?;
                non_negative("traffic_volume", road.traffic_volume)?;
                if road.elevation.is_finite() {
                    Ok(())
                } else {
                    Err(EngineError::InvalidAsset(
                        "elevation must be a finite number".to_string(),
                    ))
                }
            }
        }
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidAsset(format!(
            "{field} must be a non-negative number (found {value})"
        )))
    }
}

/// Digital twin of a single asset, validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfrastructureAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    material: Material,
    age_years: f64,
    #[serde(flatten)]
    geometry: AssetGeometry,
}

impl InfrastructureAsset {
    pub fn new(
        material: Material,
        age_years: f64,
        geometry: AssetGeometry,
    ) -> Result<Self, EngineError> {
        if !age_years.is_finite() || age_years < 0.0 {
            return Err(EngineError::InvalidAsset(format!(
                "age_years must be a non-negative number (found {age_years})"
            )));
        }
        geometry.validate()?;

        Ok(Self {
            id: None,
            location: None,
            material,
            age_years,
            geometry,
        })
    }

    pub fn bridge(
        material: Material,
        age_years: f64,
        geometry: BridgeGeometry,
    ) -> Result<Self, EngineError> {
        Self::new(material, age_years, AssetGeometry::Bridge(geometry))
    }

    pub fn building(
        material: Material,
        age_years: f64,
        geometry: BuildingGeometry,
    ) -> Result<Self, EngineError> {
        Self::new(material, age_years, AssetGeometry::Building(geometry))
    }

    pub fn road(
        material: Material,
        age_years: f64,
        geometry: RoadGeometry,
    ) -> Result<Self, EngineError> {
        Self::new(material, age_years, AssetGeometry::Road(geometry))
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Parse a loosely-typed record. `type` and `age` are accepted as aliases of
    /// `asset_type` and `age_years`; fields that do not apply are ignored.
    pub fn from_value(value: Value) -> Result<Self, EngineError> {
        let Value::Object(fields) = &value else {
            return Err(EngineError::InvalidAsset(
                "asset must be a JSON object".to_string(),
            ));
        };

        let asset_type = match fields.get("asset_type").or_else(|| fields.get("type")) {
            Some(Value::String(tag)) => AssetType::from_key(tag)?,
            Some(_) => {
                return Err(EngineError::InvalidAsset(
                    "asset_type must be a string".to_string(),
                ))
            }
            None => return Err(EngineError::InvalidAsset("missing asset_type".to_string())),
        };

        let material = match fields.get("material") {
            Some(Value::String(key)) => Material::from_key(key)?,
            Some(_) => {
                return Err(EngineError::InvalidAsset(
                    "material must be a string".to_string(),
                ))
            }
            None => return Err(EngineError::InvalidAsset("missing material".to_string())),
        };

        let age_years = match fields.get("age_years").or_else(|| fields.get("age")) {
            Some(raw) => raw.as_f64().ok_or_else(|| {
                EngineError::InvalidAsset("age_years must be a number".to_string())
            })?,
            None => return Err(EngineError::InvalidAsset("missing age_years".to_string())),
        };

        let id = optional_text(fields.get("id"));
        let location = optional_text(fields.get("location"));

        let geometry = match asset_type {
            AssetType::Bridge => AssetGeometry::Bridge(parse_geometry(value)?),
            AssetType::Building => AssetGeometry::Building(parse_geometry(value)?),
            AssetType::Road => AssetGeometry::Road(parse_geometry(value)?),
        };

        let mut asset = Self::new(material, age_years, geometry)?;
        asset.id = id;
        asset.location = location;
        Ok(asset)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub const fn asset_type(&self) -> AssetType {
        self.geometry.asset_type()
    }

    pub const fn material(&self) -> Material {
        self.material
    }

    pub const fn properties(&self) -> MaterialProperties {
        self.material.properties()
    }

    pub const fn age_years(&self) -> f64 {
        self.age_years
    }

    pub const fn geometry(&self) -> &AssetGeometry {
        &self.geometry
    }
}

fn optional_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    }
}

fn parse_geometry<T: DeserializeOwned>(value: Value) -> Result<T, EngineError> {
    serde_json::from_value(value).map_err(|err| EngineError::InvalidAsset(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bridge_with_defaults_for_missing_geometry() {
        let asset = InfrastructureAsset::from_value(json!({
            "asset_type": "bridge",
            "material": "steel",
            "age_years": 40,
            "span_length": 150,
        }))
        .expect("bridge parses");

        assert_eq!(asset.asset_type(), AssetType::Bridge);
        match asset.geometry() {
            AssetGeometry::Bridge(bridge) => {
                assert_eq!(bridge.span_length, 150.0);
                assert_eq!(bridge.height_above_water, 10.0);
                assert_eq!(bridge.foundation_type, FoundationType::Pile);
            }
            other => panic!("expected bridge geometry, got {other:?}"),
        }
    }

    #[test]
    fn accepts_legacy_type_and_age_keys() {
        let asset = InfrastructureAsset::from_value(json!({
            "id": "bldg-7",
            "type": "building",
            "material": "concrete",
            "age": 12,
            "cooling_system": "natural_ventilation",
            "wind_direction": "variable",
        }))
        .expect("building parses");

        assert_eq!(asset.id(), Some("bldg-7"));
        assert_eq!(asset.age_years(), 12.0);
        match asset.geometry() {
            AssetGeometry::Building(building) => {
                assert_eq!(building.cooling_system, CoolingSystem::Natural)
            }
            other => panic!("expected building geometry, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_age() {
        let result = InfrastructureAsset::from_value(json!({
            "asset_type": "road",
            "material": "concrete",
            "age_years": -1,
        }));
        assert!(matches!(result, Err(EngineError::InvalidAsset(_))));
    }

    #[test]
    fn unknown_asset_type_is_unsupported() {
        let result = InfrastructureAsset::from_value(json!({
            "asset_type": "tunnel",
            "material": "concrete",
            "age_years": 10,
        }));
        assert_eq!(
            result,
            Err(EngineError::UnsupportedAssetType("tunnel".to_string()))
        );
    }

    #[test]
    fn missing_material_is_invalid() {
        let result = InfrastructureAsset::from_value(json!({
            "asset_type": "road",
            "age_years": 10,
        }));
        assert_eq!(
            result,
            Err(EngineError::InvalidAsset("missing material".to_string()))
        );
    }

    #[test]
    fn mistyped_geometry_is_invalid() {
        let result = InfrastructureAsset::from_value(json!({
            "asset_type": "bridge",
            "material": "steel",
            "age_years": 10,
            "foundation_type": "floating",
        }));
        assert!(matches!(result, Err(EngineError::InvalidAsset(_))));
    }

    #[test]
    fn serializes_with_asset_type_tag() {
        let asset = InfrastructureAsset::road(Material::Concrete, 8.0, RoadGeometry::default())
            .expect("road builds")
            .with_location("Ring Road");
        let value = serde_json::to_value(&asset).expect("serializes");
        assert_eq!(value["asset_type"], "road");
        assert_eq!(value["material"], "concrete");
        assert_eq!(value["location"], "Ring Road");
        assert!(value.get("id").is_none());
    }
}
