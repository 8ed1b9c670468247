use crate::engine::EngineError;
use serde::{Deserialize, Serialize};

/// Construction materials with a known property profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Steel,
    Concrete,
    ReinforcedConcrete,
    Wood,
    Masonry,
    Composite,
}

/// Reference properties for a material. Resistances are fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialProperties {
    pub tensile_strength_mpa: f64,
    pub compressive_strength_mpa: f64,
    pub thermal_expansion_per_c: f64,
    pub corrosion_resistance: f64,
    pub water_resistance: f64,
    pub wind_resistance: f64,
}

impl Material {
    pub const fn ordered() -> [Material; 6] {
        [
            Material::Steel,
            Material::Concrete,
            Material::ReinforcedConcrete,
            Material::Wood,
            Material::Masonry,
            Material::Composite,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Material::Steel => "steel",
            Material::Concrete => "concrete",
            Material::ReinforcedConcrete => "reinforced_concrete",
            Material::Wood => "wood",
            Material::Masonry => "masonry",
            Material::Composite => "composite",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Material::Steel => "Steel",
            Material::Concrete => "Concrete",
            Material::ReinforcedConcrete => "Reinforced Concrete",
            Material::Wood => "Wood",
            Material::Masonry => "Masonry",
            Material::Composite => "Composite",
        }
    }

    /// Resolve a material key. An unknown key is an invalid asset, never a default.
    pub fn from_key(raw: &str) -> Result<Self, EngineError> {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Material::ordered()
            .into_iter()
            .find(|material| material.key() == normalized)
            .ok_or_else(|| EngineError::InvalidAsset(format!("unknown material '{raw}'")))
    }

    pub const fn properties(self) -> MaterialProperties {
        match self {
            Material::Steel => MaterialProperties {
                tensile_strength_mpa: 400.0,
                compressive_strength_mpa: 400.0,
                thermal_expansion_per_c: 1.2e-5,
                corrosion_resistance: 0.4,
                water_resistance: 0.3,
                wind_resistance: 0.5,
            },
            Material::Concrete => MaterialProperties {
                tensile_strength_mpa: 3.0,
                compressive_strength_mpa: 30.0,
                thermal_expansion_per_c: 1.0e-5,
                corrosion_resistance: 0.7,
                water_resistance: 0.6,
                wind_resistance: 0.2,
            },
            Material::ReinforcedConcrete => MaterialProperties {
                tensile_strength_mpa: 25.0,
                compressive_strength_mpa: 40.0,
                thermal_expansion_per_c: 1.0e-5,
                corrosion_resistance: 0.6,
                water_resistance: 0.7,
                wind_resistance: 0.4,
            },
            Material::Wood => MaterialProperties {
                tensile_strength_mpa: 100.0,
                compressive_strength_mpa: 50.0,
                thermal_expansion_per_c: 5.0e-6,
                corrosion_resistance: 0.3,
                water_resistance: 0.2,
                wind_resistance: 0.1,
            },
            Material::Masonry => MaterialProperties {
                tensile_strength_mpa: 2.0,
                compressive_strength_mpa: 15.0,
                thermal_expansion_per_c: 8.0e-6,
                corrosion_resistance: 0.8,
                water_resistance: 0.5,
                wind_resistance: 0.0,
            },
            Material::Composite => MaterialProperties {
                tensile_strength_mpa: 600.0,
                compressive_strength_mpa: 200.0,
                thermal_expansion_per_c: 2.0e-6,
                corrosion_resistance: 0.9,
                water_resistance: 0.9,
                wind_resistance: 0.6,
            },
        }
    }
}

/// Catalog row exposed to callers listing the property table.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialCatalogEntry {
    pub material: Material,
    pub key: &'static str,
    pub label: &'static str,
    pub properties: MaterialProperties,
}

pub fn material_catalog() -> Vec<MaterialCatalogEntry> {
    Material::ordered()
        .into_iter()
        .map(|material| MaterialCatalogEntry {
            material,
            key: material.key(),
            label: material.label(),
            properties: material.properties(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_keys_with_loose_formatting() {
        assert_eq!(
            Material::from_key("Reinforced Concrete").expect("known material"),
            Material::ReinforcedConcrete
        );
        assert_eq!(
            Material::from_key(" steel ").expect("known material"),
            Material::Steel
        );
    }

    #[test]
    fn unknown_material_is_invalid_asset() {
        match Material::from_key("adamantium") {
            Err(EngineError::InvalidAsset(message)) => assert!(message.contains("adamantium")),
            other => panic!("expected invalid asset, got {other:?}"),
        }
    }

    #[test]
    fn resistances_stay_within_unit_interval() {
        for entry in material_catalog() {
            let props = entry.properties;
            for value in [
                props.corrosion_resistance,
                props.water_resistance,
                props.wind_resistance,
            ] {
                assert!((0.0..=1.0).contains(&value), "{} out of range", entry.key);
            }
        }
    }
}
