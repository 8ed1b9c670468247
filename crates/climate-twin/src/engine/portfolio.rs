//! Bulk screening of an asset register against one climate event.
//!
//! The register is a CSV file with one asset per row. Column names follow the
//! asset record (`asset_type`, `material`, `age_years`, geometry fields); blank
//! cells fall back to the geometry defaults. Rows that fail to parse or
//! validate are reported back with their line number.

use super::analysis::{self, AssessmentResult};
use super::classification::RiskLevel;
use super::domain::{ClimateEvent, EventType, InfrastructureAsset};
use super::EngineError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug)]
pub enum PortfolioImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    TooManyRows { limit: usize },
}

impl std::fmt::Display for PortfolioImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortfolioImportError::Io(err) => write!(f, "failed to read asset register: {}", err),
            PortfolioImportError::Csv(err) => write!(f, "invalid asset register CSV: {}", err),
            PortfolioImportError::TooManyRows { limit } => {
                write!(f, "asset register exceeds the {} row limit", limit)
            }
        }
    }
}

impl std::error::Error for PortfolioImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortfolioImportError::Io(err) => Some(err),
            PortfolioImportError::Csv(err) => Some(err),
            PortfolioImportError::TooManyRows { .. } => None,
        }
    }
}

impl From<std::io::Error> for PortfolioImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for PortfolioImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// A row that could not be turned into an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredAsset {
    pub line: u64,
    pub asset: InfrastructureAsset,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetRegister {
    pub assets: Vec<RegisteredAsset>,
    pub rejected: Vec<RejectedRow>,
}

pub struct PortfolioImporter;

impl PortfolioImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        row_limit: usize,
    ) -> Result<AssetRegister, PortfolioImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, row_limit)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        row_limit: usize,
    ) -> Result<AssetRegister, PortfolioImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut register = AssetRegister::default();

        for (index, record) in csv_reader.records().enumerate() {
            if index >= row_limit {
                return Err(PortfolioImportError::TooManyRows { limit: row_limit });
            }

            let record = record?;
            let line = record
                .position()
                .map_or(index as u64 + 2, |position| position.line());

            let parsed = record
                .deserialize::<RegisterRow>(Some(&headers))
                .map_err(|err| err.to_string())
                .and_then(|row| {
                    InfrastructureAsset::from_value(row.into_value()).map_err(|err| err.to_string())
                });

            match parsed {
                Ok(asset) => register.assets.push(RegisteredAsset { line, asset }),
                Err(reason) => {
                    warn!(line, %reason, "skipping asset register row");
                    register.rejected.push(RejectedRow { line, reason });
                }
            }
        }

        Ok(register)
    }
}

#[derive(Debug, Deserialize)]
struct RegisterRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(default, alias = "type", deserialize_with = "empty_string_as_none")]
    asset_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    material: Option<String>,
    #[serde(default, alias = "age")]
    age_years: Option<f64>,
    #[serde(default)]
    span_length: Option<f64>,
    #[serde(default)]
    height_above_water: Option<f64>,
    #[serde(default)]
    load_capacity: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    foundation_type: Option<String>,
    #[serde(default)]
    floors: Option<u32>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    floor_area: Option<f64>,
    #[serde(default)]
    foundation_depth: Option<f64>,
    #[serde(default)]
    has_basement: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    cooling_system: Option<String>,
    #[serde(default)]
    length: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    traffic_volume: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    drainage_quality: Option<String>,
    #[serde(default)]
    elevation: Option<f64>,
}

impl RegisterRow {
    /// Only populated cells are forwarded so the asset parser applies its own
    /// defaults and error messages.
    fn into_value(self) -> Value {
        let mut fields = Map::new();
        let mut put = |key: &str, value: Option<Value>| {
            if let Some(value) = value {
                fields.insert(key.to_string(), value);
            }
        };

        put("id", self.id.map(Value::from));
        put("location", self.location.map(Value::from));
        put("asset_type", self.asset_type.map(Value::from));
        put("material", self.material.map(Value::from));
        put("age_years", self.age_years.map(Value::from));
        put("span_length", self.span_length.map(Value::from));
        put("height_above_water", self.height_above_water.map(Value::from));
        put("load_capacity", self.load_capacity.map(Value::from));
        put("foundation_type", self.foundation_type.map(Value::from));
        put("floors", self.floors.map(Value::from));
        put("height", self.height.map(Value::from));
        put("floor_area", self.floor_area.map(Value::from));
        put("foundation_depth", self.foundation_depth.map(Value::from));
        put("has_basement", self.has_basement.map(Value::from));
        put("cooling_system", self.cooling_system.map(Value::from));
        put("length", self.length.map(Value::from));
        put("width", self.width.map(Value::from));
        put("traffic_volume", self.traffic_volume.map(Value::from));
        put("drainage_quality", self.drainage_quality.map(Value::from));
        put("elevation", self.elevation.map(Value::from));

        Value::Object(fields)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenedAsset {
    pub line: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub assessment: AssessmentResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierCount {
    pub risk_level: RiskLevel,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioScreening {
    pub event_type: EventType,
    pub screened: usize,
    /// Highest stress first.
    pub results: Vec<ScreenedAsset>,
    pub tiers: Vec<TierCount>,
    pub rejected: Vec<RejectedRow>,
}

impl PortfolioScreening {
    pub fn count(&self, risk_level: RiskLevel) -> usize {
        self.tiers
            .iter()
            .find(|tier| tier.risk_level == risk_level)
            .map_or(0, |tier| tier.count)
    }
}

pub fn screen(
    register: AssetRegister,
    event: &ClimateEvent,
) -> Result<PortfolioScreening, EngineError> {
    event.validate()?;

    let mut results = Vec::with_capacity(register.assets.len());
    for entry in register.assets {
        let assessment = analysis::run(&entry.asset, event, &[])?;
        results.push(ScreenedAsset {
            line: entry.line,
            location: entry.asset.location().map(str::to_string),
            assessment,
        });
    }

    results.sort_by(|left, right| {
        right
            .assessment
            .stress_score
            .total_cmp(&left.assessment.stress_score)
    });

    let tiers = RiskLevel::ordered()
        .into_iter()
        .map(|risk_level| TierCount {
            risk_level,
            count: results
                .iter()
                .filter(|result| result.assessment.risk_level == risk_level)
                .count(),
        })
        .collect();

    Ok(PortfolioScreening {
        event_type: event.event_type(),
        screened: results.len(),
        results,
        tiers,
        rejected: register.rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::presets::preset_event;
    use std::io::Cursor;

    const REGISTER: &str = "id,location,asset_type,material,age_years,span_length,height_above_water,foundation_type,floors,height,cooling_system,drainage_quality\n\
B-1,River crossing,bridge,steel,40,150,12,pile,,,,\n\
H-7,Downtown,building,concrete,60,,,,15,45,natural,\n\
R-2,Ring road,road,concrete,25,,,,,,,poor\n\
X-9,Harbour,bridge,unobtanium,10,,,,,,,\n";

    #[test]
    fn importer_collects_assets_and_rejects_bad_rows() {
        let register =
            PortfolioImporter::from_reader(Cursor::new(REGISTER), 100).expect("import succeeds");

        assert_eq!(register.assets.len(), 3);
        assert_eq!(register.assets[0].asset.id(), Some("B-1"));
        assert_eq!(register.assets[1].line, 3);

        assert_eq!(register.rejected.len(), 1);
        assert_eq!(register.rejected[0].line, 5);
        assert!(register.rejected[0].reason.contains("unobtanium"));
    }

    #[test]
    fn malformed_numbers_are_rejected_per_row() {
        let csv = "asset_type,material,age_years\nbridge,steel,forty\nroad,concrete,5\n";
        let register =
            PortfolioImporter::from_reader(Cursor::new(csv), 100).expect("import succeeds");

        assert_eq!(register.assets.len(), 1);
        assert_eq!(register.rejected.len(), 1);
        assert_eq!(register.rejected[0].line, 2);
    }

    #[test]
    fn type_and_age_headers_are_accepted() {
        let csv = "type,material,age\nbuilding,masonry,80\n";
        let register =
            PortfolioImporter::from_reader(Cursor::new(csv), 100).expect("import succeeds");
        assert_eq!(register.assets.len(), 1);
        assert_eq!(register.assets[0].asset.age_years(), 80.0);
    }

    #[test]
    fn row_limit_is_enforced() {
        let csv = "asset_type,material,age_years\nroad,concrete,1\nroad,concrete,2\nroad,concrete,3\n";
        match PortfolioImporter::from_reader(Cursor::new(csv), 2) {
            Err(PortfolioImportError::TooManyRows { limit }) => assert_eq!(limit, 2),
            other => panic!("expected row limit error, got {other:?}"),
        }
    }

    #[test]
    fn screening_orders_by_stress_and_counts_tiers() {
        let register =
            PortfolioImporter::from_reader(Cursor::new(REGISTER), 100).expect("import succeeds");
        let event = preset_event("100year_flood").expect("preset");

        let screening = screen(register, &event).expect("screening succeeds");

        assert_eq!(screening.screened, 3);
        assert_eq!(screening.rejected.len(), 1);
        assert!(screening
            .results
            .windows(2)
            .all(|pair| pair[0].assessment.stress_score >= pair[1].assessment.stress_score));

        let counted: usize = screening.tiers.iter().map(|tier| tier.count).sum();
        assert_eq!(counted, screening.screened);
        assert_eq!(screening.tiers.len(), 4);
    }
}
