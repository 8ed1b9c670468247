pub mod asset;
pub mod event;
pub mod materials;

pub use asset::{
    AssetGeometry, AssetType, BridgeGeometry, BuildingGeometry, CoolingSystem, DrainageQuality,
    FoundationType, InfrastructureAsset, RoadGeometry,
};
pub use event::{ClimateEvent, EventType, FloodEvent, HeatwaveEvent, SeverityLabel, WindEvent};
pub use materials::{material_catalog, Material, MaterialCatalogEntry, MaterialProperties};
