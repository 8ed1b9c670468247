use crate::render;
use clap::Args;
use climate_twin::engine::domain::{
    BridgeGeometry, BuildingGeometry, CoolingSystem, FloodEvent, FoundationType, HeatwaveEvent,
    SeverityLabel,
};
use climate_twin::engine::{
    preset_event, ClimateEvent, InfrastructureAsset, Material, PortfolioImporter, Reinforcement,
    Scenario, StressEngine,
};
use climate_twin::config::AnalysisConfig;
use climate_twin::error::AppError;
use std::io::Cursor;

const SAMPLE_PORTFOLIO: &str = include_str!("../../../crates/climate-twin/sample_portfolio.csv");

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Climate preset used for the portfolio screening step
    #[arg(long, default_value = "100year_flood")]
    pub(crate) preset: String,
    /// Skip the portfolio screening step
    #[arg(long)]
    pub(crate) skip_portfolio: bool,
}

pub(crate) fn run_demo(args: DemoArgs, limits: &AnalysisConfig) -> Result<(), AppError> {
    let engine = StressEngine::new();

    println!("Climate stress analysis demo");

    println!("\n1. Coastal steel bridge vs high-severity flood");
    let bridge = coastal_bridge()?;
    let flood = river_flood(4.0);
    let result = engine.analyze(&bridge, &flood)?;
    render::render_assessment(&bridge, &result);

    println!("\n2. Naturally ventilated concrete tower vs record heatwave");
    let tower = concrete_tower()?;
    let heatwave = record_heatwave();
    let result = engine.analyze(&tower, &heatwave)?;
    render::render_assessment(&tower, &result);

    println!("\n3. Retrofit comparison for a 50-year bridge");
    let ageing = ageing_bridge()?;
    let baseline = Scenario::new("Current bridge", ageing.clone(), river_flood(6.0));
    let modified = Scenario::new("Retrofitted bridge", ageing, river_flood(6.0))
        .with_reinforcements(&[
            Reinforcement::FoundationStrengthening,
            Reinforcement::DeckRehabilitation,
        ]);
    let comparison = engine.compare(&baseline, &modified)?;
    render::render_comparison(&comparison);

    if args.skip_portfolio {
        return Ok(());
    }

    println!("\n4. Sample asset register vs '{}'", args.preset);
    let event = preset_event(&args.preset)?;
    let register =
        PortfolioImporter::from_reader(Cursor::new(SAMPLE_PORTFOLIO), limits.portfolio_row_limit)?;
    let screening = engine.screen_portfolio(register, &event)?;
    render::render_screening(&screening, Some(5));

    Ok(())
}

fn coastal_bridge() -> Result<InfrastructureAsset, AppError> {
    let bridge = InfrastructureAsset::bridge(
        Material::Steel,
        40.0,
        BridgeGeometry {
            span_length: 150.0,
            height_above_water: 12.0,
            load_capacity: 80.0,
            foundation_type: FoundationType::Pile,
        },
    )?;
    Ok(bridge.with_id("BR-150").with_location("Harbour crossing"))
}

fn ageing_bridge() -> Result<InfrastructureAsset, AppError> {
    let bridge = InfrastructureAsset::bridge(
        Material::Steel,
        50.0,
        BridgeGeometry {
            span_length: 150.0,
            height_above_water: 15.0,
            load_capacity: 80.0,
            foundation_type: FoundationType::Pile,
        },
    )?;
    Ok(bridge.with_id("BR-050"))
}

fn concrete_tower() -> Result<InfrastructureAsset, AppError> {
    let tower = InfrastructureAsset::building(
        Material::Concrete,
        60.0,
        BuildingGeometry {
            floors: 15,
            height: 45.0,
            floor_area: 3000.0,
            cooling_system: CoolingSystem::Natural,
            ..BuildingGeometry::default()
        },
    )?;
    Ok(tower.with_id("BD-015"))
}

fn river_flood(water_level: f64) -> ClimateEvent {
    ClimateEvent::Flood(FloodEvent {
        rainfall_intensity: 100.0,
        water_level,
        duration_hours: 18.0,
        severity: Some(SeverityLabel::High),
        flow_velocity: None,
    })
}

fn record_heatwave() -> ClimateEvent {
    ClimateEvent::Heatwave(HeatwaveEvent {
        max_temperature: 48.0,
        min_temperature: 35.0,
        duration_days: 12.0,
        humidity: 30.0,
        severity: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_every_step() {
        run_demo(
            DemoArgs {
                preset: "hurricane_winds".to_string(),
                skip_portfolio: false,
            },
            &AnalysisConfig::default(),
        )
        .expect("demo completes");
    }

    #[test]
    fn demo_rejects_unknown_preset() {
        let result = run_demo(
            DemoArgs {
                preset: "meteor_strike".to_string(),
                skip_portfolio: false,
            },
            &AnalysisConfig::default(),
        );
        assert!(matches!(result, Err(AppError::Engine(_))));
    }
}
