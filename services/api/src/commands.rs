use crate::infra::{parse_reinforcement, CompareRequest, EventSource, RankRequest};
use crate::render;
use clap::{ArgGroup, Args, ValueEnum};
use climate_twin::config::AnalysisConfig;
use climate_twin::engine::{
    climate_presets, material_catalog, reinforcement_catalog, InfrastructureAsset,
    PortfolioImporter, Reinforcement, StressEngine,
};
use climate_twin::error::AppError;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("event_source").required(true).args(["event", "preset"])))]
pub(crate) struct AnalyzeArgs {
    /// JSON file describing the asset
    #[arg(long)]
    pub(crate) asset: PathBuf,
    /// JSON file describing the climate event
    #[arg(long)]
    pub(crate) event: Option<PathBuf>,
    /// Climate preset id to use instead of an event file
    #[arg(long)]
    pub(crate) preset: Option<String>,
    /// Reinforcement strategy to apply (repeatable)
    #[arg(long, value_parser = parse_reinforcement)]
    pub(crate) reinforce: Vec<Reinforcement>,
    /// Print the raw JSON result
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// JSON file with `baseline` and `modified` scenarios, or a `scenarios` list with --rank
    #[arg(long)]
    pub(crate) request: PathBuf,
    /// Rank every scenario in the file instead of comparing two
    #[arg(long)]
    pub(crate) rank: bool,
    /// Print the raw JSON result
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("event_source").required(true).args(["event", "preset"])))]
pub(crate) struct PortfolioArgs {
    /// Asset register CSV, one asset per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// JSON file describing the climate event
    #[arg(long)]
    pub(crate) event: Option<PathBuf>,
    /// Climate preset id to use instead of an event file
    #[arg(long)]
    pub(crate) preset: Option<String>,
    /// Only list the most stressed assets
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Print the raw JSON result
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Restrict the listing to one catalog
    #[arg(value_enum)]
    pub(crate) section: Option<CatalogSection>,
    /// Print the raw JSON catalog
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CatalogSection {
    Materials,
    Reinforcements,
    Presets,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let asset = InfrastructureAsset::from_value(read_json(&args.asset)?)?;
    let event = event_source(args.event.as_deref(), args.preset)?.resolve()?;

    let result = StressEngine::new().analyze_reinforced(&asset, &event, &args.reinforce)?;
    if args.json {
        return print_json(&result);
    }
    render::render_assessment(&asset, &result);
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let request = read_json(&args.request)?;
    let engine = StressEngine::new();

    if args.rank {
        let request: RankRequest = serde_json::from_value(request)?;
        let ranking = engine.rank(&request.into_scenarios()?)?;
        if args.json {
            return print_json(&ranking);
        }
        render::render_ranking(&ranking);
    } else {
        let request: CompareRequest = serde_json::from_value(request)?;
        let (baseline, modified) = request.into_scenarios()?;
        let comparison = engine.compare(&baseline, &modified)?;
        if args.json {
            return print_json(&comparison);
        }
        render::render_comparison(&comparison);
    }
    Ok(())
}

pub(crate) fn run_portfolio(args: PortfolioArgs, limits: &AnalysisConfig) -> Result<(), AppError> {
    let event = event_source(args.event.as_deref(), args.preset)?.resolve()?;
    let register = PortfolioImporter::from_path(&args.csv, limits.portfolio_row_limit)?;
    let screening = StressEngine::new().screen_portfolio(register, &event)?;

    if args.json {
        return print_json(&screening);
    }
    render::render_screening(&screening, args.top);
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let show = |section: CatalogSection| args.section.map_or(true, |chosen| chosen == section);

    if args.json {
        let mut catalog = serde_json::Map::new();
        if show(CatalogSection::Materials) {
            catalog.insert("materials".into(), serde_json::to_value(material_catalog())?);
        }
        if show(CatalogSection::Reinforcements) {
            catalog.insert(
                "reinforcements".into(),
                serde_json::to_value(reinforcement_catalog())?,
            );
        }
        if show(CatalogSection::Presets) {
            catalog.insert("climate_scenarios".into(), serde_json::to_value(climate_presets())?);
        }
        return print_json(&catalog);
    }

    if show(CatalogSection::Materials) {
        render::render_materials(&material_catalog());
    }
    if show(CatalogSection::Reinforcements) {
        render::render_reinforcements(&reinforcement_catalog());
    }
    if show(CatalogSection::Presets) {
        render::render_presets(&climate_presets());
    }
    Ok(())
}

fn event_source(event: Option<&Path>, preset: Option<String>) -> Result<EventSource, AppError> {
    Ok(EventSource {
        event: event.map(read_json).transpose()?,
        climate_scenario: preset,
    })
}

fn read_json(path: &Path) -> Result<Value, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use climate_twin::engine::PortfolioImportError;

    fn sample_register() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../crates/climate-twin/sample_portfolio.csv")
    }

    fn portfolio_args() -> PortfolioArgs {
        PortfolioArgs {
            csv: sample_register(),
            event: None,
            preset: Some("severe_storm".to_string()),
            top: Some(3),
            json: false,
        }
    }

    #[test]
    fn portfolio_screens_sample_register_within_configured_limit() {
        run_portfolio(portfolio_args(), &AnalysisConfig::default()).expect("screening succeeds");
    }

    #[test]
    fn portfolio_honours_configured_row_limit() {
        let limits = AnalysisConfig {
            portfolio_row_limit: 2,
        };
        match run_portfolio(portfolio_args(), &limits) {
            Err(AppError::Portfolio(PortfolioImportError::TooManyRows { limit })) => {
                assert_eq!(limit, 2)
            }
            other => panic!("expected row limit error, got {other:?}"),
        }
    }
}
