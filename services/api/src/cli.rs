use crate::commands::{
    run_analyze, run_catalog, run_compare, run_portfolio, AnalyzeArgs, CatalogArgs, CompareArgs,
    PortfolioArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use climate_twin::config::AppConfig;
use climate_twin::error::AppError;
use climate_twin::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Climate Twin",
    about = "Stress-test infrastructure digital twins against extreme climate events",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess one asset against one climate event
    Analyze(AnalyzeArgs),
    /// Compare a baseline configuration with a modified one
    Compare(CompareArgs),
    /// Screen an asset register CSV against one climate event
    Portfolio(PortfolioArgs),
    /// List materials, reinforcement strategies, and climate presets
    Catalog(CatalogArgs),
    /// Run the reference scenarios end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => {
            command_config()?;
            run_analyze(args)
        }
        Command::Compare(args) => {
            command_config()?;
            run_compare(args)
        }
        Command::Portfolio(args) => run_portfolio(args, &command_config()?.analysis),
        Command::Catalog(args) => {
            command_config()?;
            run_catalog(args)
        }
        Command::Demo(args) => run_demo(args, &command_config()?.analysis),
    }
}

/// Configuration and logging for one-shot commands; `serve` sets up its own.
fn command_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}
