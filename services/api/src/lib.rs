mod cli;
mod commands;
mod demo;
mod infra;
mod render;
mod routes;
mod server;

use climate_twin::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
