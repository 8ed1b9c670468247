use crate::infra::{AppState, CompareRequest, EventSource, RankRequest};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use climate_twin::engine::{
    climate_presets, material_catalog, reinforcement_catalog, AssessmentResult, ClimatePreset,
    InfrastructureAsset, MaterialCatalogEntry, PortfolioImporter, PortfolioScreening,
    Reinforcement, ReinforcementCatalogEntry, ScenarioComparison, ScenarioRanking,
};
use climate_twin::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::Cursor;
use std::sync::atomic::Ordering;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct AnalysisRequest {
    pub(crate) asset: Value,
    #[serde(flatten)]
    pub(crate) event: EventSource,
    #[serde(default)]
    pub(crate) reinforcements: Vec<Reinforcement>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalysisResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) asset: InfrastructureAsset,
    #[serde(flatten)]
    pub(crate) assessment: AssessmentResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PortfolioRequest {
    pub(crate) csv: String,
    #[serde(flatten)]
    pub(crate) event: EventSource,
}

pub(crate) fn analysis_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/analysis", post(analysis_endpoint))
        .route("/api/v1/scenarios/compare", post(compare_endpoint))
        .route("/api/v1/scenarios/rank", post(rank_endpoint))
        .route("/api/v1/portfolio/screen", post(portfolio_endpoint))
        .route("/api/v1/materials", get(materials_endpoint))
        .route("/api/v1/reinforcements", get(reinforcements_endpoint))
        .route("/api/v1/climate-scenarios", get(climate_scenarios_endpoint))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analysis_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let AnalysisRequest {
        asset,
        event,
        reinforcements,
    } = payload;

    let asset = InfrastructureAsset::from_value(asset)?;
    let event = event.resolve()?;
    let assessment = state
        .engine
        .analyze_reinforced(&asset, &event, &reinforcements)?;

    Ok(Json(AnalysisResponse {
        generated_at: Utc::now(),
        asset,
        assessment,
    }))
}

pub(crate) async fn compare_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<ScenarioComparison>, AppError> {
    let (baseline, modified) = payload.into_scenarios()?;
    let comparison = state.engine.compare(&baseline, &modified)?;
    Ok(Json(comparison))
}

pub(crate) async fn rank_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RankRequest>,
) -> Result<Json<ScenarioRanking>, AppError> {
    let scenarios = payload.into_scenarios()?;
    Ok(Json(state.engine.rank(&scenarios)?))
}

pub(crate) async fn portfolio_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<PortfolioRequest>,
) -> Result<Json<PortfolioScreening>, AppError> {
    let PortfolioRequest { csv, event } = payload;

    let event = event.resolve()?;
    let register =
        PortfolioImporter::from_reader(Cursor::new(csv.into_bytes()), state.portfolio_row_limit)?;
    let screening = state.engine.screen_portfolio(register, &event)?;

    info!(
        screened = screening.screened,
        rejected = screening.rejected.len(),
        event_type = screening.event_type.key(),
        "portfolio screened"
    );

    Ok(Json(screening))
}

pub(crate) async fn materials_endpoint() -> Json<Vec<MaterialCatalogEntry>> {
    Json(material_catalog())
}

pub(crate) async fn reinforcements_endpoint() -> Json<Vec<ReinforcementCatalogEntry>> {
    Json(reinforcement_catalog())
}

pub(crate) async fn climate_scenarios_endpoint() -> Json<Vec<ClimatePreset>> {
    Json(climate_presets())
}
