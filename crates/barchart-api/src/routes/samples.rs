//! Routes for sample generation, chart rendering and CSV export.

use axum::extract::Query;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use barchart_render::chart;
use barchart_sample::application::command_handlers;
use barchart_sample::application::query_handlers::{self, SampleView};
use barchart_sample::domain::commands::GenerateSample;
use barchart_sample::domain::controls::ChartControls;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Path of the CSV export, as linked from the page.
pub const EXPORT_PATH: &str = "/api/v1/samples/export.csv";

/// Query string for `GET /api/v1/samples`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SampleQuery {
    /// Generator seed.
    pub seed: u32,
    /// Inclusive lower bound.
    pub lower_bound: u32,
    /// Exclusive upper bound.
    pub upper_bound: u32,
}

impl Default for SampleQuery {
    fn default() -> Self {
        let controls = ChartControls::default();
        Self {
            seed: controls.seed,
            lower_bound: controls.min_value,
            upper_bound: controls.max_value,
        }
    }
}

/// GET /
#[instrument(skip_all, fields(seed = query.seed, lower = query.lower_bound, upper = query.upper_bound))]
async fn get_sample(Query(query): Query<SampleQuery>) -> Result<Json<SampleView>, ApiError> {
    let view = query_handlers::get_sample(query.seed, query.lower_bound, query.upper_bound)?;
    Ok(Json(view))
}

/// POST /generate
#[instrument(skip_all)]
async fn generate(Json(controls): Json<ChartControls>) -> Result<Json<SampleView>, ApiError> {
    let command = GenerateSample {
        correlation_id: Uuid::new_v4(),
        controls,
    };

    info!(correlation_id = %command.correlation_id, "handling generate_sample command");

    let view = command_handlers::handle_generate_sample(&command)?;
    Ok(Json(view))
}

/// GET /chart.svg
#[instrument(skip_all, fields(seed = controls.seed, color = %controls.color))]
async fn chart_svg(Query(controls): Query<ChartControls>) -> Result<impl IntoResponse, ApiError> {
    let sample = controls.sample()?;
    let svg = chart::render_svg(&sample, controls.color)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// GET /export.csv
#[instrument(skip_all, fields(seed = controls.seed))]
async fn export_csv(Query(controls): Query<ChartControls>) -> Result<impl IntoResponse, ApiError> {
    let export = query_handlers::export_csv(&controls)?;
    let disposition = format!("attachment; filename=\"{}\"", export.file_name);

    info!(bytes = export.body.len(), "serving csv export");

    Ok((
        [
            (header::CONTENT_TYPE, export.mime_type.to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    ))
}

/// Returns the router for the sample endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_sample))
        .route("/generate", post(generate))
        .route("/chart.svg", get(chart_svg))
        .route("/export.csv", get(export_csv))
}
