//! The HTML control surface.

use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use barchart_render::chart;
use barchart_render::page::{PageBody, PageModel, render_page};
use barchart_sample::domain::controls::ChartControls;
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::routes::samples::EXPORT_PATH;
use crate::state::AppState;

fn render(
    state: &AppState,
    controls: &ChartControls,
    body: PageBody<'_>,
) -> Html<String> {
    Html(render_page(&PageModel {
        controls,
        body,
        export_path: EXPORT_PATH,
        source_url: &state.config.source_url,
    }))
}

/// GET /
///
/// Every submission of the sidebar form lands here and regenerates the
/// chart from the submitted controls. Errors are shown in place of the chart
/// so the user can correct the controls and submit again.
#[instrument(skip_all)]
async fn index(
    State(state): State<AppState>,
    query: Result<Query<ChartControls>, QueryRejection>,
) -> (StatusCode, Html<String>) {
    let controls = match query {
        Ok(Query(controls)) => controls,
        Err(rejection) => {
            warn!(error = %rejection, "rejected control values");
            let message = rejection.body_text();
            let page = render(
                &state,
                &ChartControls::default(),
                PageBody::Error { message: &message },
            );
            return (rejection.status(), page);
        }
    };

    let outcome = controls
        .sample()
        .map_err(ApiError::from)
        .and_then(|sample| {
            let svg = chart::render_svg(&sample, controls.color)?;
            Ok((sample, svg))
        });

    match outcome {
        Ok((sample, svg)) => {
            info!(seed = controls.seed, color = %controls.color, "page rendered");
            let page = render(&state, &controls, PageBody::Chart { sample: &sample, svg: &svg });
            (StatusCode::OK, page)
        }
        Err(err) => {
            let (status, code) = err.status_and_code();
            warn!(error = %err, code, "page rendered with error");
            let message = err.to_string();
            (status, render(&state, &controls, PageBody::Error { message: &message }))
        }
    }
}

/// Returns the router for the control surface.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
