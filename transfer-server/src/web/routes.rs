//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::domain::GeometryError;
use crate::features::FeatureCollection;
use crate::instructions::instructions_for_collection;
use crate::journey_maps::{TransferError, TransferRequest};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/stations", get(search_stations))
        .route("/transfer", post(plan_transfer))
        .route("/api/instructions", post(synthesize_instructions))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn render(template: &impl Template) -> Html<String> {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Index page with the transfer form.
async fn index_page() -> Html<String> {
    render(&IndexTemplate::empty())
}

async fn not_found() -> (StatusCode, Html<String>) {
    let page = ErrorTemplate {
        title: "Not found".to_string(),
        message: "There is nothing at this address.".to_string(),
    };
    (StatusCode::NOT_FOUND, render(&page))
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<Vec<StationResult>> {
    let stations = state
        .stations
        .search(&req.query, req.effective_limit())
        .into_iter()
        .map(StationResult::from)
        .collect();

    Json(stations)
}

/// Fetch a transfer and render its instructions below the form.
///
/// Failures are shown in place of the instructions rather than as an
/// error page, so the form stays filled in.
async fn plan_transfer(State(state): State<AppState>, Form(form): Form<TransferForm>) -> Html<String> {
    let request = form.to_request();

    let instructions = match transfer_instructions(&state, &request).await {
        Ok(instructions) => {
            info!(
                station = %request.station_id,
                from_track = %request.from_track,
                to_track = %request.to_track,
                steps = instructions.len(),
                "planned transfer"
            );
            instructions
        }
        Err(e) => {
            warn!(station = %request.station_id, error = %e, "transfer failed");
            vec![format!("An error occurred: {e}")]
        }
    };

    render(&IndexTemplate::with_result(&form, instructions))
}

async fn transfer_instructions(
    state: &AppState,
    request: &TransferRequest,
) -> Result<Vec<String>, AppError> {
    if request.station_id.is_empty() {
        return Err(AppError::BadRequest {
            message: "no station selected".to_string(),
        });
    }

    let collection = state.transfers.fetch(request).await?;
    Ok(instructions_for_collection(&collection, &state.synthesis)?)
}

/// Turn a feature collection into instructions.
async fn synthesize_instructions(
    State(state): State<AppState>,
    Json(collection): Json<FeatureCollection>,
) -> Result<Json<InstructionsResponse>, AppError> {
    let instructions = instructions_for_collection(&collection, &state.synthesis)?;
    Ok(Json(InstructionsResponse { instructions }))
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Geometry(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Transfer(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
