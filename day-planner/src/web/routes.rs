//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::directions::DirectionsService;
use crate::planner::{PlanError, Planner};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Message returned when the two address lists differ in length.
pub const MISMATCHED_LISTS_MESSAGE: &str =
    "The number of starting points and destinations must be equal.";

/// Message returned when the travel date cannot be parsed.
pub const INVALID_TRAVEL_DATE_MESSAGE: &str = "The travel date must be given as YYYY-MM-DD.";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<D>(state: AppState<D>, static_dir: &str) -> Router
where
    D: DirectionsService + 'static,
{
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/directions", post(plan_directions::<D>))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the route form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan one single-leg day plan per submitted start/destination pair.
///
/// The pairs share one clock: each starts when the previous stay ends. The
/// first pair departs at the start of the travel day, which is today unless
/// the form names a date.
async fn plan_directions<D>(
    State(state): State<AppState<D>>,
    headers: HeaderMap,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError>
where
    D: DirectionsService + 'static,
{
    let form = PlanRoutesForm::from_fields(fields);
    let pairs = form.pairs().ok_or_else(|| AppError::BadRequest {
        message: MISMATCHED_LISTS_MESSAGE.to_string(),
    })?;

    let travel_date = form.travel_date().map_err(|_| AppError::BadRequest {
        message: INVALID_TRAVEL_DATE_MESSAGE.to_string(),
    })?;

    info!(pairs = pairs.len(), ?travel_date, "planning routes");

    let planner = Planner::new(&state.estimator, &state.config);
    let start_time = travel_date.map(|date| date.and_time(state.config.day_start));
    let (routes, _) = planner.plan_route_set(&pairs, start_time).await?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let day = travel_date.unwrap_or_else(|| planner.default_start().date());
        let template = DirectionsTemplate::from_route_set(&routes, day, state.config.mode);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(PlanRoutesResponse::from_route_set(&routes)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Estimate(_) => AppError::BadGateway {
                message: e.to_string(),
            },
            PlanError::OutOfRange(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        (status, message).into_response()
    }
}
