//! HTTP route handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::building::Building;
use crate::domain::{PoiId, PointOfInterest, Vector3};
use crate::planner::{NavigationPreferences, PlanError, PlanResult, Planner, PreferencesError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/destinations", get(list_destinations))
        .route("/route/plan", post(plan_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Default, Deserialize)]
struct DestinationsQuery {
    floor: Option<i32>,
}

/// List the destinations in the building, optionally for one floor.
async fn list_destinations(
    State(state): State<AppState>,
    Query(query): Query<DestinationsQuery>,
) -> Json<DestinationsResponse> {
    let destinations = state
        .building
        .pois()
        .iter()
        .filter(|p| query.floor.is_none_or(|f| p.floor == f))
        .map(DestinationResult::from_poi)
        .collect();

    Json(DestinationsResponse {
        building: state.building.name().to_string(),
        destinations,
    })
}

/// Plan a route from the user's position to a destination.
async fn plan_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanRouteResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, body = %String::from_utf8_lossy(&body), "JSON parse error");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let destination_id =
        PoiId::parse(&req.destination_id).map_err(|e| AppError::BadRequest {
            message: format!("Invalid destination id: {e}"),
        })?;

    let destination = state
        .building
        .poi(&destination_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown destination: {destination_id}"),
        })?;

    let start = Vector3::from(req.start);
    if !start.is_finite() {
        return Err(AppError::BadRequest {
            message: "Start position must be finite".to_string(),
        });
    }

    let preferences = req
        .preferences
        .map(PreferencesDto::into_preferences)
        .unwrap_or_default();
    preferences.validate()?;

    // Routes depend on the start position only through its nearest node
    let Some(start_index) = state.building.nodes().nearest_index(&start) else {
        return Ok(Json(PlanRouteResponse::from_result(&PlanResult::empty())));
    };
    let start_node = state.building.nodes().node(start_index).id();

    let key = state.routes.key(&destination_id, start_node, &preferences);
    if let Some(cached) = state.routes.get(&key).await {
        debug!(destination = %destination_id, start = %start_node, "Route cache hit");
        return Ok(Json(PlanRouteResponse::from_result(&cached)));
    }

    let result = run_planner(
        state.building.clone(),
        start,
        destination,
        preferences,
        state.plan_timeout,
    )
    .await?;

    info!(
        destination = %destination_id,
        found = result.route.is_some(),
        nodes_expanded = result.nodes_expanded,
        "Planned route"
    );

    let result = Arc::new(result);
    state.routes.insert(key, result.clone()).await;
    debug!(entries = state.routes.entry_count(), "Route cached");

    Ok(Json(PlanRouteResponse::from_result(&result)))
}

/// Run the planner on the blocking pool, cancelling it if `timeout` elapses.
async fn run_planner(
    building: Arc<Building>,
    start: Vector3,
    destination: PointOfInterest,
    preferences: NavigationPreferences,
    timeout: Duration,
) -> Result<PlanResult, AppError> {
    let cancel = Arc::new(AtomicBool::new(false));
    run_with_timeout(timeout, cancel, move |flag| {
        Planner::new(building.nodes(), &preferences)
            .with_cancel_flag(flag)
            .plan(start, &destination)
    })
    .await
}

/// Run `task` on the blocking pool. If `timeout` elapses first, `cancel` is
/// raised and the request fails with `AppError::Unavailable`.
async fn run_with_timeout<T, F>(
    timeout: Duration,
    cancel: Arc<AtomicBool>,
    task: F,
) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&AtomicBool) -> Result<T, PlanError> + Send + 'static,
{
    let flag = cancel.clone();
    let task = tokio::task::spawn_blocking(move || task(&flag));

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result.map_err(AppError::from),
        Ok(Err(e)) => Err(AppError::Internal {
            message: format!("Planner task failed: {e}"),
        }),
        Err(_) => {
            cancel.store(true, Ordering::Relaxed);
            Err(AppError::Unavailable {
                message: format!("Route planning exceeded {} ms", timeout.as_millis()),
            })
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<PreferencesError> for AppError {
    fn from(e: PreferencesError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidPreferences(e) => e.into(),
            PlanError::Cancelled => AppError::Unavailable {
                message: "Route planning was cancelled".to_string(),
            },
            PlanError::InvalidRoute(e) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Unavailable { message }
            | AppError::Internal { message } => message,
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
