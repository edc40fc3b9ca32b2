//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual aggregation.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use super::dto::{DashboardSnapshot, DashboardView, HealthResponse, SnapshotQuery};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services::snapshot_from_repository;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Query string of the dashboard endpoints; a malformed one becomes a JSON 400.
type SnapshotParams = Result<Query<SnapshotQuery>, QueryRejection>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Verify the service is running and the repository answers.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repository_status,
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/dashboard/snapshot?at=<RFC3339>
///
/// Aggregate all panels at the requested instant (default: now).
pub async fn get_snapshot(
    State(state): State<AppState>,
    params: SnapshotParams,
) -> HandlerResult<DashboardSnapshot> {
    let Query(query) = params?;
    let snapshot =
        snapshot_from_repository(state.repository.as_ref(), query.instant(), &state.config)
            .await?;
    Ok(Json(snapshot))
}

/// GET /v1/dashboard/view?at=<RFC3339>
///
/// Same snapshot, pre-formatted for display.
pub async fn get_view(
    State(state): State<AppState>,
    params: SnapshotParams,
) -> HandlerResult<DashboardView> {
    let Query(query) = params?;
    let snapshot =
        snapshot_from_repository(state.repository.as_ref(), query.instant(), &state.config)
            .await?;
    Ok(Json(DashboardView::from_snapshot(
        &snapshot,
        state.config.currency_code.clone(),
    )))
}
