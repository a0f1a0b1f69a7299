//! Dashboard Route
//!
//! GET /api/intern/:id/dashboard/ - per-intern dashboard summary.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::DashboardResponse;
use crate::api::state::AppState;

/// GET /api/intern/:id/dashboard/
///
/// Returns the dashboard summary for a registered intern, or a deterministic
/// demo record when the id is unknown (the app has no signup flow, so most
/// ids arriving from the login screen are synthetic).
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Json<DashboardResponse> {
    let record = state
        .registry
        .get(id)
        .unwrap_or_else(|| state.registry.demo_intern(id));

    tracing::debug!(intern_id = id, name = %record.intern.name, "serving dashboard");

    Json(DashboardResponse::from_record(&record))
}
