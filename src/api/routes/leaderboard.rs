//! Leaderboard Route
//!
//! GET /api/leaderboard/ - ranked donor list across all interns.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::LeaderboardResponse;
use crate::api::state::AppState;

/// GET /api/leaderboard/
///
/// Rows come out of the registry pre-sorted by donations descending; ranks
/// and tier badges are assigned here at response build time.
pub async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<LeaderboardResponse> {
    let rows = state.registry.leaderboard();
    tracing::debug!(participants = rows.len(), "serving leaderboard");
    Json(LeaderboardResponse::from_rows(rows))
}
