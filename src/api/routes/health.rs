//! Health Routes
//!
//! The frontend probes GET /api/test/ before every data fetch to decide
//! whether to talk to the live API or fall back to demo fixtures, so this
//! endpoint must stay dependency-free and always return 200 while the
//! process is alive.

use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::TestResponse;
use crate::api::state::AppState;

/// GET /api/test/
///
/// Liveness probe. Returns 200 with a small status payload and the server
/// uptime.
pub async fn test_api(State(state): State<Arc<AppState>>) -> Json<TestResponse> {
    Json(TestResponse {
        message: "API is working!".to_string(),
        status: "success".to_string(),
        timestamp: Utc::now(),
        uptime_seconds: state.uptime_seconds(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;
    use crate::registry::Registry;

    #[tokio::test]
    async fn test_probe_payload() {
        let state = Arc::new(AppState::new(
            Arc::new(Registry::new()),
            ApiConfig::default(),
        ));

        let Json(body) = test_api(State(state)).await;
        assert_eq!(body.status, "success");
        // Uptime counts from AppState construction
        assert!(body.uptime_seconds < 60);
    }
}
