//! HTTP API Client
//!
//! Thin gloo-net wrappers over the four Donordash endpoints. Every data
//! fetch is preceded by a liveness probe at the call site (see the loader);
//! any failure maps into the [`FetchError`] taxonomy so views can switch to
//! fixtures with a single error message.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{DashboardData, LeaderboardData, StatsData};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Fetch failure taxonomy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The liveness probe failed or the server was unreachable
    #[error("Cannot connect to API server. Please make sure the Donordash API is running on {0}")]
    Connectivity(String),

    /// A data call returned a non-2xx status
    #[error("Request failed with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Parse(String),
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("donordash_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Probe API liveness via GET /api/test/
pub async fn probe_api() -> Result<(), FetchError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/test/", api_base))
        .send()
        .await
        .map_err(|_| FetchError::Connectivity(api_base.clone()))?;

    if !response.ok() {
        return Err(FetchError::Connectivity(api_base));
    }

    Ok(())
}

/// Fetch the dashboard summary for an intern
pub async fn fetch_dashboard(intern_id: u32) -> Result<DashboardData, FetchError> {
    get_json(&format!("/api/intern/{}/dashboard/", intern_id)).await
}

/// Fetch the statistics for an intern
pub async fn fetch_stats(intern_id: u32) -> Result<StatsData, FetchError> {
    get_json(&format!("/api/intern/{}/stats/", intern_id)).await
}

/// Fetch the ranked leaderboard
pub async fn fetch_leaderboard() -> Result<LeaderboardData, FetchError> {
    get_json("/api/leaderboard/").await
}

/// GET a path and decode its JSON body
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}{}", api_base, path))
        .send()
        .await
        .map_err(|_| FetchError::Connectivity(api_base))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}
