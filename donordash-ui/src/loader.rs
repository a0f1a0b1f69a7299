//! View State & Data Loading
//!
//! Composes "try live, else fixture" for each fetching page. The result is a
//! tagged [`ViewState`] driving a single render dispatch: `Degraded` always
//! carries usable data, so the pages can never land in an "error with
//! nothing to show" state.

use leptos::{store_value, StoredValue};

use crate::api::{self, FetchError};
use crate::fixtures;
use crate::model::{DashboardData, LeaderboardData, StatsData};

/// Lifecycle of a fetching view
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    /// Requests in flight
    Loading,
    /// Live data arrived
    Ready(T),
    /// Live fetch failed; rendering fixtures with a banner
    Degraded { data: T, error: String },
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The data to render, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loading => None,
            ViewState::Ready(data) => Some(data),
            ViewState::Degraded { data, .. } => Some(data),
        }
    }

    /// The degradation message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Degraded { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Tracks which load a fetching view is currently waiting on.
///
/// Each reload takes a new token; a response is only applied while its token
/// is still the current one, so responses from a superseded load (the intern
/// id changed mid-flight) or from an unmounted view land in the void instead
/// of overwriting newer data.
#[derive(Clone, Copy)]
pub struct RequestGuard {
    current: StoredValue<u64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self {
            current: store_value(0),
        }
    }

    /// Start a new load, superseding any in-flight one
    pub fn begin(&self) -> u64 {
        let token = self.current.try_get_value().unwrap_or(0) + 1;
        self.current.set_value(token);
        token
    }

    /// Whether a response carrying this token may still be applied
    pub fn is_current(&self, token: u64) -> bool {
        self.current.try_get_value() == Some(token)
    }

    /// Invalidate every outstanding token; used on view cleanup
    pub fn invalidate(&self) {
        let _ = self.current.try_set_value(u64::MAX);
    }
}

impl Default for RequestGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Dashboard payload: summary plus statistics, fetched together
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardBundle {
    pub data: DashboardData,
    pub stats: StatsData,
}

/// Load the dashboard for an intern, falling back to fixtures on any failure
pub async fn load_dashboard(intern_id: u32) -> ViewState<DashboardBundle> {
    match try_live_dashboard(intern_id).await {
        Ok(bundle) => ViewState::Ready(bundle),
        Err(e) => {
            web_sys::console::error_1(&format!("Dashboard fetch error: {}", e).into());
            ViewState::Degraded {
                data: DashboardBundle {
                    data: fixtures::fallback_dashboard(intern_id),
                    stats: fixtures::fallback_stats(),
                },
                error: e.to_string(),
            }
        }
    }
}

/// Load the leaderboard, falling back to fixtures on any failure
pub async fn load_leaderboard() -> ViewState<LeaderboardData> {
    match try_live_leaderboard().await {
        Ok(data) => ViewState::Ready(data),
        Err(e) => {
            web_sys::console::error_1(&format!("Leaderboard fetch error: {}", e).into());
            ViewState::Degraded {
                data: fixtures::fallback_leaderboard(),
                error: e.to_string(),
            }
        }
    }
}

/// Probe then fetch dashboard and stats, sequentially
async fn try_live_dashboard(intern_id: u32) -> Result<DashboardBundle, FetchError> {
    api::probe_api().await?;
    let data = api::fetch_dashboard(intern_id).await?;
    let stats = api::fetch_stats(intern_id).await?;
    Ok(DashboardBundle { data, stats })
}

/// Probe then fetch the leaderboard
async fn try_live_leaderboard() -> Result<LeaderboardData, FetchError> {
    api::probe_api().await?;
    api::fetch_leaderboard().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn test_reload_supersedes_inflight_token() {
        let runtime = create_runtime();

        let guard = RequestGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        // A second load starts while the first response is still in flight
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));

        runtime.dispose();
    }

    #[test]
    fn test_invalidate_drops_all_tokens() {
        let runtime = create_runtime();

        let guard = RequestGuard::new();
        let token = guard.begin();
        guard.invalidate();
        assert!(!guard.is_current(token));

        runtime.dispose();
    }

    #[test]
    fn test_view_state_accessors() {
        let loading: ViewState<u32> = ViewState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());
        assert!(loading.error().is_none());

        let ready = ViewState::Ready(7_u32);
        assert_eq!(ready.data(), Some(&7));
        assert!(ready.error().is_none());

        let degraded = ViewState::Degraded { data: 7_u32, error: "down".to_string() };
        assert_eq!(degraded.data(), Some(&7));
        assert_eq!(degraded.error(), Some("down"));
    }
}
