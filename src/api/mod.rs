//! Donordash REST API
//!
//! HTTP API layer for the donation referral dashboard, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /api/test/` - liveness probe used by the frontend before data fetches
//! - `GET /api/intern/:id/dashboard/` - per-intern dashboard summary
//! - `GET /api/intern/:id/stats/` - per-intern statistics
//! - `GET /api/leaderboard/` - ranked donor list
//! - `POST /api/intern/create/` - register a new intern
//!
//! # Example
//!
//! ```rust,ignore
//! use donordash::api::{build_router, serve, ApiConfig, AppState};
//! use donordash::registry::Registry;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = Arc::new(Registry::seeded());
//!     let config = ApiConfig::default();
//!     let state = AppState::new(registry, config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/test/", get(routes::health::test_api))
        .route("/intern/:id/dashboard/", get(routes::dashboard::get_dashboard))
        .route("/intern/:id/stats/", get(routes::stats::get_stats))
        .route("/leaderboard/", get(routes::leaderboard::get_leaderboard))
        .route("/intern/create/", post(routes::interns::create_intern));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS layer restricted to the configured origins; permissive when no
/// origin parses (local development)
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Donordash API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Donordash API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let registry = Arc::new(Registry::seeded());
        let state = AppState::new(registry, ApiConfig::default());
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_liveness_probe() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/api/test/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert!(body["uptime_seconds"].as_u64().is_some());
    }

    #[tokio::test]
    async fn test_cors_reflects_configured_origin() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/test/")
                    .header("Origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_dashboard_unknown_id_serves_demo() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/intern/7/dashboard/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        // Demo name cycles by id mod 5
        assert_eq!(body["name"], "Charlie Brown");
        assert_eq!(body["rewards"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_stats_shape() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/intern/1/stats/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["donation_trend"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_leaderboard_ranked() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/leaderboard/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total_participants"], 8);
        assert_eq!(body["leaderboard"][0]["rank"], 1);
        assert_eq!(body["leaderboard"][0]["name"], "Charlie Brown");
    }

    #[tokio::test]
    async fn test_create_intern() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/intern/create/")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"name": "Test Intern", "email": "test@example.com"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert!(body["intern"]["referral_code"]
            .as_str()
            .unwrap()
            .starts_with("test"));
    }

    #[tokio::test]
    async fn test_create_intern_blank_name_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/intern/create/")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name": "   ", "email": "test@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
