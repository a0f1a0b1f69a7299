//! # Donordash
//!
//! Donation referral dashboard - a full-stack Rust application for tracking
//! charitable-donation referrals, rewards, and cross-intern leaderboards.
//!
//! ## Modules
//!
//! - [`model`]: Domain types and the level/milestone/badge rules
//! - [`registry`]: In-memory intern and leaderboard store (demo-seeded)
//! - [`api`]: REST API server with Axum
//! - [`config`]: Configuration loading (TOML + environment)
//!
//! The browser frontend lives in the separate `donordash-ui` crate and
//! consumes this API over HTTP.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use donordash::api::{serve, ApiConfig, AppState};
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

pub mod api;
pub mod config;
pub mod model;
pub mod registry;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};
pub use config::{Config, ConfigError, LoggingConfig};
pub use model::{badge_for_rank, current_level, next_milestone, progress_percentage};
pub use registry::Registry;
