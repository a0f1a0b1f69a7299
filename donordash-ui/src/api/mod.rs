//! HTTP API Client
//!
//! Functions for communicating with the Donordash REST API.

pub mod client;

pub use client::{fetch_dashboard, fetch_leaderboard, fetch_stats, probe_api, FetchError};
