//! Donordash
//!
//! Donation referral dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Simulated login with demo identities
//! - Per-intern metrics, rewards, and monthly trend
//! - Cross-intern leaderboard with podium and rankings
//! - Automatic fallback to demo fixtures when the API is unreachable
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Donordash API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod fixtures;
mod loader;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
