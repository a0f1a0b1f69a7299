//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod banner;
pub mod loading;
pub mod nav;

pub use banner::DemoDataBanner;
pub use loading::Loading;
pub use nav::Nav;
