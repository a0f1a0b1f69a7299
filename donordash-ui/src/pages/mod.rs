//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod leaderboard;
pub mod login;

pub use dashboard::Dashboard;
pub use leaderboard::Leaderboard;
pub use login::Login;
