//! API Routes
//!
//! Route handlers organized by functionality.

pub mod dashboard;
pub mod health;
pub mod interns;
pub mod leaderboard;
pub mod stats;
