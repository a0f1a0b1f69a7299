//! Domain Model
//!
//! Core entities for the donation referral dashboard plus the achievement
//! rules (levels, milestones, progress, rank badges) shared by the demo data
//! generator and the live handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An intern participating in the donation drive
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Intern {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Unique string identifying this intern's donation-attribution link
    pub referral_code: String,
    pub total_donations: f64,
}

/// A reward that unlocks at a donation threshold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reward {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub required_donations: f64,
    pub icon: String,
}

impl Reward {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        required_donations: f64,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            required_donations,
            icon: icon.into(),
        }
    }
}

/// A single donation attributed to an intern
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Donation {
    pub amount: f64,
    pub donor_name: String,
    pub created_at: DateTime<Utc>,
}

/// A row on the cross-intern leaderboard, before ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardRow {
    pub name: String,
    pub donations: f64,
    pub referral_code: String,
}

/// The fixed catalog of rewards every intern can earn
pub fn reward_catalog() -> Vec<Reward> {
    vec![
        Reward::new(1, "First Donation", "Complete your first donation", 100.0, "🎯"),
        Reward::new(2, "Rising Star", "Reach ₹1000 in donations", 1000.0, "⭐"),
        Reward::new(3, "Champion", "Reach ₹2500 in donations", 2500.0, "🏆"),
        Reward::new(4, "Legend", "Reach ₹5000 in donations", 5000.0, "👑"),
    ]
}

/// Milestone ladder used for level progression
const MILESTONES: [f64; 5] = [100.0, 1000.0, 2500.0, 5000.0, 10_000.0];

/// Achievement level for a donation total
pub fn current_level(donations: f64) -> &'static str {
    if donations >= 5000.0 {
        "Legend"
    } else if donations >= 2500.0 {
        "Champion"
    } else if donations >= 1000.0 {
        "Rising Star"
    } else if donations >= 100.0 {
        "Starter"
    } else {
        "Beginner"
    }
}

/// Next milestone amount for a donation total
///
/// Past the last rung the ladder stays at its top value.
pub fn next_milestone(donations: f64) -> f64 {
    for milestone in MILESTONES {
        if donations < milestone {
            return milestone;
        }
    }
    MILESTONES[MILESTONES.len() - 1]
}

/// Progress through the current milestone segment, as a percentage
///
/// Each segment is measured from the previous milestone, so crossing a rung
/// resets progress to the start of the next segment.
pub fn progress_percentage(donations: f64) -> f64 {
    let next = next_milestone(donations);
    let (floor, span) = if next <= 100.0 {
        (0.0, 100.0)
    } else if next <= 1000.0 {
        (100.0, 900.0)
    } else if next <= 2500.0 {
        (1000.0, 1500.0)
    } else if next <= 5000.0 {
        (2500.0, 2500.0)
    } else {
        (5000.0, 5000.0)
    };
    (donations - floor) / span * 100.0
}

/// Badge glyph for a 1-based leaderboard rank
pub fn badge_for_rank(rank: u32) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        4..=10 => "🏅",
        _ => "🎖️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(current_level(0.0), "Beginner");
        assert_eq!(current_level(100.0), "Starter");
        assert_eq!(current_level(999.9), "Starter");
        assert_eq!(current_level(1000.0), "Rising Star");
        assert_eq!(current_level(2500.0), "Champion");
        assert_eq!(current_level(5000.0), "Legend");
    }

    #[test]
    fn test_next_milestone_ladder() {
        assert_eq!(next_milestone(0.0), 100.0);
        assert_eq!(next_milestone(100.0), 1000.0);
        assert_eq!(next_milestone(2450.0), 2500.0);
        assert_eq!(next_milestone(9999.0), 10_000.0);
        // Past the top the ladder saturates
        assert_eq!(next_milestone(50_000.0), 10_000.0);
    }

    #[test]
    fn test_progress_resets_per_segment() {
        assert_eq!(progress_percentage(50.0), 50.0);
        assert_eq!(progress_percentage(550.0), 50.0);
        assert_eq!(progress_percentage(1750.0), 50.0);
        // 2450 of the 2500 segment: (2450 - 1000) / 1500
        let pct = progress_percentage(2450.0);
        assert!((pct - 96.666).abs() < 0.01);
    }

    #[test]
    fn test_rank_badges() {
        assert_eq!(badge_for_rank(1), "🥇");
        assert_eq!(badge_for_rank(2), "🥈");
        assert_eq!(badge_for_rank(3), "🥉");
        assert_eq!(badge_for_rank(4), "🏅");
        assert_eq!(badge_for_rank(10), "🏅");
        assert_eq!(badge_for_rank(11), "🎖️");
    }

    #[test]
    fn test_reward_catalog_thresholds() {
        let catalog = reward_catalog();
        assert_eq!(catalog.len(), 4);
        let thresholds: Vec<f64> = catalog.iter().map(|r| r.required_donations).collect();
        assert_eq!(thresholds, vec![100.0, 1000.0, 2500.0, 5000.0]);
    }
}
