//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON and mirror the
//! shapes the frontend deserializes on its side of the boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{self, Intern, LeaderboardRow};
use crate::registry::InternRecord;

// ============================================
// TEST / LIVENESS DTOs
// ============================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub message: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// Per-intern dashboard summary
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub total_donations: f64,
    pub rewards: Vec<RewardDto>,
    pub recent_donations: Vec<DonationDto>,
    pub progress: ProgressDto,
}

/// Reward with unlock state resolved for one intern
#[derive(Debug, Serialize)]
pub struct RewardDto {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub required_donations: f64,
    pub icon: String,
    pub unlocked: bool,
}

/// A recent donation line item
#[derive(Debug, Serialize)]
pub struct DonationDto {
    pub amount: f64,
    pub donor_name: String,
    pub date: String,
}

/// Level progression summary
#[derive(Debug, Serialize)]
pub struct ProgressDto {
    pub current_level: String,
    pub next_milestone: f64,
    pub progress_percentage: f64,
}

impl DashboardResponse {
    /// Build the dashboard view of an intern record, resolving reward unlock
    /// state and level progress from the donation total.
    pub fn from_record(record: &InternRecord) -> Self {
        let intern = &record.intern;
        let total = intern.total_donations;

        let rewards = model::reward_catalog()
            .into_iter()
            .map(|r| RewardDto {
                unlocked: total >= r.required_donations,
                id: r.id,
                title: r.title,
                description: r.description,
                required_donations: r.required_donations,
                icon: r.icon,
            })
            .collect();

        // Most recent first, capped at five
        let mut donations = record.donations.clone();
        donations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let recent_donations = donations
            .iter()
            .take(5)
            .map(|d| DonationDto {
                amount: d.amount,
                donor_name: d.donor_name.clone(),
                date: d.created_at.format("%Y-%m-%d %H:%M").to_string(),
            })
            .collect();

        Self {
            id: intern.id,
            name: intern.name.clone(),
            email: intern.email.clone(),
            referral_code: intern.referral_code.clone(),
            total_donations: total,
            rewards,
            recent_donations,
            progress: ProgressDto {
                current_level: model::current_level(total).to_string(),
                next_milestone: model::next_milestone(total),
                progress_percentage: model::progress_percentage(total),
            },
        }
    }
}

// ============================================
// STATS DTOs
// ============================================

/// Per-intern statistics
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_donations: f64,
    pub total_donors: u32,
    pub average_donation: f64,
    pub this_month: MonthStatsDto,
    pub donation_trend: Vec<TrendPointDto>,
}

/// Current-month aggregate figures
#[derive(Debug, Serialize)]
pub struct MonthStatsDto {
    pub donations: f64,
    pub donors: u32,
    /// Signed month-over-month growth percentage
    pub growth: f64,
}

/// One month of the donation trend
#[derive(Debug, Serialize)]
pub struct TrendPointDto {
    pub month: String,
    pub amount: f64,
}

// ============================================
// LEADERBOARD DTOs
// ============================================

/// Ranked leaderboard payload
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntryDto>,
    pub total_participants: usize,
    pub last_updated: DateTime<Utc>,
}

/// One ranked leaderboard entry
#[derive(Debug, Serialize)]
pub struct LeaderboardEntryDto {
    pub name: String,
    pub donations: f64,
    pub referral_code: String,
    pub rank: u32,
    pub badge: String,
}

impl LeaderboardResponse {
    /// Rank pre-sorted rows and assign tier badges
    pub fn from_rows(rows: Vec<LeaderboardRow>) -> Self {
        let total_participants = rows.len();
        let leaderboard = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let rank = i as u32 + 1;
                LeaderboardEntryDto {
                    name: row.name,
                    donations: row.donations,
                    referral_code: row.referral_code,
                    rank,
                    badge: model::badge_for_rank(rank).to_string(),
                }
            })
            .collect();

        Self {
            leaderboard,
            total_participants,
            last_updated: Utc::now(),
        }
    }
}

// ============================================
// INTERN CREATION DTOs
// ============================================

/// Intern registration request
#[derive(Debug, Deserialize)]
pub struct CreateInternRequest {
    pub name: String,
    pub email: String,
}

/// Intern registration response
#[derive(Debug, Serialize)]
pub struct CreateInternResponse {
    pub message: String,
    pub intern: Intern,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn test_dashboard_unlocks_follow_total() {
        let registry = Registry::new();
        let record = registry.demo_intern(3);
        let response = DashboardResponse::from_record(&record);

        for reward in &response.rewards {
            assert_eq!(
                reward.unlocked,
                record.intern.total_donations >= reward.required_donations
            );
        }
    }

    #[test]
    fn test_dashboard_donations_reverse_chronological() {
        let registry = Registry::new();
        let record = registry.demo_intern(1);
        let response = DashboardResponse::from_record(&record);

        let dates: Vec<&str> = response.recent_donations.iter().map(|d| d.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_leaderboard_ranks_and_badges() {
        let registry = Registry::seeded();
        let response = LeaderboardResponse::from_rows(registry.leaderboard());

        assert_eq!(response.total_participants, 8);
        let ranks: Vec<u32> = response.leaderboard.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=8).collect::<Vec<_>>());
        assert_eq!(response.leaderboard[0].badge, "🥇");
        assert_eq!(response.leaderboard[1].badge, "🥈");
        assert_eq!(response.leaderboard[2].badge, "🥉");
        assert_eq!(response.leaderboard[3].badge, "🏅");
    }
}
