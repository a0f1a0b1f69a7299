//! Data Model
//!
//! Wire types deserialized from the Donordash API, plus the pure rendering
//! helpers the pages share (currency formatting, progress clamping, trend
//! normalization, podium splitting). The helpers are kept free of any DOM
//! dependency so they can be tested natively.

use serde::{Deserialize, Serialize};

/// The logged-in user, created client-side at login
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Per-intern dashboard summary
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DashboardData {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub total_donations: f64,
    pub rewards: Vec<Reward>,
    pub recent_donations: Vec<Donation>,
    pub progress: Progress,
}

/// A reward card; `unlocked` is opaque server data, never recomputed here
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Reward {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub required_donations: f64,
    pub icon: String,
    pub unlocked: bool,
}

/// A recent donation line item
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Donation {
    pub amount: f64,
    pub donor_name: String,
    pub date: String,
}

/// Level progression summary
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Progress {
    pub current_level: String,
    pub next_milestone: f64,
    pub progress_percentage: f64,
}

/// Per-intern statistics
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StatsData {
    pub total_donations: f64,
    pub total_donors: u32,
    pub average_donation: f64,
    pub this_month: MonthStats,
    pub donation_trend: Vec<TrendPoint>,
}

/// Current-month aggregate figures
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MonthStats {
    pub donations: f64,
    pub donors: u32,
    pub growth: f64,
}

/// One month of the donation trend
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub amount: f64,
}

/// Ranked leaderboard payload
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LeaderboardData {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub total_participants: usize,
    pub last_updated: String,
}

/// One ranked leaderboard entry
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub donations: f64,
    pub referral_code: String,
    pub rank: u32,
    pub badge: String,
}

// ============ Rendering helpers ============

/// Format a rupee amount with thousands grouping ("2450" -> "2,450")
pub fn format_amount(amount: f64) -> String {
    let whole = amount.round() as i64;
    let negative = whole < 0;
    let digits = whole.abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Clamp a progress percentage to [0, 100] for bar widths
pub fn clamp_percentage(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Bar heights for the monthly trend, as percentages of the tallest month
///
/// An empty or all-zero trend yields all-zero heights rather than dividing
/// by zero; callers hide the chart section when the trend itself is empty.
pub fn trend_bar_heights(trend: &[TrendPoint]) -> Vec<f64> {
    let max = trend.iter().map(|p| p.amount).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; trend.len()];
    }
    trend.iter().map(|p| p.amount / max * 100.0).collect()
}

/// Split the leaderboard into podium (first three, original order) and rest
pub fn split_podium(entries: &[LeaderboardEntry]) -> (Vec<LeaderboardEntry>, Vec<LeaderboardEntry>) {
    let cut = entries.len().min(3);
    (entries[..cut].to_vec(), entries[cut..].to_vec())
}

/// Width of a ranked entry's bar relative to the top entry, clamped to [0, 100]
///
/// Guarded for an empty leaderboard and a zero top amount.
pub fn relative_width(donations: f64, entries: &[LeaderboardEntry]) -> f64 {
    let top = match entries.first() {
        Some(entry) if entry.donations > 0.0 => entry.donations,
        _ => return 0.0,
    };
    clamp_percentage(donations / top * 100.0)
}

/// Sum of all entries' donations, computed at render time
pub fn total_raised(entries: &[LeaderboardEntry]) -> f64 {
    entries.iter().map(|e| e.donations).sum()
}

/// Uppercased first character of a name, for avatars
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

/// Derive a placeholder email from a full name
///
/// Lowercases the name and joins its whitespace tokens with dots, so
/// "Alice Smith" becomes "alice.smith@example.com".
pub fn derive_email(name: &str) -> String {
    let local: Vec<String> = name
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect();
    format!("{}@example.com", local.join("."))
}

/// First whitespace token of a name, lowercased, for referral codes
pub fn first_name_token(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or(name)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, donations: f64, rank: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            donations,
            referral_code: format!("{}2025", first_name_token(name)),
            rank,
            badge: "🏅".to_string(),
        }
    }

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(2450.0), "2,450");
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(-1500.0), "-1,500");
    }

    #[test]
    fn test_clamp_percentage() {
        assert_eq!(clamp_percentage(65.0), 65.0);
        assert_eq!(clamp_percentage(130.0), 100.0);
        assert_eq!(clamp_percentage(-5.0), 0.0);
    }

    #[test]
    fn test_trend_heights_normalized() {
        let trend = vec![
            TrendPoint { month: "Jan".into(), amount: 400.0 },
            TrendPoint { month: "Apr".into(), amount: 800.0 },
            TrendPoint { month: "Jun".into(), amount: 200.0 },
        ];
        let heights = trend_bar_heights(&trend);
        assert_eq!(heights, vec![50.0, 100.0, 25.0]);
    }

    #[test]
    fn test_trend_heights_all_zero() {
        let trend = vec![
            TrendPoint { month: "Jan".into(), amount: 0.0 },
            TrendPoint { month: "Feb".into(), amount: 0.0 },
        ];
        assert_eq!(trend_bar_heights(&trend), vec![0.0, 0.0]);
        assert!(trend_bar_heights(&[]).is_empty());
    }

    #[test]
    fn test_split_podium_positions() {
        let entries: Vec<_> = (1..=5).map(|i| entry("Intern", 1000.0 - i as f64, i)).collect();
        let (podium, remaining) = split_podium(&entries);
        assert_eq!(podium.len(), 3);
        assert_eq!(remaining.len(), 2);
        assert_eq!(podium[0].rank, 1);
        assert_eq!(remaining[0].rank, 4);
    }

    #[test]
    fn test_split_podium_short_list() {
        let entries = vec![entry("Solo", 100.0, 1)];
        let (podium, remaining) = split_podium(&entries);
        assert_eq!(podium.len(), 1);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_relative_width() {
        let entries = vec![entry("Top", 3200.0, 1), entry("Next", 1600.0, 2)];
        assert_eq!(relative_width(1600.0, &entries), 50.0);
        assert_eq!(relative_width(3200.0, &entries), 100.0);
    }

    #[test]
    fn test_relative_width_empty_board() {
        assert_eq!(relative_width(500.0, &[]), 0.0);
        let zeroed = vec![entry("Zero", 0.0, 1)];
        assert_eq!(relative_width(500.0, &zeroed), 0.0);
    }

    #[test]
    fn test_total_raised() {
        let entries = vec![entry("A", 100.0, 1), entry("B", 250.0, 2)];
        assert_eq!(total_raised(&entries), 350.0);
        assert_eq!(total_raised(&[]), 0.0);
    }

    #[test]
    fn test_derive_email_joins_tokens() {
        assert_eq!(derive_email("Alice Smith"), "alice.smith@example.com");
        assert_eq!(derive_email("Cher"), "cher@example.com");
        // Extra whitespace collapses
        assert_eq!(derive_email("  Bob   Jones "), "bob.jones@example.com");
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("alice"), "A");
        assert_eq!(avatar_initial(""), "");
    }
}
