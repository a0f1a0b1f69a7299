//! Stats Route
//!
//! GET /api/intern/:id/stats/ - per-intern aggregate statistics.
//!
//! No donation analytics pipeline exists behind this endpoint; figures are
//! synthesized deterministically from the intern id so repeated requests for
//! the same intern agree.

use axum::{extract::Path, Json};

use crate::api::dto::{MonthStatsDto, StatsResponse, TrendPointDto};

const TREND_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// GET /api/intern/:id/stats/
pub async fn get_stats(Path(id): Path<u32>) -> Json<StatsResponse> {
    Json(demo_stats(id))
}

/// Deterministic pseudo-random stats for an intern id
pub fn demo_stats(id: u32) -> StatsResponse {
    let mut seed = id as u64 ^ 0x5DEECE66D;

    let total_donations = 1000.0 + (next(&mut seed) % 4001) as f64;
    let total_donors = 10 + (next(&mut seed) % 41) as u32;
    let average_donation = 100.0 + (next(&mut seed) % 401) as f64;

    let this_month = MonthStatsDto {
        donations: 200.0 + (next(&mut seed) % 801) as f64,
        donors: 5 + (next(&mut seed) % 11) as u32,
        growth: (next(&mut seed) % 61) as f64 - 10.0,
    };

    let donation_trend = TREND_MONTHS
        .iter()
        .map(|month| TrendPointDto {
            month: month.to_string(),
            amount: 200.0 + (next(&mut seed) % 601) as f64,
        })
        .collect();

    StatsResponse {
        total_donations,
        total_donors,
        average_donation,
        this_month,
        donation_trend,
    }
}

/// Advance a simple LCG and take the high bits
fn next(seed: &mut u64) -> u64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *seed >> 33
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_deterministic() {
        let a = demo_stats(5);
        let b = demo_stats(5);
        assert_eq!(a.total_donations, b.total_donations);
        assert_eq!(a.this_month.donations, b.this_month.donations);
    }

    #[test]
    fn test_stats_shape() {
        let stats = demo_stats(1);
        assert_eq!(stats.donation_trend.len(), 6);
        assert_eq!(stats.donation_trend[0].month, "Jan");
        assert!(stats.total_donations >= 1000.0 && stats.total_donations <= 5001.0);
        assert!(stats.this_month.growth >= -10.0 && stats.this_month.growth <= 50.0);
    }
}
