//! Intern Registry
//!
//! In-memory store for interns, their donations, and the shared leaderboard.
//! The dashboard ships without a persistence layer, so the registry is seeded
//! with demo data at startup and lives for the process lifetime.

use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::model::{Donation, Intern, LeaderboardRow};

/// A registered intern together with their donation history
#[derive(Debug, Clone)]
pub struct InternRecord {
    pub intern: Intern,
    pub donations: Vec<Donation>,
}

/// Names cycled through when synthesizing demo interns
pub const DEMO_NAMES: [&str; 5] = [
    "Alice Smith",
    "Bob Jones",
    "Charlie Brown",
    "Diana Prince",
    "Eve Wilson",
];

/// Process-wide intern and leaderboard store
pub struct Registry {
    interns: RwLock<HashMap<u32, InternRecord>>,
    leaderboard: RwLock<Vec<LeaderboardRow>>,
    next_id: RwLock<u32>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            interns: RwLock::new(HashMap::new()),
            leaderboard: RwLock::new(Vec::new()),
            next_id: RwLock::new(1),
        }
    }

    /// Create a registry pre-populated with the demo leaderboard
    pub fn seeded() -> Self {
        let registry = Self::new();

        let rows = vec![
            ("Alice Smith", 2450.0, "alice2025"),
            ("Bob Jones", 1700.0, "bob2025"),
            ("Charlie Brown", 3200.0, "charlie2025"),
            ("Diana Prince", 1850.0, "diana2025"),
            ("Eve Wilson", 2100.0, "eve2025"),
            ("Frank Miller", 1450.0, "frank2025"),
            ("Grace Lee", 2750.0, "grace2025"),
            ("Henry Ford", 1950.0, "henry2025"),
        ];

        {
            let mut board = registry.leaderboard.write().unwrap();
            for (name, donations, code) in rows {
                board.push(LeaderboardRow {
                    name: name.to_string(),
                    donations,
                    referral_code: code.to_string(),
                });
            }
        }

        registry
    }

    /// Look up a registered intern
    pub fn get(&self, id: u32) -> Option<InternRecord> {
        self.interns.read().unwrap().get(&id).cloned()
    }

    /// Synthesize a deterministic demo intern for an unregistered id
    ///
    /// The name cycles through [`DEMO_NAMES`] by `id mod 5`; the total and
    /// referral digits are derived from the id so repeated requests agree.
    pub fn demo_intern(&self, id: u32) -> InternRecord {
        let name = DEMO_NAMES[id as usize % DEMO_NAMES.len()];
        let total = 1000.0 + (id as u64 * 731 % 4001) as f64;
        let first = name.split_whitespace().next().unwrap_or(name).to_lowercase();
        let digits = 1000 + id as u64 * 37 % 9000;

        let intern = Intern {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            referral_code: format!("{}{}", first, digits),
            total_donations: total,
        };

        InternRecord {
            intern,
            donations: demo_donations(),
        }
    }

    /// Register a new intern, assigning an id and referral code
    pub fn create(&self, name: &str, email: &str) -> Intern {
        let id = {
            let mut next = self.next_id.write().unwrap();
            let id = *next;
            *next += 1;
            id
        };

        let first = name.split_whitespace().next().unwrap_or(name).to_lowercase();
        let intern = Intern {
            id,
            name: name.to_string(),
            email: email.to_string(),
            referral_code: format!("{}{}", first, 1000 + id as u64 * 37 % 9000),
            total_donations: 0.0,
        };

        self.interns.write().unwrap().insert(
            id,
            InternRecord {
                intern: intern.clone(),
                donations: Vec::new(),
            },
        );

        intern
    }

    /// Leaderboard rows sorted by donations descending
    pub fn leaderboard(&self) -> Vec<LeaderboardRow> {
        let mut rows = self.leaderboard.read().unwrap().clone();
        rows.sort_by(|a, b| b.donations.partial_cmp(&a.donations).unwrap_or(std::cmp::Ordering::Equal));
        rows
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed recent-donation history used for demo interns
fn demo_donations() -> Vec<Donation> {
    vec![
        Donation {
            amount: 500.0,
            donor_name: "John Doe".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap(),
        },
        Donation {
            amount: 250.0,
            donor_name: "Jane Smith".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 14, 10, 15, 0).unwrap(),
        },
        Donation {
            amount: 750.0,
            donor_name: "Anonymous".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 13, 16, 45, 0).unwrap(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_leaderboard_sorted() {
        let registry = Registry::seeded();
        let rows = registry.leaderboard();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].name, "Charlie Brown");
        assert!(rows.windows(2).all(|w| w[0].donations >= w[1].donations));
    }

    #[test]
    fn test_demo_intern_deterministic() {
        let registry = Registry::new();
        let a = registry.demo_intern(7);
        let b = registry.demo_intern(7);
        assert_eq!(a.intern, b.intern);
        // Name cycles by id mod 5
        assert_eq!(a.intern.name, DEMO_NAMES[7 % 5]);
    }

    #[test]
    fn test_create_assigns_ids_and_codes() {
        let registry = Registry::new();
        let first = registry.create("Alice Smith", "alice@example.com");
        let second = registry.create("Bob Jones", "bob@example.com");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.referral_code.starts_with("alice"));
        assert!(registry.get(first.id).is_some());
    }
}
