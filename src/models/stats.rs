//! Registry statistics for the admin overview.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Account;
use crate::time_utils::is_same_utc_day;

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct AdminStats {
    /// Registered accounts
    pub total: usize,
    /// Accounts whose biography is filled in
    pub active: usize,
    /// Accounts created on the same UTC day as `now`
    pub today: usize,
}

impl AdminStats {
    /// Compute stats over the given accounts.
    ///
    /// Accounts with an unparseable `created_at` are not counted as new.
    pub fn compute(accounts: &[Account], now: DateTime<Utc>) -> Self {
        accounts.iter().fold(Self::default(), |mut stats, account| {
            stats.total += 1;
            if account.press_kit.has_complete_bio() {
                stats.active += 1;
            }
            if is_same_utc_day(&account.created_at, now) {
                stats.today += 1;
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn account(email: &str, created_at: &str, bio_len: usize) -> Account {
        let mut account = Account::provision(email, false, created_at.to_string());
        account.press_kit.bio = "b".repeat(bio_len);
        account
    }

    #[test]
    fn test_compute_stats() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 18, 0, 0).unwrap();
        let accounts = vec![
            account("a@x.io", "2026-03-14T01:00:00Z", 80),
            account("b@x.io", "2026-03-13T23:59:59Z", 10),
            account("c@x.io", "not-a-date", 51),
        ];

        let stats = AdminStats::compute(&accounts, now);

        assert_eq!(
            stats,
            AdminStats {
                total: 3,
                active: 2,
                today: 1
            }
        );
    }

    #[test]
    fn test_compute_empty() {
        assert_eq!(AdminStats::compute(&[], Utc::now()), AdminStats::default());
    }
}
