//! Budget period model
//!
//! A budget is a date range with a fixed total allowance. Multiple budgets
//! may exist per user; the "active" budget for a date is resolved by range
//! containment with most-recently-created winning on overlap.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A budget period with a total allowance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Store-assigned id
    pub id: Uuid,

    /// Owning user (store id, not Telegram id)
    pub user_id: Uuid,

    /// Total allowance for the period
    pub total_amount: f64,

    /// First day of the period (inclusive)
    pub start_date: NaiveDate,

    /// Last day of the period (inclusive)
    pub end_date: NaiveDate,

    /// When the budget was created (store-assigned); breaks ties between
    /// overlapping periods
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for a new budget
#[derive(Debug, Clone, Serialize)]
pub struct NewBudget {
    pub user_id: Uuid,
    pub total_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Budget {
    /// Number of days in the period, counting both endpoints
    pub fn days_total(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Whether the given date falls inside the period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn january() -> Budget {
        Budget {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            total_amount: 3100.0,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            created_at: None,
        }
    }

    #[test]
    fn test_days_total() {
        assert_eq!(january().days_total(), 31);
    }

    #[test]
    fn test_single_day_period() {
        let mut budget = january();
        budget.end_date = budget.start_date;
        assert_eq!(budget.days_total(), 1);
    }

    #[test]
    fn test_contains() {
        let budget = january();
        assert!(budget.contains(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(budget.contains(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
        assert!(!budget.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
    }

    #[test]
    fn test_date_serializes_iso() {
        let payload = NewBudget {
            user_id: Uuid::new_v4(),
            total_amount: 3000.0,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["start_date"], "2025-01-01");
        assert_eq!(json["end_date"], "2025-01-31");
    }
}
