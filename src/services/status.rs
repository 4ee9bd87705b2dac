//! Budget status calculator
//!
//! A pure function mapping a budget period and spend history onto derived
//! pacing metrics: day counts, remaining allowance, and the daily budget.
//! The current date is an explicit parameter so boundary cases are fully
//! testable; callers pass today's date in production.

use chrono::NaiveDate;

/// Derived budget metrics for a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining_budget: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_total: i64,
    pub days_passed: i64,
    pub days_remaining: i64,
    pub daily_budget: f64,
}

impl BudgetStatus {
    /// Percentage of the budget spent; 0 when the total is non-positive
    pub fn spent_percentage(&self) -> f64 {
        if self.total_budget <= 0.0 {
            return 0.0;
        }
        (self.total_spent / self.total_budget) * 100.0
    }

    /// Whether spending has exceeded the total allowance
    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget < 0.0
    }

    /// Average spent per elapsed day; 0 before the period starts
    pub fn daily_average_spent(&self) -> f64 {
        if self.days_passed <= 0 {
            return 0.0;
        }
        self.total_spent / self.days_passed as f64
    }
}

/// Calculate the budget status for `current_date`
///
/// Day counts are inclusive on both ends: a January 1-31 period is 31 days,
/// and on January 10 ten days have passed with 22 remaining (today counts
/// toward both). Before the period starts no days have passed; after it
/// ends no days remain and the daily budget is zero.
pub fn calculate_budget_status(
    total_budget: f64,
    total_spent: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    current_date: NaiveDate,
) -> BudgetStatus {
    let days_total = (end_date - start_date).num_days() + 1;

    let days_passed = if current_date < start_date {
        0
    } else if current_date > end_date {
        days_total
    } else {
        (current_date - start_date).num_days() + 1
    };

    let days_remaining = if current_date > end_date {
        0
    } else if current_date < start_date {
        days_total
    } else {
        (end_date - current_date).num_days() + 1
    };

    let remaining_budget = total_budget - total_spent;

    let daily_budget = if days_remaining > 0 {
        remaining_budget / days_remaining as f64
    } else {
        0.0
    };

    BudgetStatus {
        total_budget,
        total_spent,
        remaining_budget,
        start_date,
        end_date,
        days_total,
        days_passed,
        days_remaining,
        daily_budget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january() -> (NaiveDate, NaiveDate) {
        (date(2025, 1, 1), date(2025, 1, 31))
    }

    #[test]
    fn test_mid_period() {
        let (start, end) = january();
        let status = calculate_budget_status(3100.0, 1000.0, start, end, date(2025, 1, 10));

        assert_eq!(status.days_total, 31);
        assert_eq!(status.days_passed, 10);
        assert_eq!(status.days_remaining, 22);
        assert_eq!(status.remaining_budget, 2100.0);
        assert!((status.daily_budget - 2100.0 / 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_before_start() {
        let (start, end) = january();
        let status = calculate_budget_status(3100.0, 0.0, start, end, date(2024, 12, 25));

        assert_eq!(status.days_passed, 0);
        assert_eq!(status.days_remaining, status.days_total);
        assert_eq!(status.remaining_budget, 3100.0);
        assert!((status.daily_budget - 3100.0 / 31.0).abs() < 1e-9);
        assert_eq!(status.daily_average_spent(), 0.0);
    }

    #[test]
    fn test_after_end() {
        let (start, end) = january();
        let status = calculate_budget_status(3100.0, 1000.0, start, end, date(2025, 2, 5));

        assert_eq!(status.days_passed, status.days_total);
        assert_eq!(status.days_remaining, 0);
        assert_eq!(status.daily_budget, 0.0);
    }

    #[test]
    fn test_after_end_over_budget_daily_still_zero() {
        let (start, end) = january();
        let status = calculate_budget_status(1000.0, 5000.0, start, end, date(2025, 3, 1));

        assert!(status.is_over_budget());
        assert_eq!(status.daily_budget, 0.0);
    }

    #[test]
    fn test_first_and_last_day() {
        let (start, end) = january();

        let first = calculate_budget_status(3100.0, 0.0, start, end, start);
        assert_eq!(first.days_passed, 1);
        assert_eq!(first.days_remaining, 31);

        let last = calculate_budget_status(3100.0, 0.0, start, end, end);
        assert_eq!(last.days_passed, 31);
        assert_eq!(last.days_remaining, 1);
    }

    #[test]
    fn test_over_budget_mid_period() {
        let (start, end) = january();
        let status = calculate_budget_status(1000.0, 1500.0, start, end, date(2025, 1, 10));

        assert!(status.is_over_budget());
        assert_eq!(status.remaining_budget, -500.0);
        // Still computed through the days_remaining branch, so it goes negative
        assert!((status.daily_budget - (-500.0 / 22.0)).abs() < 1e-9);
    }

    #[test]
    fn test_spent_percentage() {
        let (start, end) = january();
        let status = calculate_budget_status(3100.0, 1000.0, start, end, date(2025, 1, 10));
        assert!((status.spent_percentage() - 1000.0 / 3100.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_spent_percentage_zero_total() {
        let (start, end) = january();
        let status = calculate_budget_status(0.0, 100.0, start, end, date(2025, 1, 10));
        assert_eq!(status.spent_percentage(), 0.0);
    }

    #[test]
    fn test_daily_average_spent() {
        let (start, end) = january();
        let status = calculate_budget_status(3100.0, 1000.0, start, end, date(2025, 1, 10));
        assert!((status.daily_average_spent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_day_period() {
        let day = date(2025, 6, 1);
        let status = calculate_budget_status(100.0, 20.0, day, day, day);

        assert_eq!(status.days_total, 1);
        assert_eq!(status.days_passed, 1);
        assert_eq!(status.days_remaining, 1);
        assert_eq!(status.daily_budget, 80.0);
    }
}
