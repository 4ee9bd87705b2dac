//! User service
//!
//! Business logic tying users, budgets and expenses together: lazy user
//! registration, budget creation, and the budget status derivation used by
//! the /budget command and expense confirmations.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::BotResult;
use crate::models::{Budget, NewBudget, NewUser, User};
use crate::storage::Store;

use super::status::{calculate_budget_status, BudgetStatus};

/// Service for user-centric operations
pub struct UserService<'a> {
    store: &'a Store,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Get the user row for a Telegram account, creating it on first contact
    pub async fn get_or_create(
        &self,
        telegram_user_id: i64,
        username: Option<&str>,
        first_name: Option<&str>,
    ) -> BotResult<User> {
        if let Some(user) = self.store.users.get_by_telegram_id(telegram_user_id).await? {
            return Ok(user);
        }

        self.store
            .users
            .create(&NewUser {
                telegram_user_id,
                username: username.map(str::to_string),
                first_name: first_name.map(str::to_string),
            })
            .await
    }

    /// Derive the budget status for a user on the given date
    ///
    /// Returns `None` when no budget period contains the date. The spend
    /// total covers the whole budget period, not just days up to `date`.
    pub async fn budget_status(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> BotResult<Option<BudgetStatus>> {
        let Some(budget) = self.store.budgets.active_on(user_id, date).await? else {
            return Ok(None);
        };

        let total_spent = self
            .store
            .expenses
            .total_spent_in_range(user_id, budget.start_date, budget.end_date)
            .await?;

        Ok(Some(calculate_budget_status(
            budget.total_amount,
            total_spent,
            budget.start_date,
            budget.end_date,
            date,
        )))
    }

    /// Create a new budget period for a user
    pub async fn create_budget(
        &self,
        user_id: Uuid,
        total_amount: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BotResult<Budget> {
        self.store
            .budgets
            .create(&NewBudget {
                user_id,
                total_amount,
                start_date,
                end_date,
            })
            .await
    }
}
