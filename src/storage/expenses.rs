//! Expense store
//!
//! CRUD over the `expenses` table, including the select-with-join variant
//! that embeds the category name and emoji for display.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::BotResult;
use crate::models::{Expense, ExpensePatch, ExpenseWithCategory, NewExpense};

use super::client::SupabaseClient;

const TABLE: &str = "expenses";

/// Columns plus the embedded category fragment
const SELECT_WITH_CATEGORY: &str = "*,categories(name,emoji)";

/// Store for expenses
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    client: Arc<SupabaseClient>,
}

impl ExpenseStore {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    /// Record a new expense
    pub async fn create(&self, new_expense: &NewExpense) -> BotResult<Expense> {
        self.client.insert(TABLE, new_expense).await
    }

    /// Fetch an expense with its category fragment
    pub async fn get_with_category(
        &self,
        expense_id: Uuid,
    ) -> BotResult<Option<ExpenseWithCategory>> {
        self.client
            .select_one(
                TABLE,
                &[
                    ("select", SELECT_WITH_CATEGORY.to_string()),
                    ("id", format!("eq.{expense_id}")),
                ],
            )
            .await
    }

    /// Fetch a user's expenses within a date range (both ends inclusive)
    pub async fn in_range(
        &self,
        user_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BotResult<Vec<Expense>> {
        self.client
            .select(
                TABLE,
                &[
                    ("user_id", format!("eq.{user_id}")),
                    ("expense_date", format!("gte.{start_date}")),
                    ("expense_date", format!("lte.{end_date}")),
                    ("order", "expense_date.desc,created_at.desc".to_string()),
                ],
            )
            .await
    }

    /// Sum of a user's spending within a date range
    pub async fn total_spent_in_range(
        &self,
        user_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BotResult<f64> {
        let expenses = self.in_range(user_id, start_date, end_date).await?;
        Ok(expenses.iter().map(|e| e.amount).sum())
    }

    /// Fetch one page of a user's expense history, newest first
    pub async fn page(
        &self,
        user_id: Uuid,
        limit: usize,
        offset: usize,
    ) -> BotResult<Vec<ExpenseWithCategory>> {
        self.client
            .select(
                TABLE,
                &[
                    ("select", SELECT_WITH_CATEGORY.to_string()),
                    ("user_id", format!("eq.{user_id}")),
                    ("order", "expense_date.desc,created_at.desc".to_string()),
                    ("limit", limit.to_string()),
                    ("offset", offset.to_string()),
                ],
            )
            .await
    }

    /// Count a user's expenses
    pub async fn count(&self, user_id: Uuid) -> BotResult<u64> {
        self.client
            .count(TABLE, &[("user_id", format!("eq.{user_id}"))])
            .await
    }

    /// Apply a field patch to an expense
    ///
    /// Returns `None` when the expense no longer exists.
    pub async fn update(
        &self,
        expense_id: Uuid,
        patch: &ExpensePatch,
    ) -> BotResult<Option<Expense>> {
        self.client
            .patch(TABLE, &[("id", format!("eq.{expense_id}"))], patch)
            .await
    }

    /// Delete an expense
    pub async fn delete(&self, expense_id: Uuid) -> BotResult<()> {
        self.client
            .delete(TABLE, &[("id", format!("eq.{expense_id}"))])
            .await
    }
}
