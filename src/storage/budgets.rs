//! Budget store
//!
//! Access to the `budgets` table. The active budget for a date is resolved
//! by range containment; when periods overlap the most recently created one
//! wins.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::BotResult;
use crate::models::{Budget, NewBudget};

use super::client::SupabaseClient;

const TABLE: &str = "budgets";

/// Store for budget periods
#[derive(Debug, Clone)]
pub struct BudgetStore {
    client: Arc<SupabaseClient>,
}

impl BudgetStore {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    /// Fetch the budget active on the given date, if any
    pub async fn active_on(&self, user_id: Uuid, date: NaiveDate) -> BotResult<Option<Budget>> {
        self.client
            .select_one(
                TABLE,
                &[
                    ("user_id", format!("eq.{user_id}")),
                    ("start_date", format!("lte.{date}")),
                    ("end_date", format!("gte.{date}")),
                    ("order", "created_at.desc".to_string()),
                ],
            )
            .await
    }

    /// Create a new budget period
    pub async fn create(&self, new_budget: &NewBudget) -> BotResult<Budget> {
        self.client.insert(TABLE, new_budget).await
    }
}
