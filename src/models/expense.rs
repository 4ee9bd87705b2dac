//! Expense model
//!
//! Expenses are created when a parsed amount/description pair is confirmed
//! with a category. Edits go through [`ExpensePatch`], which lists only the
//! mutable fields with optional-presence semantics, so a partial update
//! serializes exactly the fields being changed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryRef;

/// A logged expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned id
    pub id: Uuid,

    /// Owning user (store id)
    pub user_id: Uuid,

    /// Category the expense was filed under
    pub category_id: Uuid,

    /// Amount spent
    pub amount: f64,

    /// Free-text description, 1-200 characters
    pub description: String,

    /// Calendar date the expense applies to
    pub expense_date: NaiveDate,

    /// Budget the expense was attached to, if one was active when logged
    pub budget_id: Option<Uuid>,

    /// When the expense was recorded (store-assigned)
    pub created_at: Option<DateTime<Utc>>,
}

/// An expense with the category fragment embedded by a join query
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseWithCategory {
    #[serde(flatten)]
    pub expense: Expense,

    /// Embedded `{name, emoji}` from the categories table; absent if the
    /// category row disappeared out from under the expense
    pub categories: Option<CategoryRef>,
}

impl ExpenseWithCategory {
    /// Category label, with a neutral fallback when the join came up empty
    pub fn category_label(&self) -> String {
        match &self.categories {
            Some(category) => category.label(),
            None => "📦 Unknown".to_string(),
        }
    }
}

/// Insert payload for a new expense
#[derive(Debug, Clone, Serialize)]
pub struct NewExpense {
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub amount: f64,
    pub description: String,
    pub expense_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<Uuid>,
}

/// Partial update for an expense
///
/// Only the allowed mutable fields appear here; a `None` field is omitted
/// from the serialized payload entirely, so the store leaves it untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpensePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

impl ExpensePatch {
    /// Patch that changes only the amount
    pub fn amount(amount: f64) -> Self {
        Self {
            amount: Some(amount),
            ..Self::default()
        }
    }

    /// Patch that changes only the description
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Patch that changes only the category
    pub fn category(category_id: Uuid) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    /// True when no fields are set
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.description.is_none() && self.category_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = ExpensePatch::amount(75.0);
        let json = serde_json::to_value(&patch).unwrap();

        assert_eq!(json["amount"], 75.0);
        assert!(json.get("description").is_none());
        assert!(json.get("category_id").is_none());
    }

    #[test]
    fn test_empty_patch() {
        let patch = ExpensePatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }

    #[test]
    fn test_description_patch() {
        let patch = ExpensePatch::description("coffee");
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["description"], "coffee");
        assert!(json.get("amount").is_none());
    }

    #[test]
    fn test_new_expense_omits_absent_budget() {
        let payload = NewExpense {
            user_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            amount: 50.0,
            description: "groceries".into(),
            expense_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            budget_id: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("budget_id").is_none());
        assert_eq!(json["expense_date"], "2025-01-10");
    }

    #[test]
    fn test_join_row_deserializes() {
        let json = format!(
            r#"{{"id":"{}","user_id":"{}","category_id":"{}","amount":12.5,
                "description":"coffee","expense_date":"2025-01-10","budget_id":null,
                "created_at":null,"categories":{{"name":"Dining","emoji":"🍽️"}}}}"#,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let row: ExpenseWithCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(row.expense.amount, 12.5);
        assert_eq!(row.category_label(), "🍽️ Dining");
    }

    #[test]
    fn test_missing_join_falls_back() {
        let json = format!(
            r#"{{"id":"{}","user_id":"{}","category_id":"{}","amount":5.0,
                "description":"gum","expense_date":"2025-01-10","budget_id":null,
                "created_at":null,"categories":null}}"#,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let row: ExpenseWithCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(row.category_label(), "📦 Unknown");
    }
}
