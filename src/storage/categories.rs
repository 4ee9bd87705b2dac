//! Category store
//!
//! Read-only access to the `categories` reference table.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::BotResult;
use crate::models::Category;

use super::client::SupabaseClient;

const TABLE: &str = "categories";

/// Store for expense categories
#[derive(Debug, Clone)]
pub struct CategoryStore {
    client: Arc<SupabaseClient>,
}

impl CategoryStore {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    /// List all categories ordered by name
    pub async fn list(&self) -> BotResult<Vec<Category>> {
        self.client
            .select(TABLE, &[("order", "name.asc".to_string())])
            .await
    }

    /// Fetch a category by id
    pub async fn get(&self, category_id: Uuid) -> BotResult<Option<Category>> {
        self.client
            .select_one(TABLE, &[("id", format!("eq.{category_id}"))])
            .await
    }
}
