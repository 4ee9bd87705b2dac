//! User store
//!
//! Lookup and lazy creation of `users` rows. The uniqueness invariant (one
//! row per Telegram id) is enforced by the store's unique column.

use std::sync::Arc;

use crate::error::BotResult;
use crate::models::{NewUser, User};

use super::client::SupabaseClient;

const TABLE: &str = "users";

/// Store for registered users
#[derive(Debug, Clone)]
pub struct UserStore {
    client: Arc<SupabaseClient>,
}

impl UserStore {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    /// Fetch a user by Telegram id
    pub async fn get_by_telegram_id(&self, telegram_user_id: i64) -> BotResult<Option<User>> {
        self.client
            .select_one(
                TABLE,
                &[("telegram_user_id", format!("eq.{telegram_user_id}"))],
            )
            .await
    }

    /// Create a new user row
    pub async fn create(&self, new_user: &NewUser) -> BotResult<User> {
        self.client.insert(TABLE, new_user).await
    }
}
