//! Authorized user store
//!
//! CRUD over the `authorized_users` table. Membership here is the access
//! gate for every bot entry point.

use std::sync::Arc;

use crate::error::BotResult;
use crate::models::{AuthorizedUser, NewAuthorizedUser};

use super::client::SupabaseClient;

const TABLE: &str = "authorized_users";

/// Store for authorized users
#[derive(Debug, Clone)]
pub struct AuthorizedUserStore {
    client: Arc<SupabaseClient>,
}

impl AuthorizedUserStore {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    /// Check whether a Telegram id is authorized
    pub async fn is_authorized(&self, telegram_user_id: i64) -> BotResult<bool> {
        Ok(self.get(telegram_user_id).await?.is_some())
    }

    /// Fetch an authorized user by Telegram id
    pub async fn get(&self, telegram_user_id: i64) -> BotResult<Option<AuthorizedUser>> {
        self.client
            .select_one(
                TABLE,
                &[("telegram_user_id", format!("eq.{telegram_user_id}"))],
            )
            .await
    }

    /// Grant access to a new user
    pub async fn add(&self, new_user: &NewAuthorizedUser) -> BotResult<AuthorizedUser> {
        self.client.insert(TABLE, new_user).await
    }

    /// Revoke access for a Telegram id
    pub async fn remove(&self, telegram_user_id: i64) -> BotResult<()> {
        self.client
            .delete(
                TABLE,
                &[("telegram_user_id", format!("eq.{telegram_user_id}"))],
            )
            .await
    }

    /// List all authorized users, newest first
    pub async fn list(&self) -> BotResult<Vec<AuthorizedUser>> {
        self.client
            .select(TABLE, &[("order", "created_at.desc".to_string())])
            .await
    }
}
