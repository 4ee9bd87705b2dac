//! User model
//!
//! Users are created lazily on first interaction; exactly one row exists per
//! Telegram id. Budgets and expenses reference the store-assigned user id,
//! not the Telegram id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered bot user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned id, referenced by budgets and expenses
    pub id: Uuid,

    /// Telegram user id (unique)
    pub telegram_user_id: i64,

    /// Telegram username, if the account has one
    pub username: Option<String>,

    /// First name as reported by Telegram
    pub first_name: Option<String>,
}

/// Insert payload for a new user
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub telegram_user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_store_row() {
        let json = format!(
            r#"{{"id":"{}","telegram_user_id":99,"username":"bob","first_name":"Bob"}}"#,
            Uuid::new_v4()
        );
        let user: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user.telegram_user_id, 99);
        assert_eq!(user.username.as_deref(), Some("bob"));
    }

    #[test]
    fn test_new_user_serializes_nulls() {
        let new_user = NewUser {
            telegram_user_id: 7,
            username: None,
            first_name: None,
        };
        let json = serde_json::to_value(&new_user).unwrap();
        assert_eq!(json["telegram_user_id"], 7);
        assert!(json["username"].is_null());
    }
}
