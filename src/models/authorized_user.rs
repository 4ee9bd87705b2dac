//! Authorized user model
//!
//! Membership in the `authorized_users` table is what grants access to the
//! bot. One designated owner id is enrolled as admin outside the normal
//! admin-add flow; everyone else is added by an admin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user allowed to talk to the bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizedUser {
    /// Store-assigned id
    pub id: Uuid,

    /// Telegram user id (unique)
    pub telegram_user_id: i64,

    /// Telegram username, if the account has one
    pub username: Option<String>,

    /// First name as reported by Telegram
    pub first_name: Option<String>,

    /// Whether this user may run admin commands
    #[serde(default)]
    pub is_admin: bool,

    /// Telegram id of the admin who granted access
    pub added_by_telegram_id: Option<i64>,

    /// When access was granted (store-assigned)
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for a new authorized user
#[derive(Debug, Clone, Serialize)]
pub struct NewAuthorizedUser {
    pub telegram_user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub is_admin: bool,
    pub added_by_telegram_id: Option<i64>,
}

impl AuthorizedUser {
    /// Human-readable label for admin listings: id, then name/username when known
    pub fn display_label(&self) -> String {
        let mut label = format!("`{}`", self.telegram_user_id);
        if let Some(name) = &self.first_name {
            label.push_str(&format!(" - {}", name));
        }
        if let Some(username) = &self.username {
            label.push_str(&format!(" (@{})", username));
        }
        if self.is_admin {
            label.push_str(" 👑");
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AuthorizedUser {
        AuthorizedUser {
            id: Uuid::new_v4(),
            telegram_user_id: 42,
            username: Some("alice".into()),
            first_name: Some("Alice".into()),
            is_admin: true,
            added_by_telegram_id: Some(42),
            created_at: None,
        }
    }

    #[test]
    fn test_display_label() {
        let user = sample();
        assert_eq!(user.display_label(), "`42` - Alice (@alice) 👑");
    }

    #[test]
    fn test_display_label_minimal() {
        let user = AuthorizedUser {
            username: None,
            first_name: None,
            is_admin: false,
            ..sample()
        };
        assert_eq!(user.display_label(), "`42`");
    }

    #[test]
    fn test_is_admin_defaults_false() {
        let json = format!(
            r#"{{"id":"{}","telegram_user_id":7,"username":null,"first_name":null,"added_by_telegram_id":null,"created_at":null}}"#,
            Uuid::new_v4()
        );
        let user: AuthorizedUser = serde_json::from_str(&json).unwrap();
        assert!(!user.is_admin);
    }
}
