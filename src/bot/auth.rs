//! Access control
//!
//! Every update runs through [`check_access`] before any handler logic.
//! Membership lives in the `authorized_users` table; the configured owner is
//! enrolled as an admin on their first contact and can never be removed.

use teloxide::types::User as TelegramUser;

use crate::error::BotResult;
use crate::models::NewAuthorizedUser;
use crate::storage::Store;

/// The access level a sender holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Not in the authorized user list
    Denied,
    /// Authorized, no admin commands
    User,
    /// Authorized with admin commands
    Admin,
}

impl Access {
    pub fn is_allowed(self) -> bool {
        self != Self::Denied
    }

    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }
}

/// Resolve the access level for a Telegram sender
///
/// The owner is self-enrolling: on their first message a row is created with
/// the admin flag set, so a fresh deployment needs no manual seeding.
pub async fn check_access(
    store: &Store,
    owner_id: i64,
    user: &TelegramUser,
) -> BotResult<Access> {
    let telegram_user_id = user.id.0 as i64;

    if let Some(row) = store.authorized_users.get(telegram_user_id).await? {
        if row.is_admin || telegram_user_id == owner_id {
            return Ok(Access::Admin);
        }
        return Ok(Access::User);
    }

    if telegram_user_id == owner_id {
        tracing::info!(telegram_user_id, "enrolling owner as admin on first contact");
        store
            .authorized_users
            .add(&NewAuthorizedUser {
                telegram_user_id,
                username: user.username.clone(),
                first_name: Some(user.first_name.clone()),
                is_admin: true,
                added_by_telegram_id: Some(owner_id),
            })
            .await?;
        return Ok(Access::Admin);
    }

    Ok(Access::Denied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_predicates() {
        assert!(!Access::Denied.is_allowed());
        assert!(Access::User.is_allowed());
        assert!(Access::Admin.is_allowed());

        assert!(!Access::Denied.is_admin());
        assert!(!Access::User.is_admin());
        assert!(Access::Admin.is_admin());
    }
}
