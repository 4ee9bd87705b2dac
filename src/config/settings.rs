//! Runtime settings for budgetbot
//!
//! Collects the bot token, store credentials, the designated owner id and
//! the health endpoint port from the environment. Validation reports every
//! missing variable at once rather than failing on the first.

use crate::error::{BotError, BotResult};

/// Default port for the liveness endpoint
const DEFAULT_HEALTH_PORT: u16 = 8080;

/// Runtime settings for budgetbot
#[derive(Debug, Clone)]
pub struct Settings {
    /// Telegram bot API token
    pub telegram_bot_token: String,

    /// Base URL of the Supabase project (no trailing slash required)
    pub supabase_url: String,

    /// Supabase service API key
    pub supabase_key: String,

    /// Telegram id of the designated owner account
    pub owner_id: i64,

    /// Port the liveness endpoint listens on
    pub health_port: u16,
}

impl Settings {
    /// Load settings from process environment variables
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary variable lookup
    ///
    /// Split out from [`Settings::from_env`] so tests can inject variables
    /// without touching the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> BotResult<Self> {
        let mut missing = Vec::new();

        let mut require = |key: &'static str| {
            let value = get(key).filter(|v| !v.is_empty());
            if value.is_none() {
                missing.push(key);
            }
            value
        };

        let telegram_bot_token = require("TELEGRAM_BOT_TOKEN");
        let supabase_url = require("SUPABASE_URL");
        let supabase_key = require("SUPABASE_KEY");
        let owner_id = require("ADMIN_USER_ID");

        let (Some(telegram_bot_token), Some(supabase_url), Some(supabase_key), Some(owner_id)) =
            (telegram_bot_token, supabase_url, supabase_key, owner_id)
        else {
            return Err(BotError::Config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        };

        let owner_id: i64 = owner_id
            .parse()
            .map_err(|_| BotError::Config("ADMIN_USER_ID must be a numeric Telegram id".into()))?;

        let health_port = match get("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| BotError::Config("PORT must be a valid port number".into()))?,
            None => DEFAULT_HEALTH_PORT,
        };

        Ok(Self {
            telegram_bot_token,
            supabase_url,
            supabase_key,
            owner_id,
            health_port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_KEY", "service-key"),
            ("ADMIN_USER_ID", "42"),
        ])
    }

    #[test]
    fn test_full_settings() {
        let vars = full_env();
        let settings = Settings::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(settings.telegram_bot_token, "123:abc");
        assert_eq!(settings.owner_id, 42);
        assert_eq!(settings.health_port, DEFAULT_HEALTH_PORT);
    }

    #[test]
    fn test_custom_port() {
        let mut vars = full_env();
        vars.insert("PORT".into(), "9000".into());
        let settings = Settings::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(settings.health_port, 9000);
    }

    #[test]
    fn test_missing_variables_listed() {
        let vars = env(&[("SUPABASE_URL", "https://example.supabase.co")]);
        let err = Settings::from_lookup(|k| vars.get(k).cloned()).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("TELEGRAM_BOT_TOKEN"));
        assert!(message.contains("SUPABASE_KEY"));
        assert!(message.contains("ADMIN_USER_ID"));
        assert!(!message.contains("SUPABASE_URL,"));
    }

    #[test]
    fn test_empty_counts_as_missing() {
        let mut vars = full_env();
        vars.insert("SUPABASE_KEY".into(), "".into());
        let err = Settings::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_KEY"));
    }

    #[test]
    fn test_invalid_owner_id() {
        let mut vars = full_env();
        vars.insert("ADMIN_USER_ID".into(), "not-a-number".into());
        let err = Settings::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, BotError::Config(_)));
    }
}
