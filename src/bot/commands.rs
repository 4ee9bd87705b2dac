//! Bot commands
//!
//! Slash commands recognized by the dispatcher. Admin commands are declared
//! here like any other; the handler enforces the access level.

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Debug, Clone, PartialEq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "start the bot and show help")]
    Start,
    #[command(description = "show current budget status")]
    Budget,
    #[command(description = "set a new budget period")]
    Setbudget,
    #[command(description = "browse expense history")]
    History,
    #[command(description = "cancel the current operation")]
    Cancel,
    #[command(description = "authorize a user by Telegram id (admin)")]
    Adduser(String),
    #[command(description = "revoke a user's access (admin)")]
    Removeuser(String),
    #[command(description = "list authorized users (admin)")]
    Listusers,
    #[command(description = "show your Telegram id (admin)")]
    Myid,
}
