//! Telegram bot layer
//!
//! Wires the dispatcher together: slash commands, free-form expense
//! messages, and inline keyboard callbacks, all sharing one [`BotContext`].

pub mod auth;
pub mod callback;
pub mod commands;
pub mod handlers;
pub mod keyboards;
pub mod session;

use std::sync::Arc;

use teloxide::prelude::*;

pub use handlers::BotContext;

use commands::Command;

/// Run the bot until shutdown
pub async fn run(bot: Bot, ctx: Arc<BotContext>) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handlers::handle_command),
        )
        .branch(Update::filter_message().endpoint(handlers::handle_message))
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback));

    tracing::info!("starting dispatcher");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
