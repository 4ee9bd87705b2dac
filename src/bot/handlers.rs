//! Update handlers
//!
//! The three dispatcher endpoints (commands, free-form messages, button
//! clicks) and the flow logic behind them. Each endpoint resolves the
//! sender's access level first, then routes on the command, the session
//! state, or the decoded callback action.
//!
//! Handler failures are reported to the user as a generic apology and
//! logged with full detail; they never take the dispatcher down.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode};
use uuid::Uuid;

use crate::display::{
    fmt_money, format_budget_created, format_budget_status, format_delete_prompt,
    format_expense_confirmation, format_expense_details, format_history_page, format_user_list,
    welcome_message,
};
use crate::error::{BotError, BotResult};
use crate::models::{ExpensePatch, NewAuthorizedUser, NewExpense};
use crate::services::{
    is_expense_message, parse_expense, UserService, MAX_AMOUNT, MAX_DESCRIPTION_LEN,
};
use crate::storage::Store;

use super::auth::{check_access, Access};
use super::callback::CallbackAction;
use super::commands::Command;
use super::keyboards;
use super::session::{PendingExpense, SessionState, SessionStore};

/// Expenses shown per history page
pub const HISTORY_PAGE_SIZE: usize = 5;

/// Upper bound for a budget period total
const MAX_BUDGET_AMOUNT: f64 = 100_000_000.0;

const DENIED_TEXT: &str =
    "⛔ You are not authorized to use this bot.\nAsk an admin to add you with your Telegram ID.";

const ERROR_TEXT: &str = "⚠️ Something went wrong. Please try again.";

/// Shared state handed to every endpoint
pub struct BotContext {
    pub store: Store,
    pub sessions: SessionStore,
    pub owner_id: i64,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Command endpoint
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<BotContext>,
) -> BotResult<()> {
    if let Err(error) = command_inner(&bot, &msg, cmd, &ctx).await {
        tracing::error!(?error, chat_id = msg.chat.id.0, "command handler failed");
        let _ = bot.send_message(msg.chat.id, ERROR_TEXT).await;
    }
    Ok(())
}

/// Free-form message endpoint
pub async fn handle_message(bot: Bot, msg: Message, ctx: Arc<BotContext>) -> BotResult<()> {
    if let Err(error) = message_inner(&bot, &msg, &ctx).await {
        tracing::error!(?error, chat_id = msg.chat.id.0, "message handler failed");
        let _ = bot.send_message(msg.chat.id, ERROR_TEXT).await;
    }
    Ok(())
}

/// Callback query endpoint
pub async fn handle_callback(bot: Bot, q: CallbackQuery, ctx: Arc<BotContext>) -> BotResult<()> {
    let _ = bot.answer_callback_query(q.id.clone()).await;
    if let Err(error) = callback_inner(&bot, &q, &ctx).await {
        tracing::error!(?error, user_id = q.from.id.0, "callback handler failed");
        if let Some(msg) = &q.message {
            let _ = bot.send_message(msg.chat.id, ERROR_TEXT).await;
        }
    }
    Ok(())
}

async fn command_inner(
    bot: &Bot,
    msg: &Message,
    cmd: Command,
    ctx: &BotContext,
) -> BotResult<()> {
    let Some(sender) = msg.from() else {
        return Ok(());
    };
    let access = check_access(&ctx.store, ctx.owner_id, sender).await?;
    if !access.is_allowed() {
        bot.send_message(msg.chat.id, DENIED_TEXT).await?;
        return Ok(());
    }
    let sender_id = sender.id.0 as i64;

    match cmd {
        Command::Start => {
            ctx.sessions.clear(sender_id);
            let service = UserService::new(&ctx.store);
            service
                .get_or_create(sender_id, sender.username.as_deref(), Some(&sender.first_name))
                .await?;
            bot.send_message(
                msg.chat.id,
                welcome_message(&sender.first_name, access.is_admin()),
            )
            .parse_mode(ParseMode::Markdown)
            .await?;
        }

        Command::Budget => {
            let service = UserService::new(&ctx.store);
            let user = service
                .get_or_create(sender_id, sender.username.as_deref(), Some(&sender.first_name))
                .await?;
            match service.budget_status(user.id, today()).await? {
                Some(status) => {
                    bot.send_message(msg.chat.id, format_budget_status(&status))
                        .parse_mode(ParseMode::Markdown)
                        .await?;
                }
                None => {
                    bot.send_message(
                        msg.chat.id,
                        "📭 No active budget for today.\nCreate one with /setbudget",
                    )
                    .await?;
                }
            }
        }

        Command::Setbudget => {
            ctx.sessions.set(sender_id, SessionState::AwaitingBudgetAmount);
            bot.send_message(
                msg.chat.id,
                "💰 *Set New Budget*\n\nHow much do you want to budget for this period?\n\
                 Send a number, e.g. `3000`",
            )
            .parse_mode(ParseMode::Markdown)
            .await?;
        }

        Command::History => {
            let service = UserService::new(&ctx.store);
            let user = service
                .get_or_create(sender_id, sender.username.as_deref(), Some(&sender.first_name))
                .await?;
            send_history_page(bot, msg.chat.id, None, &ctx.store, user.id, 0).await?;
        }

        Command::Cancel => {
            ctx.sessions.clear(sender_id);
            bot.send_message(msg.chat.id, "✅ Operation cancelled.").await?;
        }

        Command::Adduser(arg) => {
            if !require_admin(bot, msg, access).await? {
                return Ok(());
            }
            add_user(bot, msg, ctx, sender_id, &arg).await?;
        }

        Command::Removeuser(arg) => {
            if !require_admin(bot, msg, access).await? {
                return Ok(());
            }
            remove_user(bot, msg, ctx, sender_id, &arg).await?;
        }

        Command::Listusers => {
            if !require_admin(bot, msg, access).await? {
                return Ok(());
            }
            let users = ctx.store.authorized_users.list().await?;
            bot.send_message(msg.chat.id, format_user_list(&users))
                .parse_mode(ParseMode::Markdown)
                .await?;
        }

        Command::Myid => {
            if !require_admin(bot, msg, access).await? {
                return Ok(());
            }
            bot.send_message(msg.chat.id, format!("🆔 Your Telegram ID: `{sender_id}`"))
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
    }

    Ok(())
}

/// Reply with a refusal and return `false` unless the sender is an admin
async fn require_admin(bot: &Bot, msg: &Message, access: Access) -> BotResult<bool> {
    if !access.is_admin() {
        bot.send_message(msg.chat.id, "⛔ This command is only available to admins.")
            .await?;
        return Ok(false);
    }
    Ok(true)
}

async fn add_user(
    bot: &Bot,
    msg: &Message,
    ctx: &BotContext,
    sender_id: i64,
    arg: &str,
) -> BotResult<()> {
    let Ok(target_id) = arg.trim().parse::<i64>() else {
        bot.send_message(
            msg.chat.id,
            "Usage: /adduser <telegram\\_id>\nThe user can find their ID with /myid",
        )
        .parse_mode(ParseMode::Markdown)
        .await?;
        return Ok(());
    };

    if ctx.store.authorized_users.is_authorized(target_id).await? {
        bot.send_message(msg.chat.id, "ℹ️ That user is already authorized.")
            .await?;
        return Ok(());
    }

    ctx.store
        .authorized_users
        .add(&NewAuthorizedUser {
            telegram_user_id: target_id,
            username: None,
            first_name: None,
            is_admin: false,
            added_by_telegram_id: Some(sender_id),
        })
        .await?;
    tracing::info!(target_id, added_by = sender_id, "user authorized");

    bot.send_message(
        msg.chat.id,
        format!("✅ User `{target_id}` is now authorized."),
    )
    .parse_mode(ParseMode::Markdown)
    .await?;
    Ok(())
}

async fn remove_user(
    bot: &Bot,
    msg: &Message,
    ctx: &BotContext,
    sender_id: i64,
    arg: &str,
) -> BotResult<()> {
    let Ok(target_id) = arg.trim().parse::<i64>() else {
        bot.send_message(msg.chat.id, "Usage: /removeuser <telegram\\_id>")
            .parse_mode(ParseMode::Markdown)
            .await?;
        return Ok(());
    };

    if target_id == ctx.owner_id {
        bot.send_message(msg.chat.id, "⛔ The bot owner cannot be removed.")
            .await?;
        return Ok(());
    }
    if target_id == sender_id {
        bot.send_message(msg.chat.id, "⛔ You cannot remove yourself.")
            .await?;
        return Ok(());
    }
    if !ctx.store.authorized_users.is_authorized(target_id).await? {
        bot.send_message(msg.chat.id, "ℹ️ That user is not in the authorized list.")
            .await?;
        return Ok(());
    }

    ctx.store.authorized_users.remove(target_id).await?;
    tracing::info!(target_id, removed_by = sender_id, "user access revoked");

    bot.send_message(
        msg.chat.id,
        format!("✅ User `{target_id}` has been removed."),
    )
    .parse_mode(ParseMode::Markdown)
    .await?;
    Ok(())
}

async fn message_inner(bot: &Bot, msg: &Message, ctx: &BotContext) -> BotResult<()> {
    let Some(sender) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let access = check_access(&ctx.store, ctx.owner_id, sender).await?;
    if !access.is_allowed() {
        bot.send_message(msg.chat.id, DENIED_TEXT).await?;
        return Ok(());
    }
    let sender_id = sender.id.0 as i64;

    match ctx.sessions.get(sender_id) {
        Some(SessionState::AwaitingBudgetAmount) => {
            budget_amount_step(bot, msg, ctx, sender_id, text).await
        }
        Some(SessionState::AwaitingStartDate { amount }) => {
            budget_start_step(bot, msg, ctx, sender_id, amount, text).await
        }
        Some(SessionState::AwaitingEndDate { amount, start }) => {
            budget_end_step(bot, msg, ctx, sender, amount, start, text).await
        }
        Some(SessionState::AwaitingNewAmount { expense_id }) => {
            edit_amount_step(bot, msg, ctx, sender_id, expense_id, text).await
        }
        Some(SessionState::AwaitingNewDescription { expense_id }) => {
            edit_description_step(bot, msg, ctx, sender_id, expense_id, text).await
        }
        // States waiting on a button click fall through to normal parsing;
        // starting a new expense implicitly abandons the old prompt.
        _ => free_text(bot, msg, ctx, sender, text).await,
    }
}

async fn budget_amount_step(
    bot: &Bot,
    msg: &Message,
    ctx: &BotContext,
    sender_id: i64,
    text: &str,
) -> BotResult<()> {
    let amount = match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 && amount <= MAX_BUDGET_AMOUNT => amount,
        Ok(amount) if amount.is_finite() && amount > MAX_BUDGET_AMOUNT => {
            bot.send_message(msg.chat.id, "❌ That amount is too large. Try a smaller one.")
                .await?;
            return Ok(());
        }
        _ => {
            bot.send_message(
                msg.chat.id,
                "❌ Please send a positive number, e.g. `3000`",
            )
            .parse_mode(ParseMode::Markdown)
            .await?;
            return Ok(());
        }
    };

    ctx.sessions
        .set(sender_id, SessionState::AwaitingStartDate { amount });
    bot.send_message(
        msg.chat.id,
        format!(
            "💰 Budget: {}\n\n📅 When does this budget period *start*?\n\
             Send a date as `DD-MM-YYYY`, e.g. `01-01-2025`",
            fmt_money(amount)
        ),
    )
    .parse_mode(ParseMode::Markdown)
    .await?;
    Ok(())
}

async fn budget_start_step(
    bot: &Bot,
    msg: &Message,
    ctx: &BotContext,
    sender_id: i64,
    amount: f64,
    text: &str,
) -> BotResult<()> {
    let Some(start) = parse_user_date(text) else {
        bot.send_message(
            msg.chat.id,
            "❌ I couldn't read that date. Use `DD-MM-YYYY`, e.g. `01-01-2025`",
        )
        .parse_mode(ParseMode::Markdown)
        .await?;
        return Ok(());
    };

    ctx.sessions
        .set(sender_id, SessionState::AwaitingEndDate { amount, start });
    bot.send_message(
        msg.chat.id,
        format!(
            "📅 Start: {}\n\nAnd when does it *end*? (`DD-MM-YYYY`)",
            start.format("%b %d, %Y")
        ),
    )
    .parse_mode(ParseMode::Markdown)
    .await?;
    Ok(())
}

async fn budget_end_step(
    bot: &Bot,
    msg: &Message,
    ctx: &BotContext,
    sender: &teloxide::types::User,
    amount: f64,
    start: NaiveDate,
    text: &str,
) -> BotResult<()> {
    let Some(end) = parse_user_date(text) else {
        bot.send_message(
            msg.chat.id,
            "❌ I couldn't read that date. Use `DD-MM-YYYY`, e.g. `31-01-2025`",
        )
        .parse_mode(ParseMode::Markdown)
        .await?;
        return Ok(());
    };
    if end < start {
        bot.send_message(msg.chat.id, "❌ The end date must not be before the start date.")
            .await?;
        return Ok(());
    }

    let sender_id = sender.id.0 as i64;
    let service = UserService::new(&ctx.store);
    let user = service
        .get_or_create(sender_id, sender.username.as_deref(), Some(&sender.first_name))
        .await?;
    let budget = service.create_budget(user.id, amount, start, end).await?;
    ctx.sessions.clear(sender_id);
    tracing::info!(user_id = %user.id, budget_id = %budget.id, "budget created");

    bot.send_message(msg.chat.id, format_budget_created(&budget))
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}

async fn edit_amount_step(
    bot: &Bot,
    msg: &Message,
    ctx: &BotContext,
    sender_id: i64,
    expense_id: Uuid,
    text: &str,
) -> BotResult<()> {
    let amount = match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 && amount <= MAX_AMOUNT => amount,
        _ => {
            bot.send_message(
                msg.chat.id,
                format!(
                    "❌ Send a positive number up to {}.",
                    fmt_money(MAX_AMOUNT)
                ),
            )
            .await?;
            return Ok(());
        }
    };

    let updated = ctx
        .store
        .expenses
        .update(expense_id, &ExpensePatch::amount(amount))
        .await?;
    ctx.sessions.clear(sender_id);

    match updated {
        Some(expense) => {
            bot.send_message(
                msg.chat.id,
                format!(
                    "✅ Amount updated to {} for \"{}\"",
                    fmt_money(expense.amount),
                    expense.description
                ),
            )
            .await?;
        }
        None => {
            bot.send_message(msg.chat.id, "❌ That expense no longer exists.")
                .await?;
        }
    }
    Ok(())
}

async fn edit_description_step(
    bot: &Bot,
    msg: &Message,
    ctx: &BotContext,
    sender_id: i64,
    expense_id: Uuid,
    text: &str,
) -> BotResult<()> {
    let description = text.trim();
    if description.is_empty() || description.chars().count() > MAX_DESCRIPTION_LEN {
        bot.send_message(
            msg.chat.id,
            format!("❌ The description must be 1 to {MAX_DESCRIPTION_LEN} characters."),
        )
        .await?;
        return Ok(());
    }

    let updated = ctx
        .store
        .expenses
        .update(expense_id, &ExpensePatch::description(description))
        .await?;
    ctx.sessions.clear(sender_id);

    match updated {
        Some(expense) => {
            bot.send_message(
                msg.chat.id,
                format!("✅ Description updated to \"{}\"", expense.description),
            )
            .await?;
        }
        None => {
            bot.send_message(msg.chat.id, "❌ That expense no longer exists.")
                .await?;
        }
    }
    Ok(())
}

async fn free_text(
    bot: &Bot,
    msg: &Message,
    ctx: &BotContext,
    sender: &teloxide::types::User,
    text: &str,
) -> BotResult<()> {
    if !is_expense_message(text) {
        bot.send_message(
            msg.chat.id,
            "🤔 To log an expense, send an amount and a description:\n`50 groceries`\n\n\
             Or use /budget, /history, /setbudget.",
        )
        .parse_mode(ParseMode::Markdown)
        .await?;
        return Ok(());
    }

    let parsed = match parse_expense(text) {
        Ok(parsed) => parsed,
        Err(error) => {
            bot.send_message(msg.chat.id, error.to_string()).await?;
            return Ok(());
        }
    };

    let categories = ctx.store.categories.list().await?;
    if categories.is_empty() {
        return Err(BotError::Store("no categories configured".to_string()));
    }

    let sender_id = sender.id.0 as i64;
    ctx.sessions.set(
        sender_id,
        SessionState::AwaitingCategory {
            pending: PendingExpense {
                amount: parsed.amount,
                description: parsed.description.clone(),
            },
        },
    );

    bot.send_message(
        msg.chat.id,
        format!(
            "💰 {} - {}\n\n🏷️ Pick a category:",
            fmt_money(parsed.amount),
            parsed.description
        ),
    )
    .reply_markup(keyboards::category_keyboard(&categories))
    .await?;
    Ok(())
}

async fn callback_inner(bot: &Bot, q: &CallbackQuery, ctx: &BotContext) -> BotResult<()> {
    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let Some(action) = CallbackAction::parse(data) else {
        tracing::warn!(data, "unrecognized callback token");
        return Ok(());
    };
    let Some(msg) = &q.message else {
        return Ok(());
    };

    let access = check_access(&ctx.store, ctx.owner_id, &q.from).await?;
    if !access.is_allowed() {
        return Ok(());
    }
    let sender_id = q.from.id.0 as i64;

    match action {
        CallbackAction::Noop => {}

        CallbackAction::CancelExpense
        | CallbackAction::CancelEdit
        | CallbackAction::CancelDelete => {
            ctx.sessions.clear(sender_id);
            bot.edit_message_text(msg.chat.id, msg.id, "❌ Cancelled.").await?;
        }

        CallbackAction::SelectCategory(category_id) => {
            select_category(bot, msg, ctx, &q.from, category_id).await?;
        }

        CallbackAction::Edit(expense_id) => {
            let Some(row) = ctx.store.expenses.get_with_category(expense_id).await? else {
                bot.edit_message_text(msg.chat.id, msg.id, "❌ That expense no longer exists.")
                    .await?;
                return Ok(());
            };
            ctx.sessions
                .set(sender_id, SessionState::AwaitingEditChoice { expense_id });
            bot.edit_message_text(msg.chat.id, msg.id, format_expense_details(&row))
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboards::edit_options_keyboard(expense_id))
                .await?;
        }

        CallbackAction::EditAmount(expense_id) => {
            ctx.sessions
                .set(sender_id, SessionState::AwaitingNewAmount { expense_id });
            bot.edit_message_text(msg.chat.id, msg.id, "💰 Send the new amount:")
                .await?;
        }

        CallbackAction::EditDescription(expense_id) => {
            ctx.sessions
                .set(sender_id, SessionState::AwaitingNewDescription { expense_id });
            bot.edit_message_text(msg.chat.id, msg.id, "📝 Send the new description:")
                .await?;
        }

        CallbackAction::EditCategory(expense_id) => {
            let categories = ctx.store.categories.list().await?;
            ctx.sessions
                .set(sender_id, SessionState::AwaitingEditCategory { expense_id });
            bot.edit_message_text(msg.chat.id, msg.id, "🏷️ Pick the new category:")
                .reply_markup(keyboards::category_keyboard(&categories))
                .await?;
        }

        CallbackAction::Delete(expense_id) => {
            let Some(row) = ctx.store.expenses.get_with_category(expense_id).await? else {
                bot.edit_message_text(msg.chat.id, msg.id, "❌ That expense no longer exists.")
                    .await?;
                return Ok(());
            };
            ctx.sessions
                .set(sender_id, SessionState::AwaitingDeleteConfirm { expense_id });
            bot.edit_message_text(msg.chat.id, msg.id, format_delete_prompt(&row))
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboards::delete_confirmation_keyboard(expense_id))
                .await?;
        }

        CallbackAction::ConfirmDelete(expense_id) => {
            ctx.store.expenses.delete(expense_id).await?;
            ctx.sessions.clear(sender_id);
            tracing::info!(%expense_id, deleted_by = sender_id, "expense deleted");
            bot.edit_message_text(msg.chat.id, msg.id, "🗑️ Expense deleted.").await?;
        }

        CallbackAction::HistoryPage(page) => {
            let service = UserService::new(&ctx.store);
            let user = service
                .get_or_create(sender_id, q.from.username.as_deref(), Some(&q.from.first_name))
                .await?;
            send_history_page(bot, msg.chat.id, Some(msg.id), &ctx.store, user.id, page).await?;
        }
    }

    Ok(())
}

async fn select_category(
    bot: &Bot,
    msg: &Message,
    ctx: &BotContext,
    sender: &teloxide::types::User,
    category_id: Uuid,
) -> BotResult<()> {
    let sender_id = sender.id.0 as i64;

    let Some(category) = ctx.store.categories.get(category_id).await? else {
        return Err(BotError::category_not_found(category_id.to_string()));
    };

    match ctx.sessions.get(sender_id) {
        Some(SessionState::AwaitingCategory { pending }) => {
            let service = UserService::new(&ctx.store);
            let user = service
                .get_or_create(sender_id, sender.username.as_deref(), Some(&sender.first_name))
                .await?;

            let expense_date = today();
            let budget = ctx.store.budgets.active_on(user.id, expense_date).await?;
            let expense = ctx
                .store
                .expenses
                .create(&NewExpense {
                    user_id: user.id,
                    category_id,
                    amount: pending.amount,
                    description: pending.description.clone(),
                    expense_date,
                    budget_id: budget.as_ref().map(|b| b.id),
                })
                .await?;
            ctx.sessions.clear(sender_id);
            tracing::info!(expense_id = %expense.id, user_id = %user.id, "expense recorded");

            let status = service.budget_status(user.id, expense_date).await?;
            bot.edit_message_text(
                msg.chat.id,
                msg.id,
                format_expense_confirmation(
                    pending.amount,
                    &pending.description,
                    &category.label(),
                    status.as_ref(),
                ),
            )
            .parse_mode(ParseMode::Markdown)
            .await?;
        }

        Some(SessionState::AwaitingEditCategory { expense_id }) => {
            let updated = ctx
                .store
                .expenses
                .update(expense_id, &ExpensePatch::category(category_id))
                .await?;
            ctx.sessions.clear(sender_id);

            match updated {
                Some(_) => {
                    bot.edit_message_text(
                        msg.chat.id,
                        msg.id,
                        format!("✅ Category updated to {}", category.label()),
                    )
                    .await?;
                }
                None => {
                    bot.edit_message_text(
                        msg.chat.id,
                        msg.id,
                        "❌ That expense no longer exists.",
                    )
                    .await?;
                }
            }
        }

        _ => {
            bot.edit_message_text(
                msg.chat.id,
                msg.id,
                "⌛ This prompt has expired. Send the expense again.",
            )
            .await?;
        }
    }

    Ok(())
}

/// Render one history page, either as a fresh message or in place
async fn send_history_page(
    bot: &Bot,
    chat_id: ChatId,
    edit_message_id: Option<MessageId>,
    store: &Store,
    user_id: Uuid,
    page: usize,
) -> BotResult<()> {
    let total_count = store.expenses.count(user_id).await?;
    if total_count == 0 {
        let text = "📭 No expenses yet.\nSend `50 groceries` to log your first one!";
        match edit_message_id {
            Some(message_id) => {
                bot.edit_message_text(chat_id, message_id, text)
                    .parse_mode(ParseMode::Markdown)
                    .await?;
            }
            None => {
                bot.send_message(chat_id, text)
                    .parse_mode(ParseMode::Markdown)
                    .await?;
            }
        }
        return Ok(());
    }

    let total_pages = (total_count as usize).div_ceil(HISTORY_PAGE_SIZE);
    let page = page.min(total_pages - 1);
    let expenses = store
        .expenses
        .page(user_id, HISTORY_PAGE_SIZE, page * HISTORY_PAGE_SIZE)
        .await?;

    let text = format_history_page(&expenses, total_count);
    let keyboard = keyboards::history_keyboard(&expenses, page, total_pages);

    match edit_message_id {
        Some(message_id) => {
            bot.edit_message_text(chat_id, message_id, text)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboard)
                .await?;
        }
        None => {
            bot.send_message(chat_id, text)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboard)
                .await?;
        }
    }
    Ok(())
}

/// Parse the DD-MM-YYYY date format used in chat
fn parse_user_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%d-%m-%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_date() {
        assert_eq!(
            parse_user_date("01-01-2025"),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert_eq!(
            parse_user_date("  31-12-2024  "),
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
        assert_eq!(parse_user_date("2025-01-01"), None);
        assert_eq!(parse_user_date("32-01-2025"), None);
        assert_eq!(parse_user_date("groceries"), None);
    }
}
