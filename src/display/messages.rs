//! Chat message formatting
//!
//! All user-visible message bodies in one place, mirroring the shapes the
//! bot sends: budget status, expense confirmations, history pages and admin
//! listings. Everything renders for Telegram's legacy Markdown parse mode.

use crate::models::{AuthorizedUser, Budget, ExpenseWithCategory};
use crate::services::BudgetStatus;

use super::money::fmt_money;

/// Welcome text for /start, with the admin section when applicable
pub fn welcome_message(name: &str, is_admin: bool) -> String {
    let mut message = format!(
        "👋 *Welcome to Budget Bot, {name}!*\n\n\
         I'll help you track your expenses and manage your budget.\n\n\
         *Quick Start:*\n\
         1️⃣ Set a budget with /setbudget\n\
         2️⃣ Log expenses by sending: `50 groceries`\n\
         3️⃣ I'll ask you to pick a category\n\
         4️⃣ Check your status with /budget\n\n\
         *Commands:*\n\
         • /setbudget - Set a new budget period\n\
         • /budget - View current budget status\n\
         • /history - View expense history\n\
         • /cancel - Cancel current operation\n"
    );

    if is_admin {
        message.push_str(
            "\n*Admin Commands:* 👑\n\
             • /adduser <id> - Authorize a new user\n\
             • /removeuser <id> - Remove user access\n\
             • /listusers - View all authorized users\n\
             • /myid - Show your Telegram ID\n",
        );
    }

    message.push_str("\nReady to start tracking? 🚀");
    message
}

/// Render the full budget status report
pub fn format_budget_status(status: &BudgetStatus) -> String {
    let mut lines = vec![
        "📊 *Budget Status*".to_string(),
        String::new(),
        format!("💰 Total Budget: {}", fmt_money(status.total_budget)),
        format!(
            "💸 Total Spent: {} ({:.1}%)",
            fmt_money(status.total_spent),
            status.spent_percentage()
        ),
        format!("💵 Remaining: {}", fmt_money(status.remaining_budget)),
        String::new(),
        format!(
            "📅 Period: {} - {}",
            status.start_date.format("%b %d"),
            status.end_date.format("%b %d, %Y")
        ),
        format!(
            "⏳ Days: {}/{} ({} remaining)",
            status.days_passed, status.days_total, status.days_remaining
        ),
        String::new(),
    ];

    if status.is_over_budget() {
        lines.push(format!(
            "🚨 *OVER BUDGET by {}!*",
            fmt_money(status.remaining_budget.abs())
        ));
    } else {
        lines.push(format!(
            "✅ *Daily Budget: {}*",
            fmt_money(status.daily_budget)
        ));
    }

    if status.days_passed > 0 {
        lines.push(format!(
            "📈 Daily Average: {}",
            fmt_money(status.daily_average_spent())
        ));
    }

    lines.join("\n")
}

/// Confirmation after an expense is filed under a category
///
/// Includes pacing numbers when a budget is active, otherwise nudges the
/// user toward /setbudget.
pub fn format_expense_confirmation(
    amount: f64,
    description: &str,
    category_label: &str,
    status: Option<&BudgetStatus>,
) -> String {
    let mut lines = vec![
        "✅ *Expense Added!*".to_string(),
        String::new(),
        format!("💰 {} - {}", fmt_money(amount), description),
        format!("🏷️ Category: {category_label}"),
        String::new(),
    ];

    match status {
        Some(status) if status.daily_budget < 0.0 => {
            lines.push(format!(
                "🚨 Over budget! Remaining: {}",
                fmt_money(status.remaining_budget)
            ));
        }
        Some(status) => {
            lines.push(format!(
                "📊 Daily Budget: {}",
                fmt_money(status.daily_budget)
            ));
            lines.push(format!(
                "💵 Total Remaining: {}",
                fmt_money(status.remaining_budget)
            ));
        }
        None => {
            lines.push("💡 Set a budget with /setbudget to track daily spending!".to_string());
        }
    }

    lines.join("\n")
}

/// Summary sent when a budget period is created
pub fn format_budget_created(budget: &Budget) -> String {
    let days = budget.days_total();
    let daily = budget.total_amount / days as f64;

    format!(
        "✅ *Budget Created!*\n\n\
         💰 Total: {}\n\
         📅 Period: {} - {}\n\
         ⏳ Duration: {} days\n\
         📊 Daily Budget: {}\n\n\
         Start logging expenses by sending messages like:\n\
         `50 groceries`",
        fmt_money(budget.total_amount),
        budget.start_date.format("%b %d"),
        budget.end_date.format("%b %d, %Y"),
        days,
        fmt_money(daily),
    )
}

/// One page of expense history
pub fn format_history_page(expenses: &[ExpenseWithCategory], total_count: u64) -> String {
    let mut lines = vec!["📋 *Expense History*\n".to_string()];

    for row in expenses {
        lines.push(format!(
            "\n{} *{}* - {}\n    {} • {}",
            row.categories
                .as_ref()
                .map(|c| c.emoji.clone())
                .unwrap_or_else(|| "📦".to_string()),
            fmt_money(row.expense.amount),
            row.expense.description,
            row.expense.expense_date.format("%b %d"),
            row.categories
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
        ));
    }

    lines.push(format!("\n\n📊 Total: {total_count} expenses"));
    lines.join("")
}

/// Expense details shown at the top of the edit menu
pub fn format_expense_details(row: &ExpenseWithCategory) -> String {
    format!(
        "✏️ *Edit Expense*\n\n\
         💰 Amount: {}\n\
         📝 Description: {}\n\
         🏷️ Category: {}\n\n\
         What would you like to change?",
        fmt_money(row.expense.amount),
        row.expense.description,
        row.category_label(),
    )
}

/// Confirmation prompt before deleting an expense
pub fn format_delete_prompt(row: &ExpenseWithCategory) -> String {
    format!(
        "🗑️ *Delete Expense?*\n\n\
         💰 {} - {}\n\n\
         Are you sure you want to delete this expense?",
        fmt_money(row.expense.amount),
        row.expense.description,
    )
}

/// Admin listing of authorized users
pub fn format_user_list(users: &[AuthorizedUser]) -> String {
    let mut lines = vec!["👥 *Authorized Users*\n".to_string()];
    for user in users {
        lines.push(format!("• {}", user.display_label()));
    }
    lines.push(format!("\n📊 Total: {} users", users.len()));
    lines.join("\n")
}
