//! Presentation formatting for chat replies
//!
//! Renders status and confirmation objects into the Markdown-formatted
//! messages the bot sends. Keyboard layouts live in `bot::keyboards`; this
//! module is text only.

pub mod messages;
pub mod money;

pub use messages::{
    format_budget_created, format_budget_status, format_delete_prompt, format_expense_confirmation,
    format_expense_details, format_history_page, format_user_list, welcome_message,
};
pub use money::fmt_money;
