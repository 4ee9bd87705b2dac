//! Business logic layer for budgetbot
//!
//! Services sit between the bot handlers and the storage layer: the expense
//! text parser, the pure budget status calculator, and the user service that
//! ties budgets and expense totals together.

pub mod parser;
pub mod status;
pub mod users;

pub use parser::{
    is_expense_message, parse_expense, ExpenseParseError, ParsedExpense, MAX_AMOUNT,
    MAX_DESCRIPTION_LEN,
};
pub use status::{calculate_budget_status, BudgetStatus};
pub use users::UserService;
