//! Data models for budgetbot
//!
//! These structs mirror the record shapes persisted in the external store:
//! authorized users, users, categories, budgets and expenses. The store
//! assigns ids and creation timestamps server-side, so each entity comes in
//! two flavors where needed: the full persisted record and a `New*` insert
//! payload without the server-assigned fields.

pub mod authorized_user;
pub mod budget;
pub mod category;
pub mod expense;
pub mod user;

pub use authorized_user::{AuthorizedUser, NewAuthorizedUser};
pub use budget::{Budget, NewBudget};
pub use category::{Category, CategoryRef};
pub use expense::{Expense, ExpensePatch, ExpenseWithCategory, NewExpense};
pub use user::{NewUser, User};
