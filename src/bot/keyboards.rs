//! Inline keyboard builders
//!
//! Button layouts for the interactive flows. Every callback payload goes
//! through [`CallbackAction::encode`] so tokens stay consistent with the
//! parser in `bot::callback`.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::display::fmt_money;
use crate::models::{Category, ExpenseWithCategory};

use super::callback::CallbackAction;

/// Category picker: two columns of categories plus a cancel row
pub fn category_keyboard(categories: &[Category]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    let mut row: Vec<InlineKeyboardButton> = Vec::new();

    for category in categories {
        row.push(InlineKeyboardButton::callback(
            category.label(),
            CallbackAction::SelectCategory(category.id).encode(),
        ));
        if row.len() == 2 {
            rows.push(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows.push(vec![InlineKeyboardButton::callback(
        "❌ Cancel",
        CallbackAction::CancelExpense.encode(),
    )]);

    InlineKeyboardMarkup::new(rows)
}

/// Edit menu: one option per mutable field plus cancel
pub fn edit_options_keyboard(expense_id: uuid::Uuid) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "💰 Change Amount",
            CallbackAction::EditAmount(expense_id).encode(),
        )],
        vec![InlineKeyboardButton::callback(
            "📝 Change Description",
            CallbackAction::EditDescription(expense_id).encode(),
        )],
        vec![InlineKeyboardButton::callback(
            "🏷️ Change Category",
            CallbackAction::EditCategory(expense_id).encode(),
        )],
        vec![InlineKeyboardButton::callback(
            "❌ Cancel",
            CallbackAction::CancelEdit.encode(),
        )],
    ])
}

/// Yes/no confirmation before deleting
pub fn delete_confirmation_keyboard(expense_id: uuid::Uuid) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback(
            "✅ Yes, delete",
            CallbackAction::ConfirmDelete(expense_id).encode(),
        ),
        InlineKeyboardButton::callback("❌ No, keep", CallbackAction::CancelDelete.encode()),
    ]])
}

/// History page: an edit/delete row per expense plus a navigation row
pub fn history_keyboard(
    expenses: &[ExpenseWithCategory],
    page: usize,
    total_pages: usize,
) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();

    for row in expenses {
        rows.push(vec![
            InlineKeyboardButton::callback(
                format!("✏️ Edit {}", fmt_money(row.expense.amount)),
                CallbackAction::Edit(row.expense.id).encode(),
            ),
            InlineKeyboardButton::callback(
                "🗑️",
                CallbackAction::Delete(row.expense.id).encode(),
            ),
        ]);
    }

    let mut nav = Vec::new();
    if page > 0 {
        nav.push(InlineKeyboardButton::callback(
            "⬅️ Prev",
            CallbackAction::HistoryPage(page - 1).encode(),
        ));
    }
    nav.push(InlineKeyboardButton::callback(
        format!("{}/{}", page + 1, total_pages),
        CallbackAction::Noop.encode(),
    ));
    if page + 1 < total_pages {
        nav.push(InlineKeyboardButton::callback(
            "Next ➡️",
            CallbackAction::HistoryPage(page + 1).encode(),
        ));
    }
    rows.push(nav);

    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRef, Expense};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn category(name: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.into(),
            emoji: "🛒".into(),
        }
    }

    fn expense_row(amount: f64) -> ExpenseWithCategory {
        ExpenseWithCategory {
            expense: Expense {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                category_id: Uuid::new_v4(),
                amount,
                description: "x".into(),
                expense_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                budget_id: None,
                created_at: None,
            },
            categories: Some(CategoryRef {
                name: "Misc".into(),
                emoji: "📦".into(),
            }),
        }
    }

    #[test]
    fn test_category_keyboard_two_columns() {
        let categories = vec![category("A"), category("B"), category("C")];
        let keyboard = category_keyboard(&categories);

        // Two full columns, then the odd one out, then the cancel row
        assert_eq!(keyboard.inline_keyboard.len(), 3);
        assert_eq!(keyboard.inline_keyboard[0].len(), 2);
        assert_eq!(keyboard.inline_keyboard[1].len(), 1);
        assert_eq!(keyboard.inline_keyboard[2].len(), 1);
        assert_eq!(keyboard.inline_keyboard[2][0].text, "❌ Cancel");
    }

    #[test]
    fn test_category_keyboard_empty_still_has_cancel() {
        let keyboard = category_keyboard(&[]);
        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(keyboard.inline_keyboard[0][0].text, "❌ Cancel");
    }

    #[test]
    fn test_edit_options_layout() {
        let keyboard = edit_options_keyboard(Uuid::new_v4());
        assert_eq!(keyboard.inline_keyboard.len(), 4);
    }

    #[test]
    fn test_history_navigation_first_page() {
        let rows = vec![expense_row(10.0), expense_row(20.0)];
        let keyboard = history_keyboard(&rows, 0, 3);

        // Two expense rows plus navigation
        assert_eq!(keyboard.inline_keyboard.len(), 3);
        let nav = keyboard.inline_keyboard.last().unwrap();
        // No Prev on the first page
        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].text, "1/3");
    }

    #[test]
    fn test_history_navigation_middle_page() {
        let keyboard = history_keyboard(&[expense_row(10.0)], 1, 3);
        let nav = keyboard.inline_keyboard.last().unwrap();
        assert_eq!(nav.len(), 3);
        assert_eq!(nav[1].text, "2/3");
    }

    #[test]
    fn test_history_navigation_last_page() {
        let keyboard = history_keyboard(&[expense_row(10.0)], 2, 3);
        let nav = keyboard.inline_keyboard.last().unwrap();
        assert_eq!(nav.len(), 2);
        assert_eq!(nav[1].text, "3/3");
    }
}
