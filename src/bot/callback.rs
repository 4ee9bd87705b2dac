//! Typed callback actions
//!
//! The chat transport only carries opaque strings as button payloads, so
//! every interactive choice is encoded as a short token: a discriminating
//! prefix plus an embedded id or page number. This module is the single
//! place tokens are built and parsed; handlers only ever see the typed
//! [`CallbackAction`].

use uuid::Uuid;

/// A decoded button click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// A category was chosen for a pending or edited expense
    SelectCategory(Uuid),
    /// Abort the expense/category flow
    CancelExpense,

    /// Open the edit menu for an expense
    Edit(Uuid),
    /// Edit menu: change the amount
    EditAmount(Uuid),
    /// Edit menu: change the description
    EditDescription(Uuid),
    /// Edit menu: change the category
    EditCategory(Uuid),
    /// Abort the edit flow
    CancelEdit,

    /// Ask for delete confirmation
    Delete(Uuid),
    /// Confirmed delete
    ConfirmDelete(Uuid),
    /// Abort the delete flow
    CancelDelete,

    /// Jump to a history page (0-indexed)
    HistoryPage(usize),
    /// Inert button (the page indicator)
    Noop,
}

impl CallbackAction {
    /// Encode the action as a callback token
    pub fn encode(&self) -> String {
        match self {
            Self::SelectCategory(id) => format!("category_{id}"),
            Self::CancelExpense => "cancel_expense".to_string(),
            Self::Edit(id) => format!("edit_{id}"),
            Self::EditAmount(id) => format!("edit_amount_{id}"),
            Self::EditDescription(id) => format!("edit_desc_{id}"),
            Self::EditCategory(id) => format!("edit_cat_{id}"),
            Self::CancelEdit => "cancel_edit".to_string(),
            Self::Delete(id) => format!("delete_{id}"),
            Self::ConfirmDelete(id) => format!("confirm_delete_{id}"),
            Self::CancelDelete => "cancel_delete".to_string(),
            Self::HistoryPage(page) => format!("history_page_{page}"),
            Self::Noop => "noop".to_string(),
        }
    }

    /// Parse a callback token; `None` for anything unrecognized
    ///
    /// Longer prefixes are tried before their prefixes ("edit_amount_"
    /// before "edit_"), so ordering here is load-bearing.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "cancel_expense" => return Some(Self::CancelExpense),
            "cancel_edit" => return Some(Self::CancelEdit),
            "cancel_delete" => return Some(Self::CancelDelete),
            "noop" => return Some(Self::Noop),
            _ => {}
        }

        if let Some(rest) = data.strip_prefix("category_") {
            return rest.parse().ok().map(Self::SelectCategory);
        }
        if let Some(rest) = data.strip_prefix("edit_amount_") {
            return rest.parse().ok().map(Self::EditAmount);
        }
        if let Some(rest) = data.strip_prefix("edit_desc_") {
            return rest.parse().ok().map(Self::EditDescription);
        }
        if let Some(rest) = data.strip_prefix("edit_cat_") {
            return rest.parse().ok().map(Self::EditCategory);
        }
        if let Some(rest) = data.strip_prefix("edit_") {
            return rest.parse().ok().map(Self::Edit);
        }
        if let Some(rest) = data.strip_prefix("confirm_delete_") {
            return rest.parse().ok().map(Self::ConfirmDelete);
        }
        if let Some(rest) = data.strip_prefix("delete_") {
            return rest.parse().ok().map(Self::Delete);
        }
        if let Some(rest) = data.strip_prefix("history_page_") {
            return rest.parse().ok().map(Self::HistoryPage);
        }

        None
    }
}
