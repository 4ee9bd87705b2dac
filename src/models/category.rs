//! Expense category model
//!
//! Categories are static reference data seeded in the store; the bot reads
//! them for keyboards and labels but never mutates them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned id
    pub id: Uuid,

    /// Category name, e.g. "Groceries"
    pub name: String,

    /// Emoji shown next to the name
    pub emoji: String,
}

impl Category {
    /// Button/label text: emoji followed by name
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

/// The `{name, emoji}` fragment embedded by select-with-join queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub emoji: String,
}

impl CategoryRef {
    /// Label text, matching [`Category::label`]
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}
