//! Storage layer for budgetbot
//!
//! Data access against the hosted Supabase store. Each operation is one
//! round trip; there are no transactions spanning entities, no caching,
//! and no retry logic. Store errors propagate to the caller.

pub mod authorized_users;
pub mod budgets;
pub mod categories;
pub mod client;
pub mod expenses;
pub mod users;

pub use authorized_users::AuthorizedUserStore;
pub use budgets::BudgetStore;
pub use categories::CategoryStore;
pub use client::SupabaseClient;
pub use expenses::ExpenseStore;
pub use users::UserStore;

use std::sync::Arc;

/// Main storage coordinator that provides access to all table stores
#[derive(Debug, Clone)]
pub struct Store {
    pub authorized_users: AuthorizedUserStore,
    pub users: UserStore,
    pub categories: CategoryStore,
    pub budgets: BudgetStore,
    pub expenses: ExpenseStore,
}

impl Store {
    /// Create a store sharing one client across all tables
    pub fn new(client: SupabaseClient) -> Self {
        let client = Arc::new(client);
        Self {
            authorized_users: AuthorizedUserStore::new(client.clone()),
            users: UserStore::new(client.clone()),
            categories: CategoryStore::new(client.clone()),
            budgets: BudgetStore::new(client.clone()),
            expenses: ExpenseStore::new(client),
        }
    }
}
