//! Per-user conversation state
//!
//! Each multi-step flow (budget setup, category pick, edit, delete) walks
//! through explicit states carrying their collected data in the variant
//! itself. State lives in a bounded in-memory map keyed by Telegram user id
//! and is cleared on every terminal transition; nothing survives a restart.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

/// A parsed expense waiting for its category
#[derive(Debug, Clone, PartialEq)]
pub struct PendingExpense {
    pub amount: f64,
    pub description: String,
}

/// Where a user currently is in a multi-step flow
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Budget setup: waiting for the total amount
    AwaitingBudgetAmount,

    /// Budget setup: amount received, waiting for the start date
    AwaitingStartDate { amount: f64 },

    /// Budget setup: waiting for the end date
    AwaitingEndDate { amount: f64, start: NaiveDate },

    /// New expense parsed, waiting for a category button
    AwaitingCategory { pending: PendingExpense },

    /// Edit menu shown, waiting for a field choice
    AwaitingEditChoice { expense_id: Uuid },

    /// Edit: waiting for the replacement amount
    AwaitingNewAmount { expense_id: Uuid },

    /// Edit: waiting for the replacement description
    AwaitingNewDescription { expense_id: Uuid },

    /// Edit: waiting for a category button for an existing expense
    AwaitingEditCategory { expense_id: Uuid },

    /// Delete prompt shown, waiting for confirmation
    AwaitingDeleteConfirm { expense_id: Uuid },
}

#[derive(Debug, Clone)]
struct Session {
    state: SessionState,
    touched: u64,
}

/// Bounded in-memory map of active conversations
///
/// At capacity the stalest session is evicted to make room, so an abandoned
/// flow can cost another user at most one stale entry, never unbounded
/// memory.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<i64, Session>,
    capacity: usize,
    clock: AtomicU64,
}

impl SessionStore {
    /// Create a store holding at most `capacity` concurrent sessions
    pub fn new(capacity: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            capacity: capacity.max(1),
            clock: AtomicU64::new(0),
        }
    }

    /// Current state for a user, if they are mid-flow
    pub fn get(&self, user_id: i64) -> Option<SessionState> {
        self.sessions.get(&user_id).map(|entry| entry.state.clone())
    }

    /// Enter a state for a user, evicting the stalest session at capacity
    pub fn set(&self, user_id: i64, state: SessionState) {
        if !self.sessions.contains_key(&user_id) && self.sessions.len() >= self.capacity {
            self.evict_stalest();
        }
        let touched = self.clock.fetch_add(1, Ordering::Relaxed);
        self.sessions.insert(user_id, Session { state, touched });
    }

    /// Clear a user's session; no-op (and safe to repeat) when none exists
    pub fn clear(&self, user_id: i64) {
        self.sessions.remove(&user_id);
    }

    /// Number of active sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are active
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn evict_stalest(&self) {
        let stalest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.touched)
            .map(|entry| *entry.key());
        if let Some(user_id) = stalest {
            self.sessions.remove(&user_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = SessionStore::new(16);
        store.set(1, SessionState::AwaitingBudgetAmount);

        assert_eq!(store.get(1), Some(SessionState::AwaitingBudgetAmount));
        assert_eq!(store.get(2), None);
    }

    #[test]
    fn test_state_carries_flow_data() {
        let store = SessionStore::new(16);
        let pending = PendingExpense {
            amount: 50.0,
            description: "groceries".into(),
        };
        store.set(
            1,
            SessionState::AwaitingCategory {
                pending: pending.clone(),
            },
        );

        match store.get(1) {
            Some(SessionState::AwaitingCategory { pending: got }) => assert_eq!(got, pending),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::new(16);
        store.set(1, SessionState::AwaitingBudgetAmount);

        store.clear(1);
        assert_eq!(store.get(1), None);

        // Repeated cancels always land in the same end state
        store.clear(1);
        store.clear(1);
        assert_eq!(store.get(1), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_overwrite_replaces_state() {
        let store = SessionStore::new(16);
        store.set(1, SessionState::AwaitingBudgetAmount);
        store.set(1, SessionState::AwaitingStartDate { amount: 3000.0 });

        assert_eq!(
            store.get(1),
            Some(SessionState::AwaitingStartDate { amount: 3000.0 })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_eviction_at_capacity() {
        let store = SessionStore::new(2);
        store.set(1, SessionState::AwaitingBudgetAmount);
        store.set(2, SessionState::AwaitingBudgetAmount);

        // User 1 is now the stalest; adding a third evicts them
        store.set(3, SessionState::AwaitingBudgetAmount);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), None);
        assert!(store.get(2).is_some());
        assert!(store.get(3).is_some());
    }

    #[test]
    fn test_touch_refreshes_staleness() {
        let store = SessionStore::new(2);
        store.set(1, SessionState::AwaitingBudgetAmount);
        store.set(2, SessionState::AwaitingBudgetAmount);

        // Re-entering a state refreshes user 1, so user 2 gets evicted
        store.set(1, SessionState::AwaitingStartDate { amount: 100.0 });
        store.set(3, SessionState::AwaitingBudgetAmount);

        assert!(store.get(1).is_some());
        assert_eq!(store.get(2), None);
    }

    #[test]
    fn test_existing_key_never_triggers_eviction() {
        let store = SessionStore::new(1);
        store.set(1, SessionState::AwaitingBudgetAmount);
        store.set(1, SessionState::AwaitingStartDate { amount: 5.0 });

        assert_eq!(store.len(), 1);
        assert!(store.get(1).is_some());
    }
}
