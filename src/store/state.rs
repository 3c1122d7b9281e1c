//! # Collection State
//!
//! The `{users, loading, error}` triple owned by the store actor.

use crate::model::{User, UserId};
use std::collections::HashSet;

/// Everything a reader of the store can observe.
///
/// `users` is kept in display order; new records are prepended. `loading` is
/// true only while the initial fetch is outstanding, and `error` carries the
/// message of a failed fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CollectionState {
    /// Returns true when a record with `id` is present.
    pub fn contains(&self, id: UserId) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    /// Looks up a record by id.
    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Next locally generated id: one past the largest id in the collection.
    ///
    /// When the largest id is `UserId::MAX` the smallest unused id is taken
    /// instead.
    pub fn next_id(&self) -> UserId {
        let taken: HashSet<UserId> = self.users.iter().map(|u| u.id).collect();
        next_free_id(&taken)
    }
}

/// Picks an id outside `taken`, preferring `max + 1`.
pub(crate) fn next_free_id(taken: &HashSet<UserId>) -> UserId {
    match taken.iter().max() {
        None => 1,
        Some(max) => max
            .checked_add(1)
            .or_else(|| (1..=UserId::MAX).find(|id| !taken.contains(id)))
            // A collection cannot hold every id; 0 is only reached in theory.
            .unwrap_or(0),
    }
}
