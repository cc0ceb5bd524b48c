//! Application state definitions.

use std::collections::HashSet;

use crate::user::User;

/// Snapshot of the store: the users in insertion order plus the status of
/// the seed fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Users in insertion order, which is also display and search order
    pub users: Vec<User>,
    /// True only while a seed fetch is outstanding
    pub loading: bool,
    /// Message describing the last seed failure
    pub error: Option<String>,
}

impl State {
    /// Highest identifier currently held, 0 for an empty store
    pub fn max_id(&self) -> u64 {
        self.users.iter().map(|u| u.id).max().unwrap_or_default()
    }

    /// Smallest positive identifier not held by any user
    pub fn lowest_free_id(&self) -> u64 {
        let taken: HashSet<u64> = self.users.iter().map(|u| u.id).collect();
        // fewer users than u64 values, so a free id always exists
        (1..=u64::MAX)
            .find(|id| !taken.contains(id))
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "./state_tests.rs"]
mod tests;
