//! Action types for state transitions.

use crate::user::User;

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Marks a seed fetch as started or finished
    SetLoading(bool),
    /// Replaces the whole sequence with the seeded users
    SetUsers(Vec<User>),
    /// Records (or clears) the last seed failure
    SetError(Option<String>),
    /// Appends a locally created user
    AddUser(User),
}
