//! Read-only views computed from a state snapshot: search, detail lookup
//! and the overall dashboard status.

use crate::{store::state::State, user::User};

/// What the list view should show for a given snapshot and search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus<'a> {
    /// Seed fetch outstanding
    Loading,
    /// Seed failed with this message
    Error(&'a str),
    /// Nothing to list; carries the message to show instead
    Empty(String),
    /// Users matching the search term, in store order
    Ready(Vec<&'a User>),
}

/// Returns users whose name contains `term`, ignoring case. An empty term
/// matches every user. Store order is preserved.
pub fn filter_users<'a>(state: &'a State, term: &str) -> Vec<&'a User> {
    let needle = term.to_lowercase();
    state
        .users
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&needle))
        .collect()
}

/// Finds a user by exact id; `None` means not found
pub fn find_user(state: &State, id: u64) -> Option<&User> {
    state.users.iter().find(|u| u.id == id)
}

/// Total number of users held, regardless of any search term
pub fn user_count(state: &State) -> usize {
    state.users.len()
}

/// Decides between the loading indicator, the error card, the empty
/// message and the user grid
pub fn view_status<'a>(state: &'a State, term: &str) -> ViewStatus<'a> {
    if state.loading {
        return ViewStatus::Loading;
    }

    if let Some(err) = state.error.as_deref() {
        return ViewStatus::Error(err);
    }

    let users = filter_users(state, term);

    if !users.is_empty() {
        return ViewStatus::Ready(users);
    }

    if term.is_empty() {
        ViewStatus::Empty("No users available".to_string())
    } else {
        ViewStatus::Empty(format!("No users found matching \"{term}\""))
    }
}

#[cfg(test)]
#[path = "./derived_tests.rs"]
mod tests;
