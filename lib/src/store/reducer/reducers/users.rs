//! User state reducers.

use crate::{store::state::State, user::User};

/// Starts or finishes a load. Starting a load clears any stale error.
pub fn set_loading(state: &mut State, value: bool) {
    state.loading = value;
    if value {
        state.error = None;
    }
}

/// Replaces every user after a successful seed.
pub fn set_users(state: &mut State, users: Vec<User>) {
    state.users = users;
    state.loading = false;
    state.error = None;
}

/// Records a failed seed, leaving users untouched.
pub fn set_error(state: &mut State, err: Option<String>) {
    state.error = err;
    state.loading = false;
}

/// Appends a locally created user.
pub fn add_user(state: &mut State, user: User) {
    state.users.push(user);
    state.loading = false;
}
