//! Pure reducer functions that compute new state from actions.

use crate::store::Reducer;

use super::{action::Action, state::State};

mod reducers;

/// Applies actions to state.
#[derive(Debug, Default)]
pub struct StoreReducer;

impl StoreReducer {
    /// Returns a boxed reducer ready to hand to [`super::Store::new`]
    pub fn boxed() -> Box<Self> {
        Box::default()
    }
}

impl Reducer for StoreReducer {
    fn reduce(&self, state: &mut State, action: Action) {
        match action {
            Action::SetLoading(value) => {
                log::debug!("processing action: SetLoading({value})");
                reducers::users::set_loading(state, value);
            }
            Action::SetUsers(users) => {
                log::debug!("processing action: SetUsers({} users)", users.len());
                reducers::users::set_users(state, users);
            }
            Action::SetError(err) => {
                log::debug!("processing action: SetError({:?})", err);
                reducers::users::set_error(state, err);
            }
            Action::AddUser(user) => {
                log::debug!("processing action: AddUser({})", user.id);
                reducers::users::add_user(state, user);
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
