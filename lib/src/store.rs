//! Redux-like state container holding the session's users.

#[cfg(test)]
use mockall::automock;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::store::{action::Action, state::State};

pub mod action;
pub mod derived;
pub mod reducer;
pub mod state;
pub mod user_store;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    /// Returns a snapshot of the current state
    fn get_state(&self) -> Arc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    /// Applies the action and notifies every subscriber
    fn dispatch(&self, action: Action);
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer: Send + Sync {
    /// Applies the action to the state in place
    fn reduce(&self, state: &mut State, action: Action);
}

/// Callback invoked with the new state after every dispatched action
pub type Subscriber = Box<dyn Fn(&State) + Send + Sync>;

/// Registers listeners for state transitions
pub trait SubscriptionProvider {
    /// Adds a listener called synchronously after every dispatch
    fn subscribe<F: Fn(&State) + Send + Sync + 'static>(&mut self, f: F);
}

/// Centralized state container
pub struct Store {
    state: Mutex<Arc<State>>,
    reducer: Box<dyn Reducer>,
    subscribers: Vec<Subscriber>,
}

impl Store {
    /// Creates a new store with the given initial state and reducer
    pub fn new(initial_state: State, reducer: Box<dyn Reducer>) -> Self {
        Self {
            reducer,
            state: Mutex::new(Arc::new(initial_state)),
            subscribers: Vec::new(),
        }
    }

    // a panicking subscriber must not wedge every later reader
    fn lock(&self) -> MutexGuard<'_, Arc<State>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.get_state())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl SubscriptionProvider for Store {
    fn subscribe<F: Fn(&State) + Send + Sync + 'static>(&mut self, f: F) {
        self.subscribers.push(Box::new(f));
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Arc<State> {
        self.lock().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        let snapshot = {
            let mut guard = self.lock();
            let state = Arc::make_mut(&mut guard);
            self.reducer.reduce(state, action);
            guard.clone()
        };

        for subscriber in self.subscribers.iter() {
            subscriber(&snapshot);
        }
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
