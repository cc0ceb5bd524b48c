//! The user store consumed by every dashboard view: one seed from a remote
//! source, then local appends only.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
};

use crate::{
    error::{Result, UserboardError},
    id::IdGenerator,
    source::UserSource,
    store::{
        Dispatcher, StateGetter, Store, SubscriptionProvider, action::Action,
        reducer::StoreReducer, state::State,
    },
    user::{User, UserDraft},
};

/// Result of a seed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The sequence was replaced with this many users
    Seeded(usize),
    /// The fetch failed; the message was recorded in state
    Failed(String),
    /// Another seed was still outstanding so nothing was fetched
    AlreadyInFlight,
}

/// Owns the session's users. Mutations go through [`UserStore::seed`] and
/// [`UserStore::add_local`] only.
pub struct UserStore {
    store: Store,
    source: Arc<dyn UserSource>,
    ids: IdGenerator,
    seeding: AtomicBool,
    appending: Mutex<()>,
}

impl UserStore {
    /// Creates an empty, idle store that seeds from `source`
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self::with_store(
            Store::new(State::default(), StoreReducer::boxed()),
            source,
        )
    }

    /// Creates a user store on top of an existing state container
    pub fn with_store(store: Store, source: Arc<dyn UserSource>) -> Self {
        Self {
            store,
            source,
            ids: IdGenerator::new(),
            seeding: AtomicBool::new(false),
            appending: Mutex::new(()),
        }
    }

    /// Fetches the initial users and replaces the sequence with them,
    /// blocking until the source answers. Failure is recorded in state and
    /// never propagated.
    pub fn seed(&self) -> SeedOutcome {
        if !self.begin_seed() {
            return SeedOutcome::AlreadyInFlight;
        }

        let result = self.fetch();
        self.finish_seed(result)
    }

    /// Same as [`UserStore::seed`] but the fetch runs on its own thread.
    /// `loading` is already set when this returns. Returns `None` when a
    /// seed is already outstanding.
    pub fn seed_in_background(
        self: &Arc<Self>,
    ) -> Option<JoinHandle<SeedOutcome>> {
        if !self.begin_seed() {
            return None;
        }

        let store = Arc::clone(self);

        Some(thread::spawn(move || {
            let result = store.fetch();
            store.finish_seed(result)
        }))
    }

    /// Appends a record built from `draft` with a freshly synthesized id.
    /// Performs no validation and cannot fail. Once clock-derived ids are
    /// exhausted the smallest id not in use is assigned instead.
    pub fn add_local(&self, draft: UserDraft) -> User {
        let _appending =
            self.appending.lock().unwrap_or_else(PoisonError::into_inner);

        let state = self.store.get_state();
        let id = self
            .ids
            .next_id(state.max_id())
            .unwrap_or_else(|| state.lowest_free_id());
        let user = draft.into_user(id);

        log::debug!("adding local user {} ({})", user.id, user.name);

        self.store.dispatch(Action::AddUser(user.clone()));
        user
    }

    /// Returns the current snapshot
    pub fn current_state(&self) -> Arc<State> {
        self.store.get_state()
    }

    // a panicking source is reported like any other failed fetch
    fn fetch(&self) -> Result<Vec<User>> {
        panic::catch_unwind(AssertUnwindSafe(|| self.source.fetch_users()))
            .unwrap_or_else(|payload| Err(UserboardError::from(payload)))
    }

    fn begin_seed(&self) -> bool {
        if self.seeding.swap(true, Ordering::AcqRel) {
            log::warn!("seed already in flight, ignoring request");
            return false;
        }

        log::info!("seeding users...");
        self.store.dispatch(Action::SetLoading(true));
        true
    }

    fn finish_seed(&self, result: Result<Vec<User>>) -> SeedOutcome {
        let outcome = match result {
            Ok(users) => {
                let count = users.len();
                log::info!("seeded {count} users");
                self.store.dispatch(Action::SetUsers(users));
                SeedOutcome::Seeded(count)
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!("seeding failed: {message}");
                self.store.dispatch(Action::SetError(Some(message.clone())));
                SeedOutcome::Failed(message)
            }
        };

        self.seeding.store(false, Ordering::Release);
        outcome
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("store", &self.store)
            .field("seeding", &self.seeding.load(Ordering::Relaxed))
            .finish()
    }
}

impl StateGetter for UserStore {
    fn get_state(&self) -> Arc<State> {
        self.current_state()
    }
}

impl SubscriptionProvider for UserStore {
    fn subscribe<F: Fn(&State) + Send + Sync + 'static>(&mut self, f: F) {
        self.store.subscribe(f);
    }
}

#[cfg(test)]
#[path = "./user_store_tests.rs"]
mod tests;
