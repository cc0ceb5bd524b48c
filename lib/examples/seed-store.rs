use color_eyre::eyre::{Result, eyre};
use std::sync::Arc;

use userboard_lib::{
    source::HttpUserSource,
    store::{
        SubscriptionProvider,
        derived::filter_users,
        state::State,
        user_store::{SeedOutcome, UserStore},
    },
    user::UserDraft,
};

fn main() -> Result<()> {
    color_eyre::install()?;

    let source = HttpUserSource::builder().build()?;

    let mut store = UserStore::new(Arc::new(source));

    store.subscribe(|state: &State| {
        println!(
            "state changed: users={} loading={} error={:?}",
            state.users.len(),
            state.loading,
            state.error
        );
    });

    let store = Arc::new(store);

    let handle = store
        .seed_in_background()
        .ok_or_else(|| eyre!("a seed is already running"))?;

    println!("loading: {}", store.current_state().loading);

    let outcome = handle
        .join()
        .map_err(|_| eyre!("seed thread panicked"))?;

    match outcome {
        SeedOutcome::Seeded(count) => println!("seeded {count} users"),
        SeedOutcome::Failed(message) => println!("seed failed: {message}"),
        SeedOutcome::AlreadyInFlight => println!("seed already running"),
    }

    let draft = UserDraft::builder()
        .name("Jane Doe")
        .email("jane@example.com")
        .build()?;

    let created = store.add_local(draft);
    println!("created user with id {}", created.id);

    let state = store.current_state();
    for user in filter_users(&state, "e") {
        println!("{:>14}  {}", user.id, user.name);
    }

    Ok(())
}
