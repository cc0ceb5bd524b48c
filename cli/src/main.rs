//! Command-line dashboard for the userboard user store
//!
//! Seeds the store from the demo users API, then acts as the list, search,
//! detail and create views on top of it. Nothing is persisted: every run
//! starts from a fresh seed.
//!
//! # Examples
//!
//! ```bash
//! # help menu
//! userboard --help
//!
//! # list every user
//! userboard
//!
//! # search by name (case-insensitive)
//! userboard list --search ervin
//!
//! # show one user
//! userboard show 3
//!
//! # create a user locally and show the resulting list
//! userboard create --name "Jane Doe" --email jane@example.com
//! ```
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use log::*;
use std::{sync::Arc, time::Duration};
use userboard_lib::{
    source::{DEFAULT_USERS_URL, HttpUserSource, UserSource},
    store::{
        StateGetter, SubscriptionProvider,
        derived::{ViewStatus, find_user, user_count, view_status},
        state::State,
        user_store::{SeedOutcome, UserStore},
    },
    user::{Address, Company, Geo, User, UserDraft},
    validation::{created_notice, validate_draft},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Command-line dashboard for viewing and creating users
struct Args {
    /// Endpoint returning the JSON array of users to seed from
    #[arg(long, default_value = DEFAULT_USERS_URL)]
    url: String,

    /// Abort the seed request after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Output results in json instead of table text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Only print final output nothing else
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Prints debug logs including those from userboard-lib
    #[arg(long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// List users, optionally filtered by name
    List {
        /// Case-insensitive substring to match against user names
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show every detail of a single user
    Show {
        /// Identifier of the user
        id: u64,
    },
    /// Create a user locally and list the result
    Create(CreateArgs),
}

#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
struct CreateArgs {
    /// Full name (required)
    #[arg(long, default_value = "")]
    name: String,
    /// Email address (required)
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    username: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    website: String,
    #[arg(long, default_value = "")]
    street: String,
    #[arg(long, default_value = "")]
    suite: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    zipcode: String,
    #[arg(long, default_value = "")]
    lat: String,
    #[arg(long, default_value = "")]
    lng: String,
    /// Company name
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long, default_value = "")]
    catch_phrase: String,
    #[arg(long, default_value = "")]
    bs: String,
}

impl From<CreateArgs> for UserDraft {
    fn from(args: CreateArgs) -> Self {
        UserDraft {
            name: args.name,
            username: args.username,
            email: args.email,
            phone: args.phone,
            website: args.website,
            address: Address {
                street: args.street,
                suite: args.suite,
                city: args.city,
                zipcode: args.zipcode,
                geo: Geo {
                    lat: args.lat,
                    lng: args.lng,
                },
            },
            company: Company {
                name: args.company,
                catch_phrase: args.catch_phrase,
                bs: args.bs,
            },
        }
    }
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    let filter = if args.quiet {
        simplelog::LevelFilter::Error
    } else if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
fn print_args(args: &Args) {
    info!("configuration:");
    info!("url:        {}", args.url);
    info!("timeout_ms: {:?}", args.timeout_ms);
    info!("json:       {}", args.json);
    info!("quiet:      {}", args.quiet);
    info!("command:    {:?}", args.command);
}

#[doc(hidden)]
fn build_store(args: &Args) -> Result<UserStore> {
    let source = HttpUserSource::builder()
        .url(args.url.clone())
        .timeout(args.timeout_ms.map(Duration::from_millis))
        .build()?;

    Ok(create_store(Arc::new(source)))
}

#[doc(hidden)]
fn create_store(source: Arc<dyn UserSource>) -> UserStore {
    let mut store = UserStore::new(source);

    store.subscribe(|state: &State| {
        debug!(
            "state updated: users={} loading={} error={:?}",
            state.users.len(),
            state.loading,
            state.error
        );
    });

    store
}

#[doc(hidden)]
fn total_users_label(state: &State) -> String {
    if state.loading {
        "...".to_string()
    } else {
        user_count(state).to_string()
    }
}

/// Builds the list view's final output. Loading and error states are
/// reported through the logger and produce no output.
#[doc(hidden)]
fn render_users(args: &Args, state: &State, term: &str) -> Result<Option<String>> {
    let output = match view_status(state, term) {
        ViewStatus::Loading => {
            info!("Loading users...");
            None
        }
        ViewStatus::Error(message) => {
            error!("{message}");
            None
        }
        ViewStatus::Empty(message) => {
            if args.json {
                Some("[]".to_string())
            } else {
                Some(message)
            }
        }
        ViewStatus::Ready(users) => {
            if args.json {
                Some(serde_json::to_string(&users)?)
            } else {
                let mut table = prettytable::Table::new();

                table.add_row(prettytable::row![
                    "ID", "NAME", "USERNAME", "EMAIL", "CITY", "COMPANY",
                ]);

                for u in users {
                    table.add_row(prettytable::row![
                        u.id,
                        u.name,
                        u.username,
                        u.email,
                        u.address.city,
                        u.company.name
                    ]);
                }

                Some(table.to_string())
            }
        }
    };

    Ok(output)
}

#[doc(hidden)]
fn print_users(args: &Args, state: &State, term: &str) -> Result<()> {
    info!("total users: {}", total_users_label(state));

    if let Some(output) = render_users(args, state, term)? {
        println!("{}", output);
    }

    Ok(())
}

#[doc(hidden)]
fn render_user(args: &Args, user: &User) -> Result<String> {
    if args.json {
        return Ok(serde_json::to_string(user)?);
    }

    let mut table = prettytable::Table::new();
    let geo = &user.address.geo;

    table.add_row(prettytable::row!["ID", user.id]);
    table.add_row(prettytable::row!["NAME", user.name]);
    table.add_row(prettytable::row!["USERNAME", user.username]);
    table.add_row(prettytable::row!["EMAIL", user.email]);
    table.add_row(prettytable::row!["PHONE", user.phone]);
    table.add_row(prettytable::row!["WEBSITE", user.website]);
    table.add_row(prettytable::row!["ADDRESS", user.address]);
    table.add_row(prettytable::row!["GEO", format!("{}, {}", geo.lat, geo.lng)]);
    table.add_row(prettytable::row!["COMPANY", user.company.name]);
    table.add_row(prettytable::row!["CATCH PHRASE", user.company.catch_phrase]);
    table.add_row(prettytable::row!["BS", user.company.bs]);

    Ok(table.to_string())
}

#[doc(hidden)]
fn print_user(args: &Args, user: &User) -> Result<()> {
    println!("{}", render_user(args, user)?);
    Ok(())
}

#[doc(hidden)]
fn show_user(args: &Args, store: &UserStore, id: u64) -> Result<()> {
    let state = store.get_state();
    let user =
        find_user(&state, id).ok_or_else(|| eyre!("User not found: {id}"))?;
    print_user(args, user)
}

/// Appends an already validated draft
#[doc(hidden)]
fn create_user(store: &UserStore, draft: UserDraft) -> User {
    let notice = created_notice(&draft);
    let user = store.add_local(draft);
    info!("{notice}");
    user
}

#[doc(hidden)]
fn seed(store: &UserStore) {
    match store.seed() {
        SeedOutcome::Seeded(count) => debug!("seed complete: {count} users"),
        SeedOutcome::Failed(message) => warn!("continuing without users: {message}"),
        SeedOutcome::AlreadyInFlight => debug!("seed already in flight"),
    }
}

#[doc(hidden)]
fn run(args: &Args, store: &UserStore) -> Result<()> {
    let command = args.command.clone().unwrap_or(Command::List {
        search: String::new(),
    });

    match command {
        Command::List { search } => {
            seed(store);
            print_users(args, &store.get_state(), &search)
        }
        Command::Show { id } => {
            seed(store);
            show_user(args, store, id)
        }
        Command::Create(create) => {
            let draft: UserDraft = create.into();

            // validate before any network round trip
            validate_draft(&draft)?;

            seed(store);

            let user = create_user(store, draft);
            if args.json {
                print_user(args, &user)
            } else {
                print_users(args, &store.get_state(), "")
            }
        }
    }
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    print_args(&args);

    let store = build_store(&args)?;

    run(&args, &store)
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
