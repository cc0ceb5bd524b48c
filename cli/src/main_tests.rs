use mockall::mock;
use userboard_lib::error::{Result as LibResult, UserboardError};

use super::*;

mock! {
    Source{}
    impl UserSource for Source {
        fn fetch_users(&self) -> LibResult<Vec<User>>;
    }
}

fn default_args(command: Option<Command>) -> Args {
    Args {
        url: DEFAULT_USERS_URL.to_string(),
        timeout_ms: None,
        json: false,
        quiet: false,
        debug: false,
        command,
    }
}

fn seeded_users() -> Vec<User> {
    vec![
        UserDraft {
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
            ..UserDraft::default()
        }
        .into_user(1),
        UserDraft {
            name: "Ervin Howell".to_string(),
            email: "Shanna@melissa.tv".to_string(),
            ..UserDraft::default()
        }
        .into_user(2),
    ]
}

fn seeding_source() -> Arc<MockSource> {
    let mut source = MockSource::new();
    source
        .expect_fetch_users()
        .times(1)
        .returning(|| Ok(seeded_users()));
    Arc::new(source)
}

fn failing_source() -> Arc<MockSource> {
    let mut source = MockSource::new();
    source
        .expect_fetch_users()
        .times(1)
        .returning(|| Err(UserboardError::Status(503)));
    Arc::new(source)
}

fn jane() -> CreateArgs {
    CreateArgs {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        company: "Acme Corp".to_string(),
        lat: "1.5".to_string(),
        ..CreateArgs::default()
    }
}

#[test]
fn parses_default_command() {
    let args = Args::try_parse_from(["userboard"]).unwrap();
    assert_eq!(args.url, DEFAULT_USERS_URL);
    assert!(args.command.is_none());
}

#[test]
fn parses_subcommands() {
    let args =
        Args::try_parse_from(["userboard", "list", "--search", "ervin"]).unwrap();
    assert_eq!(
        args.command,
        Some(Command::List {
            search: "ervin".to_string()
        })
    );

    let args = Args::try_parse_from(["userboard", "--json", "show", "3"]).unwrap();
    assert!(args.json);
    assert_eq!(args.command, Some(Command::Show { id: 3 }));

    let args = Args::try_parse_from([
        "userboard",
        "create",
        "--name",
        "Jane Doe",
        "--email",
        "jane@x.com",
        "--catch-phrase",
        "synergy",
    ])
    .unwrap();
    match args.command {
        Some(Command::Create(create)) => {
            assert_eq!(create.name, "Jane Doe");
            assert_eq!(create.catch_phrase, "synergy");
            assert_eq!(create.phone, "");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn prints_args() {
    print_args(&default_args(None));
}

#[test]
fn initializes_logger() {
    initialize_logger(&default_args(None)).unwrap();
}

#[test]
fn builds_store_from_args() {
    let mut args = default_args(None);
    args.timeout_ms = Some(500);

    let store = build_store(&args).unwrap();
    let state = store.current_state();

    assert!(state.users.is_empty());
    assert!(!state.loading);
}

#[test]
fn converts_create_args_into_draft() {
    let draft: UserDraft = jane().into();

    assert_eq!(draft.name, "Jane Doe");
    assert_eq!(draft.email, "jane@x.com");
    assert_eq!(draft.company.name, "Acme Corp");
    assert_eq!(draft.address.geo.lat, "1.5");
}

#[test]
fn total_users_label_hides_count_while_loading() {
    let state = State {
        loading: true,
        ..State::default()
    };
    assert_eq!(total_users_label(&state), "...");

    let state = State {
        users: seeded_users(),
        ..State::default()
    };
    assert_eq!(total_users_label(&state), "2");
}

#[test]
fn renders_user_table_results() {
    let args = default_args(None);
    let state = State {
        users: seeded_users(),
        ..State::default()
    };

    let output = render_users(&args, &state, "").unwrap().unwrap();
    assert!(output.contains("NAME"));
    assert!(output.contains("Leanne Graham"));
    assert!(output.contains("Ervin Howell"));

    let output = render_users(&args, &state, "ervin").unwrap().unwrap();
    assert!(!output.contains("Leanne Graham"));
    assert!(output.contains("Ervin Howell"));

    print_users(&args, &state, "").unwrap();
}

#[test]
fn renders_empty_messages_as_output() {
    let args = default_args(None);
    let state = State {
        users: seeded_users(),
        ..State::default()
    };

    assert_eq!(
        render_users(&args, &state, "zzz").unwrap(),
        Some("No users found matching \"zzz\"".to_string())
    );
    assert_eq!(
        render_users(&args, &State::default(), "").unwrap(),
        Some("No users available".to_string())
    );
}

#[test]
fn renders_user_json_results() {
    let mut args = default_args(None);
    args.json = true;
    let state = State {
        users: seeded_users(),
        ..State::default()
    };

    let output = render_users(&args, &state, "ervin").unwrap().unwrap();
    let users: Vec<User> = serde_json::from_str(&output).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 2);

    assert_eq!(
        render_users(&args, &state, "zzz").unwrap(),
        Some("[]".to_string())
    );

    let output = render_user(&args, &state.users[0]).unwrap();
    let user: User = serde_json::from_str(&output).unwrap();
    assert_eq!(user, state.users[0]);
}

#[test]
fn renders_user_details() {
    let args = default_args(None);
    let mut user = seeded_users().remove(0);
    user.address.geo.lat = "-37.3159".to_string();
    user.address.geo.lng = "81.1496".to_string();
    user.company.catch_phrase = "Multi-layered client-server neural-net".to_string();

    let output = render_user(&args, &user).unwrap();

    assert!(output.contains("Sincere@april.biz"));
    assert!(output.contains("-37.3159, 81.1496"));
    assert!(output.contains("Multi-layered client-server neural-net"));
}

#[test]
fn loading_and_error_states_produce_no_output() {
    let args = default_args(None);

    let state = State {
        error: Some("failed to fetch users".to_string()),
        ..State::default()
    };
    assert_eq!(render_users(&args, &state, "").unwrap(), None);

    let state = State {
        loading: true,
        ..State::default()
    };
    assert_eq!(render_users(&args, &state, "").unwrap(), None);
    print_users(&args, &state, "").unwrap();
}

#[test]
fn shows_existing_user() {
    let store = create_store(seeding_source());
    seed(&store);

    show_user(&default_args(None), &store, 2).unwrap();
}

#[test]
fn show_unknown_user_is_not_found() {
    let store = create_store(seeding_source());
    seed(&store);

    let err = show_user(&default_args(None), &store, 404).unwrap_err();

    assert_eq!(err.to_string(), "User not found: 404");
}

#[test]
fn creates_valid_user() {
    let store = create_store(seeding_source());
    seed(&store);

    let user = create_user(&store, jane().into());

    let state = store.current_state();
    assert_eq!(state.users.len(), 3);
    assert_eq!(state.users[2], user);
    assert!(user.id != 1 && user.id != 2);
}

#[test]
fn run_rejects_invalid_user_without_touching_store() {
    let mut source = MockSource::new();
    source.expect_fetch_users().never();
    let store = create_store(Arc::new(source));
    let args = default_args(Some(Command::Create(CreateArgs {
        name: "Jane Doe".to_string(),
        ..CreateArgs::default()
    })));

    let err = run(&args, &store).unwrap_err();

    assert_eq!(err.to_string(), "Name and email are required fields.");
    assert!(store.current_state().users.is_empty());
}

#[test]
fn run_lists_users() {
    let store = create_store(seeding_source());
    let args = default_args(Some(Command::List {
        search: "leanne".to_string(),
    }));

    run(&args, &store).unwrap();

    assert_eq!(store.current_state().users.len(), 2);
}

#[test]
fn run_survives_seed_failure() {
    let store = create_store(failing_source());

    run(&default_args(None), &store).unwrap();

    let state = store.current_state();
    assert!(state.users.is_empty());
    assert!(state.error.is_some());
}

#[test]
fn run_create_appends_after_seed() {
    let store = create_store(seeding_source());
    let args = default_args(Some(Command::Create(jane())));

    run(&args, &store).unwrap();

    let state = store.current_state();
    assert_eq!(state.users.len(), 3);
    assert_eq!(state.users[2].name, "Jane Doe");
}

#[test]
fn run_create_validates_before_seeding() {
    let mut source = MockSource::new();
    source.expect_fetch_users().never();
    let store = create_store(Arc::new(source));
    let args = default_args(Some(Command::Create(CreateArgs::default())));

    assert!(run(&args, &store).is_err());
    assert!(store.current_state().users.is_empty());
}

#[test]
fn run_show_unknown_user_fails() {
    let store = create_store(seeding_source());
    let args = default_args(Some(Command::Show { id: 99 }));

    assert!(run(&args, &store).is_err());
}
