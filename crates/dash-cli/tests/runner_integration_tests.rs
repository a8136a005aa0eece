//! Command runner tests against a wiremock auth service

use dash_cli::{CliError, Commands, execute, profile_commands::ProfileCommands};
use dash_cli::{comment_commands::CommentCommands, theme_commands::ThemeCommands};
use dash_client::Client;
use dash_core::Theme;
use dash_session::SessionManager;
use dash_store::{KeyValueStore, MemoryStore, ThemePreference, keys};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

struct Harness {
    store: MemoryStore,
    session: SessionManager<MemoryStore>,
    theme: ThemePreference<MemoryStore>,
}

impl Harness {
    fn new(base_url: &str) -> Self {
        let store = MemoryStore::new();
        let theme = ThemePreference::new(store.clone());
        let session = SessionManager::new(Client::new(base_url), store.clone(), theme.clone());
        Self {
            store,
            session,
            theme,
        }
    }

    async fn run(&mut self, command: Commands) -> Result<serde_json::Value, CliError> {
        execute(command, &mut self.session, &self.theme).await
    }
}

fn login(username: &str, password: &str) -> Commands {
    Commands::Login {
        username: username.to_string(),
        password: password.to_string(),
    }
}

async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "user": {"id": 1, "username": "alice", "company_name": "Wonderland LLC"}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_prints_session() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    let mut harness = Harness::new(&server.uri());

    let output = harness.run(login("alice", "secret")).await.unwrap();

    assert_eq!(output["state"], json!("authenticated"));
    assert_eq!(output["displayName"], json!("alice"));
    assert_eq!(output["user"]["companyName"], json!("Wonderland LLC"));
}

#[tokio::test]
async fn test_login_failure_surfaces_session_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .mount(&server)
        .await;
    let mut harness = Harness::new(&server.uri());

    let err = harness.run(login("alice", "wrong")).await.unwrap_err();

    assert!(matches!(err, CliError::Session { .. }));
    assert_eq!(err.to_string(), "Неправильные учетные данные");
}

#[tokio::test]
async fn test_whoami_when_anonymous() {
    let mut harness = Harness::new("http://127.0.0.1:9");

    let output = harness.run(Commands::Whoami).await.unwrap();

    assert_eq!(output["state"], json!("anonymous"));
    assert_eq!(output["displayName"], json!("Новый пользователь"));
    assert!(output["user"].is_null());
}

#[tokio::test]
async fn test_register_failure_shows_field_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/registration/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"phone_number": ["Enter a valid phone number."]})),
        )
        .mount(&server)
        .await;
    let mut harness = Harness::new(&server.uri());

    let err = harness
        .run(Commands::Register {
            phone_number: "abc".to_string(),
            username: "bob".to_string(),
            password: "pw".to_string(),
            email: None,
            company_name: None,
            first_name: None,
            last_name: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Enter a valid phone number.");
}

#[tokio::test]
async fn test_profile_update_requires_session() {
    let mut harness = Harness::new("http://127.0.0.1:9");

    let err = harness
        .run(Commands::Profile {
            action: ProfileCommands::Update {
                full_name: Some("Alice".to_string()),
                phone_number: None,
                email: None,
                company_name: None,
            },
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Not logged in");
}

#[tokio::test]
async fn test_profile_update_requires_a_field() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    let mut harness = Harness::new(&server.uri());
    harness.run(login("alice", "secret")).await.unwrap();

    let err = harness
        .run(Commands::Profile {
            action: ProfileCommands::Update {
                full_name: None,
                phone_number: None,
                email: None,
                company_name: None,
            },
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Nothing to update");
}

#[tokio::test]
async fn test_comment_add_prints_created_comment() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/create_comment/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 5, "text": "hi"})))
        .mount(&server)
        .await;
    let mut harness = Harness::new(&server.uri());
    harness.run(login("alice", "secret")).await.unwrap();

    let output = harness
        .run(Commands::Comment {
            action: CommentCommands::Add {
                json: r#"{"text":"hi"}"#.to_string(),
            },
        })
        .await
        .unwrap();

    assert_eq!(output, json!({"id": 5, "text": "hi"}));
}

#[tokio::test]
async fn test_comment_add_rejects_non_object() {
    let mut harness = Harness::new("http://127.0.0.1:9");

    let err = harness
        .run(Commands::Comment {
            action: CommentCommands::Add {
                json: "[1, 2]".to_string(),
            },
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::Input(_)));
}

#[tokio::test]
async fn test_theme_set_toggle_show() {
    let mut harness = Harness::new("http://127.0.0.1:9");

    let output = harness
        .run(Commands::Theme {
            action: ThemeCommands::Set { theme: Theme::Dark },
        })
        .await
        .unwrap();
    assert_eq!(output, json!({"theme": "dark"}));

    let output = harness
        .run(Commands::Theme {
            action: ThemeCommands::Toggle,
        })
        .await
        .unwrap();
    assert_eq!(output, json!({"theme": "light"}));

    let output = harness
        .run(Commands::Theme {
            action: ThemeCommands::Show,
        })
        .await
        .unwrap();
    assert_eq!(output, json!({"theme": "light"}));
}

#[tokio::test]
async fn test_logout_resets_theme_and_session() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    let mut harness = Harness::new(&server.uri());
    harness.run(login("alice", "secret")).await.unwrap();
    harness.store.set(keys::THEME, "dark").unwrap();

    let output = harness.run(Commands::Logout).await.unwrap();

    assert_eq!(output["state"], json!("anonymous"));
    assert_eq!(harness.store.get(keys::THEME).unwrap().as_deref(), Some("light"));
    assert_eq!(harness.store.get(keys::TOKEN).unwrap(), None);
}
