//! dash - billing dashboard account CLI
//!
//! Logs in against the auth service, keeps the session in a local store
//! between runs and drives the account menu actions.
//!
//! # Examples
//!
//! ```bash
//! # Log in and remember the session
//! dash login --username alice --password secret
//!
//! # Show who is logged in
//! dash whoami --pretty
//!
//! # Switch the theme
//! dash theme toggle
//! ```

use dash_cli::{Cli, CliErrorResult, execute, logger};
use dash_client::Client;
use dash_config::Config;
use dash_session::SessionManager;
use dash_store::{FileStore, ThemePreference};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{debug, error};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(value) => print_json(&value, cli.pretty),
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: dash_cli::Commands) -> CliErrorResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(&config.logging, config.log_file_path()?)?;

    debug!("Starting dash v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = Arc::new(FileStore::open(config.storage_path()?)?);
    let theme = ThemePreference::new(Arc::clone(&store));

    let mut session = SessionManager::new(
        Client::new(&config.api.base_url),
        Arc::clone(&store),
        theme.clone(),
    )
    .with_comment_retention(config.session.comment_retention);

    execute(command, &mut session, &theme).await
}

fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
