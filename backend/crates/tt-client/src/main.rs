//! tt - Training tracker console
//!
//! Every command prints the server's JSON on stdout; diagnostics go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Log in (password from TT_PASSWORD or --password)
//! tt auth login --username admin@Stack
//!
//! # Create a batch
//! tt batch create --name "Rust 101" --program 1 --max-capacity 30 --pretty
//!
//! # Role dashboard
//! tt dashboard --pretty
//! ```

mod auth_commands;
mod batch_commands;
mod batch_trainee_commands;
mod class_commands;
mod cli;
mod cli_error;
mod commands;
mod designation_commands;
mod logger;
mod program_commands;
mod progress_commands;
mod user_commands;

use crate::{
    cli::Cli,
    cli_error::{CliError, Result as CliResult},
    commands::{Commands, to_json},
};

use tt_client::{
    ApiClient, ClientError, CredentialStore, Dashboard, FileStore, SessionState, SessionStore,
    client::TOKEN_PATH,
};
use tt_config::Config;
use tt_core::{FieldErrors, Identity};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::debug;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => print_json(&value, pretty),
        Err(e) => {
            debug!("{e}");
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let Cli { command, server, .. } = cli;

    let mut config = Config::load()?;
    if let Some(server) = server {
        config.api.base_url = server;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let store = FileStore::open(config.session_path()?)?;
    let credentials = CredentialStore::new(Arc::new(store));
    let api = ApiClient::from_config(&config.api, credentials)?;
    let session = Arc::new(SessionStore::new(api));
    let _listener = session.spawn_auth_listener();

    let value = match command {
        Commands::Auth { action } => return action.run(&session).await,
        Commands::Dashboard => {
            let identity = require_session(&session).await?;
            to_json(&Dashboard::load(session.api(), &identity).await?)?
        }
        command => {
            require_session(&session).await?;
            let api = session.api();
            match command {
                Commands::Program { action } => action.run(api).await?,
                Commands::Batch { action } => action.run(api).await?,
                Commands::BatchTrainee { action } => action.run(api).await?,
                Commands::Progress { action } => action.run(api).await?,
                Commands::Designation { action } => action.run(api).await?,
                Commands::Class { action } => action.run(api).await?,
                Commands::User { action } => action.run(api).await?,
                Commands::Auth { .. } | Commands::Dashboard => Value::Null,
            }
        }
    };

    Ok(value)
}

/// Protected commands wait for the persisted session to be checked first.
async fn require_session(session: &SessionStore) -> CliResult<Identity> {
    match session.restore_session().await {
        SessionState::Authenticated(identity) => Ok(identity),
        _ => Err(CliError::not_logged_in()),
    }
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

fn report(err: &CliError) {
    match err {
        CliError::NotLoggedIn { .. } => {
            eprintln!("Error: Not logged in.");
            eprintln!();
            eprintln!("Log in first:");
            eprintln!("  tt auth login --username <name>");
        }
        CliError::Client { source } if source.is_unauthorized() => {
            eprintln!("Error: {}", source.general_message());
            let rejected_login =
                matches!(source, ClientError::Unauthorized { path, .. } if path == TOKEN_PATH);
            if !rejected_login {
                eprintln!();
                eprintln!("Your session has expired. Log in again:");
                eprintln!("  tt auth login --username <name>");
            }
        }
        CliError::Client { source } => {
            match source.field_errors().filter(FieldErrors::is_field_keyed) {
                Some(errors) => {
                    eprintln!("Error: The request was rejected:");
                    for (field, messages) in errors.fields() {
                        for message in messages {
                            eprintln!("  {field}: {message}");
                        }
                    }
                }
                None => eprintln!("Error: {}", source.general_message()),
            }
        }
        CliError::Storage { source } => {
            eprintln!("Error: {source}");
            eprintln!("{}", source.recovery_hint());
        }
        other => eprintln!("Error: {other}"),
    }
}
