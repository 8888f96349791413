//! club - Reading club session client
//!
//! Keeps the member's session on disk between runs and gates the site's
//! views the same way the web client does.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and continue to the library
//! club login --email ana@club.com --password secreto --from /biblioteca
//!
//! # Check whether the admin dashboard may be opened
//! club visit /admin --pretty
//!
//! # Sign out
//! club logout
//! ```

use club_cli::{App, Cli, CliErrorResult, Commands, logger};
use club_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let Cli {
        command,
        server,
        storage_dir,
        pretty,
    } = Cli::parse();

    match run(command, server, storage_dir).await {
        Ok(value) => print_json(&value, pretty),
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.recovery_hint() {
                eprintln!("Hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Commands,
    server: Option<String>,
    storage_dir: Option<String>,
) -> CliErrorResult<Value> {
    let mut config = Config::load()?;
    if let Some(server) = server {
        config.api.base_url = server;
    }
    if let Some(dir) = storage_dir {
        config.storage.dir = dir;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let mut app = App::open(config)?;
    app.execute(command).await
}

fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {e}");
            ExitCode::FAILURE
        }
    }
}
