use crate::{Cli, Commands};

use clap::Parser;

#[test]
fn given_visit_with_global_flags_when_parsed_then_fields_populated() {
    let cli = Cli::try_parse_from([
        "club",
        "visit",
        "/admin",
        "--server",
        "http://localhost:4000",
        "--pretty",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Commands::Visit {
            path: "/admin".to_string()
        }
    );
    assert_eq!(cli.server.as_deref(), Some("http://localhost:4000"));
    assert!(cli.pretty);
    assert!(cli.storage_dir.is_none());
}

#[test]
fn given_login_with_from_when_parsed_then_redirect_target_kept() {
    let cli = Cli::try_parse_from([
        "club",
        "login",
        "--email",
        "ana@club.com",
        "--password",
        "secreto",
        "--from",
        "/biblioteca",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Commands::Login {
            email: "ana@club.com".to_string(),
            password: "secreto".to_string(),
            from: Some("/biblioteca".to_string()),
        }
    );
}

#[test]
fn given_login_without_password_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["club", "login", "--email", "ana@club.com"]);

    assert!(result.is_err());
}
