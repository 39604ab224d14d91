//! Tests for CLI parsing

use clap::Parser;
use hooktrack::cli::{Cli, Command};

#[test]
fn serve_defaults() {
    let cli = Cli::try_parse_from(["hooktrack", "serve"]).unwrap();
    let Command::Serve {
        port,
        bind,
        retention_secs,
    } = cli.command;
    assert_eq!(port, 8080);
    assert_eq!(bind, "0.0.0.0");
    assert_eq!(retention_secs, 3600);
    assert!(!cli.verbose);
}

#[test]
fn serve_flags_override_defaults() {
    let cli = Cli::try_parse_from([
        "hooktrack",
        "serve",
        "--port",
        "9000",
        "--bind",
        "127.0.0.1",
        "--retention-secs",
        "60",
    ])
    .unwrap();
    let Command::Serve {
        port,
        bind,
        retention_secs,
    } = cli.command;
    assert_eq!(port, 9000);
    assert_eq!(bind, "127.0.0.1");
    assert_eq!(retention_secs, 60);
}

#[test]
fn verbose_is_global() {
    let cli = Cli::try_parse_from(["hooktrack", "serve", "--verbose"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn a_command_is_required() {
    assert!(Cli::try_parse_from(["hooktrack"]).is_err());
}

#[test]
fn unknown_commands_are_rejected() {
    assert!(Cli::try_parse_from(["hooktrack", "frobnicate"]).is_err());
}
