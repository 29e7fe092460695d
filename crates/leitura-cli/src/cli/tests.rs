//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_run() {
    match parse(&["leitura", "run"]) {
        CliCommand::Run { once } => assert!(!once),
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_once() {
    match parse(&["leitura", "run", "--once"]) {
        CliCommand::Run { once } => assert!(once),
        _ => panic!("expected Run with --once"),
    }
}

#[test]
fn cli_parse_next() {
    assert!(matches!(parse(&["leitura", "next"]), CliCommand::Next));
}

#[test]
fn cli_parse_send() {
    match parse(&["leitura", "send"]) {
        CliCommand::Send { force } => assert!(!force),
        _ => panic!("expected Send"),
    }
}

#[test]
fn cli_parse_send_force() {
    match parse(&["leitura", "send", "--force"]) {
        CliCommand::Send { force } => assert!(force),
        _ => panic!("expected Send with --force"),
    }
}

#[test]
fn cli_parse_status_and_reset() {
    assert!(matches!(parse(&["leitura", "status"]), CliCommand::Status));
    assert!(matches!(parse(&["leitura", "reset"]), CliCommand::Reset));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["leitura", "download"]).is_err());
}
