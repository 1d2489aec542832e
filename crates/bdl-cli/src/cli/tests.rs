//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn fetch_with_file_and_workers() {
    match parse(&["bdl", "fetch", "--file", "urls.txt", "--workers", "4"]) {
        CliCommand::Fetch { file, workers } => {
            assert_eq!(file, Some(PathBuf::from("urls.txt")));
            assert_eq!(workers, Some(4));
        }
        other => panic!("expected Fetch, got {:?}", other),
    }
}

#[test]
fn fetch_without_file_parses() {
    // --file stays optional at the parser level; the command prints a usage
    // hint instead of failing.
    match parse(&["bdl", "fetch"]) {
        CliCommand::Fetch { file, workers } => {
            assert!(file.is_none());
            assert!(workers.is_none());
        }
        other => panic!("expected Fetch, got {:?}", other),
    }
}

#[test]
fn scan_takes_a_directory() {
    match parse(&["bdl", "scan", "/etc/nginx"]) {
        CliCommand::Scan { dir } => assert_eq!(dir, PathBuf::from("/etc/nginx")),
        other => panic!("expected Scan, got {:?}", other),
    }
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["bdl", "upload"]).is_err());
}
