use clap::Parser;

use super::*;

#[test]
fn parses_a_minimal_check_invocation() {
    let cli = Cli::try_parse_from(["submit-guard", "check"]).unwrap();
    let Commands::Check(args) = &cli.command else {
        panic!("expected check subcommand");
    };
    assert!(args.diff_file.is_none());
    assert!(args.base.is_none());
    assert!(!args.parallel);
    assert!(matches!(args.event, Event::Upload));
}

#[test]
fn parses_check_flags() {
    let cli = Cli::try_parse_from([
        "submit-guard",
        "check",
        "--diff-file",
        "-",
        "--event",
        "commit",
        "--format",
        "json",
        "--parallel",
        "--no-tools",
    ])
    .unwrap();

    let Commands::Check(args) = &cli.command else {
        panic!("expected check subcommand");
    };
    assert_eq!(args.diff_file.as_deref(), Some(std::path::Path::new("-")));
    assert!(matches!(args.event, Event::Commit));
    assert!(args.parallel);
    assert!(args.no_tools);
}

#[test]
fn diff_file_conflicts_with_base() {
    let result = Cli::try_parse_from([
        "submit-guard",
        "check",
        "--diff-file",
        "x.diff",
        "--base",
        "origin/main",
    ]);
    assert!(result.is_err());
}

#[test]
fn rejects_unknown_format() {
    let result = Cli::try_parse_from(["submit-guard", "check", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn parses_init() {
    let cli = Cli::try_parse_from(["submit-guard", "init", "--force", "some/dir"]).unwrap();
    let Commands::Init(args) = &cli.command else {
        panic!("expected init subcommand");
    };
    assert!(args.force);
    assert_eq!(args.path, std::path::PathBuf::from("some/dir"));
}
