use clap::{CommandFactory, Parser};
use teashelf::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["teashelf", "add", "Gray Tea"],
        vec!["teashelf", "add", "Gray Tea", "--description", "smoky"],
        vec!["teashelf", "get", "Gray Tea"],
        vec!["teashelf", "get", "Gray Tea", "--format", "json"],
        vec!["teashelf", "--data-file", "/tmp/teas.json", "get", "Gray Tea"],
        vec!["teashelf", "--log-level", "debug", "config"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_requires_a_name() {
    assert!(Cli::try_parse_from(["teashelf", "add"]).is_err());
    assert!(Cli::try_parse_from(["teashelf", "get"]).is_err());
}

#[test]
fn add_description_defaults_to_empty() {
    let cli = Cli::try_parse_from(["teashelf", "add", "Oolong"]).unwrap();
    match cli.command {
        Commands::Add { name, description } => {
            assert_eq!(name, "Oolong");
            assert_eq!(description, "");
        }
        _ => panic!("expected add command"),
    }
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
