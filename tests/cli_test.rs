//! Integration tests for command-line parsing

use clap::Parser;
use frc_cli::{
    cli::{Commands, Frc},
    Year,
};

#[test]
fn test_team_command() {
    let app = Frc::try_parse_from(["frc", "team", "-n", "1418", "-d", "motto"]).unwrap();
    match app.command {
        Commands::Team {
            number,
            datum,
            json,
        } => {
            assert_eq!(number, 1418);
            assert_eq!(datum.as_deref(), Some("motto"));
            assert!(!json);
        }
        other => panic!("Expected team command, got {other:?}"),
    }
}

#[test]
fn test_negative_team_number_reaches_resolver() {
    let app = Frc::try_parse_from(["frc", "team", "-n", "-5"]).unwrap();
    assert!(matches!(app.command, Commands::Team { number: -5, .. }));
}

#[test]
fn test_event_command_with_year() {
    let app = Frc::try_parse_from(["frc", "event", "-k", "mo", "-y", "2019"]).unwrap();
    match app.command {
        Commands::Event { key, year, .. } => {
            assert_eq!(key, "mo");
            assert_eq!(year, Some(Year::new(2019)));
        }
        other => panic!("Expected event command, got {other:?}"),
    }
}

#[test]
fn test_bad_year_rejected() {
    assert!(Frc::try_parse_from(["frc", "event", "-k", "mo", "-y", "19"]).is_err());
}

#[test]
fn test_match_defaults() {
    let app = Frc::try_parse_from(["frc", "match", "-e", "mo", "-n", "5"]).unwrap();
    match app.command {
        Commands::Match {
            key,
            year,
            event,
            level,
            number,
            round,
            ..
        } => {
            assert!(key.is_none());
            assert_eq!(year, Year::current());
            assert_eq!(event, "mo");
            assert_eq!(level, "qm");
            assert_eq!(number, 5);
            assert_eq!(round, 0);
        }
        other => panic!("Expected match command, got {other:?}"),
    }
}

#[test]
fn test_datum_conflicts_with_json() {
    let result = Frc::try_parse_from(["frc", "team", "-n", "254", "-d", "name", "--json"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let app = Frc::try_parse_from([
        "frc",
        "event-matches",
        "-k",
        "2024mo",
        "-t",
        "1986",
        "--no-color",
        "-vv",
        "--auth-key",
        "abc",
    ])
    .unwrap();

    assert!(app.no_color);
    assert_eq!(app.verbose, 2);
    assert_eq!(app.auth_key.as_deref(), Some("abc"));
    assert!(matches!(
        app.command,
        Commands::EventMatches {
            team: Some(1986),
            ..
        }
    ));
}
