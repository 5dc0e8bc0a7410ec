//! Entry point: parse CLI, load settings and dispatch to command handlers.

use std::{io, process::ExitCode};

use clap::Parser;
use frc_cli::{
    cli::{Commands, Frc},
    commands::{
        handle_event, handle_event_matches, handle_match, handle_team, EventMatchesParams,
        EventParams, MatchParams, TeamParams,
    },
    config::{color_enabled, config_path, load_file_config, Settings},
    render::Palette,
    tba::{LazyClient, TbaClient},
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> ExitCode {
    let app = Frc::parse();
    init_tracing(app.verbose);

    match run(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` is debug and `-vv` is trace.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "frc_cli=debug",
        _ => "frc_cli=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(app: Frc) -> Result<()> {
    let Frc {
        auth_key,
        no_color,
        command,
        ..
    } = app;

    // A bad config file is reported by the client once a request is needed.
    let file = load_file_config(&config_path()).unwrap_or_default();
    let palette = Palette::from_flag(color_enabled(no_color, &file));

    let api = LazyClient::new(move || {
        let file = load_file_config(&config_path())?;
        let settings = Settings::resolve(auth_key.clone(), no_color, &file)?;
        TbaClient::with_base_url(&settings.auth_key, settings.base_url)
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Team {
            number,
            datum,
            json,
        } => {
            handle_team(
                &api,
                TeamParams {
                    number,
                    datum,
                    as_json: json,
                },
                &palette,
                &mut out,
            )
            .await
        }

        Commands::Event {
            key,
            year,
            datum,
            json,
        } => {
            handle_event(
                &api,
                EventParams {
                    code: key,
                    year,
                    datum,
                    as_json: json,
                },
                &palette,
                &mut out,
            )
            .await
        }

        Commands::Match {
            key,
            year,
            event,
            level,
            number,
            round,
            datum,
            json,
        } => {
            handle_match(
                &api,
                MatchParams {
                    key,
                    year,
                    event,
                    level,
                    number,
                    round,
                    datum,
                    as_json: json,
                },
                &palette,
                &mut out,
            )
            .await
        }

        Commands::EventMatches { key, year, team } => {
            handle_event_matches(
                &api,
                EventMatchesParams {
                    code: key,
                    year,
                    team,
                },
                &palette,
                &mut out,
            )
            .await
        }
    }
}
