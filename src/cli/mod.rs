//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::Year;

#[derive(Debug, Parser)]
#[clap(
    name = "frc",
    version,
    about = "Look up FRC teams, events and matches on The Blue Alliance"
)]
pub struct Frc {
    /// TBA read API key (or set `TBA_AUTH_KEY` env var).
    #[clap(long, global = true)]
    pub auth_key: Option<String>,

    /// Disable colored output (also honors `NO_COLOR`).
    #[clap(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv).
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a team's profile.
    Team {
        /// Team number.
        #[clap(short = 'n', long = "number", allow_negative_numbers = true)]
        number: i64,

        /// Data point to display. If unspecified, all team data will be shown.
        #[clap(short = 'd', long = "datum", conflicts_with = "json")]
        datum: Option<String>,

        /// Print the raw record as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Show an event's details.
    Event {
        /// Event code, with or without a year prefix (`mo` or `2024mo`).
        #[clap(short = 'k', long = "key")]
        key: String,

        /// Year to prepend to a bare event code (defaults to the current year).
        #[clap(short = 'y', long = "year")]
        year: Option<Year>,

        /// Data point to display. If unspecified, all event data will be shown.
        #[clap(short = 'd', long = "datum", conflicts_with = "json")]
        datum: Option<String>,

        /// Print the raw record as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Show a single match result.
    ///
    /// Either pass a full match key with `-k`, or describe the match with
    /// `-e`, `-l`, `-n` and (for playoffs) `-r`.
    Match {
        /// Full match key, e.g. `2024mo_qf3m1`. Overrides the descriptor flags.
        #[clap(short = 'k', long = "key")]
        key: Option<String>,

        /// Year in which the match took place.
        #[clap(short = 'y', long = "year", default_value_t = Year::default())]
        year: Year,

        /// Event at which the match occurred.
        #[clap(short = 'e', long = "event", default_value = "")]
        event: String,

        /// Competition level (qm, qf, sf, or f).
        #[clap(short = 'l', long = "level", default_value = "qm")]
        level: String,

        /// Match number (set number for playoffs).
        #[clap(short = 'n', long = "number", default_value_t = 0)]
        number: u32,

        /// Match round within the set (only in playoffs).
        #[clap(short = 'r', long = "round", default_value_t = 0)]
        round: u32,

        /// Data point to display. If unspecified, the full result will be shown.
        #[clap(short = 'd', long = "datum", conflicts_with = "json")]
        datum: Option<String>,

        /// Print the raw record as JSON.
        #[clap(long)]
        json: bool,
    },

    /// List every match of an event, optionally only one team's.
    EventMatches {
        /// Event code, with or without a year prefix.
        #[clap(short = 'k', long = "key")]
        key: String,

        /// Year to prepend to a bare event code (defaults to the current year).
        #[clap(short = 'y', long = "year")]
        year: Option<Year>,

        /// Only show this team's matches.
        #[clap(short = 't', long = "team", allow_negative_numbers = true)]
        team: Option<i64>,
    },
}
