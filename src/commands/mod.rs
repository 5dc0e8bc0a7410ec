//! Command implementations for the FRC CLI
//!
//! Every handler resolves its keys (and checks any requested data point)
//! before touching the API, so invalid input never costs a request.

use std::io::Write;

use crate::{
    format::{format_record, Formatted, Record},
    render::{render_report, render_sentence, Palette},
    Result,
};

pub mod event;
pub mod matches;
pub mod team;


pub use event::{handle_event, EventParams};
pub use matches::{handle_event_matches, handle_match, EventMatchesParams, MatchParams};
pub use team::{handle_team, TeamParams};

/// Write one record as JSON, a single datum sentence, or a full report.
pub(crate) fn emit<W: Write>(
    record: &Record,
    datum: Option<&str>,
    as_json: bool,
    palette: &Palette,
    out: &mut W,
) -> Result<()> {
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
        return Ok(());
    }

    match format_record(record, datum)? {
        Formatted::Report(report) => render_report(&report, palette, out)?,
        Formatted::Datum(sentence) => render_sentence(&sentence, out)?,
    }
    Ok(())
}
