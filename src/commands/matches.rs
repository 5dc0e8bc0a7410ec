//! Match and event-matches command implementations

use std::io::Write;

use crate::{
    error::FrcError,
    format::{format_match, validate_datum, Record, RecordKind},
    keys::{resolve_event_key, resolve_match_key, resolve_team_key},
    render::{render_report, Palette},
    tba::TbaApi,
    Result, Year,
};

use super::emit;

/// Parameters for the match command
#[derive(Debug, Clone)]
pub struct MatchParams {
    /// A full match key; when present the descriptor fields are ignored.
    pub key: Option<String>,
    pub year: Year,
    pub event: String,
    pub level: String,
    pub number: u32,
    pub round: u32,
    pub datum: Option<String>,
    pub as_json: bool,
}

/// Handle the match command
pub async fn handle_match<A: TbaApi, W: Write>(
    api: &A,
    params: MatchParams,
    palette: &Palette,
    out: &mut W,
) -> Result<()> {
    let key = resolve_match_key(
        params.key.as_deref(),
        params.year,
        &params.event,
        &params.level,
        params.number,
        params.round,
    )?;
    if let Some(datum) = params.datum.as_deref() {
        validate_datum(RecordKind::Match, datum)?;
    }

    tracing::debug!(%key, "fetching match");
    let m = api.fetch_match(&key).await?;

    emit(
        &Record::Match(m),
        params.datum.as_deref(),
        params.as_json,
        palette,
        out,
    )
}

/// Parameters for the event-matches command
#[derive(Debug, Clone)]
pub struct EventMatchesParams {
    pub code: String,
    pub year: Option<Year>,
    /// Restrict the listing to one team.
    pub team: Option<i64>,
}

/// Handle the event-matches command
///
/// Matches are printed in the order the API returns them. An empty list is
/// an error rather than silent success.
pub async fn handle_event_matches<A: TbaApi, W: Write>(
    api: &A,
    params: EventMatchesParams,
    palette: &Palette,
    out: &mut W,
) -> Result<()> {
    let event = resolve_event_key(&params.code, params.year)?;
    let team = params.team.map(resolve_team_key).transpose()?;

    let matches = match &team {
        Some(team) => {
            tracing::debug!(%event, %team, "fetching team matches at event");
            api.fetch_team_event_matches(team, &event).await?
        }
        None => {
            tracing::debug!(%event, "fetching event matches");
            api.fetch_event_matches(&event).await?
        }
    };

    if matches.is_empty() {
        tracing::warn!(%event, "API returned no matches");
        return Err(FrcError::NoMatches {
            event: event.to_string(),
        });
    }

    for m in &matches {
        render_report(&format_match(m), palette, out)?;
    }
    Ok(())
}
