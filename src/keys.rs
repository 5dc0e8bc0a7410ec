//! Canonical key derivation for teams, events and matches.
//!
//! Users type loose identifiers (`254`, `mo`, `-l qf -n 3 -r 1`); the API wants
//! exact keys (`frc254`, `2024mo`, `2024mo_qf3m1`). Everything here is pure and
//! runs before any request is made, so a bad identifier never reaches the network.

use crate::{
    cli::types::{CompLevel, EventKey, MatchKey, TeamKey, Year},
    error::{FrcError, Result},
};


/// Prefix the API puts in front of every team number.
pub const TEAM_KEY_PREFIX: &str = "frc";

/// Build the `frc<number>` key for a team.
pub fn resolve_team_key(number: i64) -> Result<TeamKey> {
    if number <= 0 {
        return Err(FrcError::invalid(format!(
            "team number must be positive, got {number}"
        )));
    }
    let number = u32::try_from(number)
        .map_err(|_| FrcError::invalid(format!("team number {number} is out of range")))?;

    Ok(TeamKey::new(number))
}

/// Build an event key, prepending the current year when the code has none.
pub fn resolve_event_key(raw_code: &str, explicit_year: Option<Year>) -> Result<EventKey> {
    resolve_event_key_for_year(raw_code, explicit_year.unwrap_or_else(Year::current))
}

/// Build an event key, prepending `year` when the code has none.
///
/// Surrounding whitespace is ignored. A code that starts with a digit already
/// carries its year and is returned as-is; a bare code is lowercased to match
/// TBA's keys.
pub fn resolve_event_key_for_year(raw_code: &str, year: Year) -> Result<EventKey> {
    let code = raw_code.trim();
    if code.is_empty() {
        return Err(FrcError::invalid("event code must not be empty"));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FrcError::invalid(format!(
            "event code \"{code}\" must be alphanumeric"
        )));
    }

    let key = if code.starts_with(|c: char| c.is_ascii_digit()) {
        code.to_string()
    } else {
        format!("{year}{}", code.to_ascii_lowercase())
    };

    tracing::debug!(%key, "resolved event key");
    Ok(EventKey::new(key))
}

/// Build a match key from its descriptor, or pass through an explicit key.
///
/// Qualifiers are `<event>_qm<number>`; playoff matches are
/// `<event>_<level><number>m<round>`. `round` is ignored for qualifiers.
pub fn resolve_match_key(
    explicit_key: Option<&str>,
    year: Year,
    event_code: &str,
    level: &str,
    number: u32,
    round: u32,
) -> Result<MatchKey> {
    if let Some(key) = explicit_key.filter(|k| !k.is_empty()) {
        return Ok(MatchKey::new(key.to_string()));
    }

    let level: CompLevel = level.parse()?;
    let event = resolve_event_key_for_year(event_code, year)?;
    if number < 1 {
        return Err(FrcError::invalid(format!(
            "match number must be at least 1, got {number}"
        )));
    }

    let key = if level.is_playoff() {
        if round < 1 {
            return Err(FrcError::invalid(format!(
                "{} matches need a round of at least 1",
                level.display_name().to_lowercase()
            )));
        }
        format!("{event}_{}{number}m{round}", level.code())
    } else {
        format!("{event}_{}{number}", level.code())
    };

    tracing::debug!(%key, "resolved match key");
    Ok(MatchKey::new(key))
}

/// Strip the `frc` prefix from an API team key for display.
///
/// Keys without the prefix come back unchanged.
pub fn team_number_from_key(key: &str) -> &str {
    key.strip_prefix(TEAM_KEY_PREFIX).unwrap_or(key)
}
