//! Single-datum lookup.
//!
//! Each record kind has a table mapping a data point name to the function that
//! writes its sentence. Names are matched case-insensitively; anything not in
//! the table is an [`FrcError::UnknownField`].

use super::{
    event_dates, event_type, flatten_address, format_timestamp, quote_motto,
    slash_date, strip_url_scheme, Record, RecordKind,
};
use crate::{
    error::FrcError,
    keys::team_number_from_key,
    tba::types::{Alliance, AllianceColor, Event, Match, Team},
    Result,
};

type Accessor<T> = fn(&T) -> String;

const TEAM_DATA: &[(&str, Accessor<Team>)] = &[
    ("name", |t| match present(&t.name) {
        Some(v) => format!("Team {}'s name: {}", t.team_number, v),
        None => team_missing(t, "name"),
    }),
    ("website", |t| match present(&t.website) {
        Some(v) => format!("Team {}'s website: {}", t.team_number, strip_url_scheme(v)),
        None => team_missing(t, "website"),
    }),
    ("locality", |t| match present(&t.city) {
        Some(v) => format!("Team {}'s locality: {}", t.team_number, v),
        None => team_missing(t, "locality"),
    }),
    ("rookieyear", |t| match t.rookie_year {
        Some(y) => format!("Team {}'s first year was: {}", t.team_number, y),
        None => team_missing(t, "rookie year"),
    }),
    ("region", |t| match present(&t.state_prov) {
        Some(v) => format!("Team {} plays in the {} region.", t.team_number, v),
        None => team_missing(t, "region"),
    }),
    ("location", |t| match t.location() {
        Some(v) => format!("Team {} comes from {}.", t.team_number, v),
        None => team_missing(t, "location"),
    }),
    ("country", team_country),
    ("countryname", team_country),
    ("key", |t| format!("Team {}'s key is {}.", t.team_number, t.key)),
    ("motto", |t| match present(&t.motto) {
        Some(v) => format!("Team {}'s motto is {}.", t.team_number, quote_motto(v)),
        None => team_missing(t, "motto"),
    }),
    ("nickname", |t| match present(&t.nickname) {
        Some(v) => format!("Team {}'s nickname is {}.", t.team_number, v),
        None => team_missing(t, "nickname"),
    }),
    ("teamnumber", |t| {
        format!("Team {}'s number is {}.", t.team_number, t.team_number)
    }),
];

const EVENT_DATA: &[(&str, Accessor<Event>)] = &[
    ("name", |e| format!("Event {}'s name: {}", e.key, e.name)),
    ("shortname", |e| match present(&e.short_name) {
        Some(v) => format!("{}'s short name: {}", e.name, v),
        None => event_missing(e, "short name"),
    }),
    ("key", |e| format!("{}'s key is {}.", e.name, e.key)),
    ("code", |e| format!("{}'s event code is {}.", e.name, e.event_code)),
    ("year", |e| format!("{} takes place in {}.", e.name, e.year)),
    ("dates", |e| match event_dates(e) {
        ("Date", date) => format!("{} takes place on {}.", e.name, date),
        (_, dates) => format!("{} runs {}.", e.name, dates),
    }),
    ("startdate", |e| {
        format!("{} starts on {}.", e.name, slash_date(&e.start_date))
    }),
    ("enddate", |e| {
        format!("{} ends on {}.", e.name, slash_date(&e.end_date))
    }),
    ("timezone", |e| match present(&e.timezone) {
        Some(v) => format!("{}'s timezone: {}", e.name, v),
        None => event_missing(e, "timezone"),
    }),
    ("website", |e| match present(&e.website) {
        Some(v) => format!("{}'s website: {}", e.name, strip_url_scheme(v)),
        None => event_missing(e, "website"),
    }),
    ("location", |e| match e.location() {
        Some(v) => format!("{} is held in {}.", e.name, v),
        None => event_missing(e, "location"),
    }),
    ("venue", |e| match present(&e.location_name) {
        Some(v) => format!("{} is held at {}.", e.name, v),
        None => event_missing(e, "venue"),
    }),
    ("address", |e| match present(&e.address) {
        Some(v) => format!("{}'s address: {}", e.name, flatten_address(v)),
        None => event_missing(e, "address"),
    }),
    ("district", |e| match &e.district {
        Some(d) => format!("{} is part of the {} district.", e.name, d.display_name),
        None => format!("{} is not part of a district.", e.name),
    }),
    ("type", |e| format!("{} is a {} event.", e.name, event_type(e))),
];

const MATCH_DATA: &[(&str, Accessor<Match>)] = &[
    ("key", |m| {
        format!(
            "{} {} #{}'s key is {}.",
            m.event_key.to_uppercase(),
            m.comp_level.display_name(),
            m.number(),
            m.key
        )
    }),
    ("event", |m| format!("Match {} was played at event {}.", m.key, m.event_key)),
    ("level", |m| {
        format!("Match {} is a {} match.", m.key, m.comp_level.display_name())
    }),
    ("number", |m| format!("Match {}'s number is {}.", m.key, m.number())),
    ("round", |m| match m.round() {
        Some(r) => format!("Match {} is round {}.", m.key, r),
        None => format!("Match {} is a qualifier and has no round.", m.key),
    }),
    ("time", |m| match m.scheduled_time().and_then(format_timestamp) {
        Some(t) => format!("Match {} is scheduled for {}.", m.key, t),
        None => format!("Match {} has no scheduled time.", m.key),
    }),
    ("red", |m| alliance_teams(m, AllianceColor::Red, &m.alliances.red)),
    ("blue", |m| alliance_teams(m, AllianceColor::Blue, &m.alliances.blue)),
    ("redscore", |m| alliance_score(m, AllianceColor::Red, &m.alliances.red)),
    ("bluescore", |m| alliance_score(m, AllianceColor::Blue, &m.alliances.blue)),
    ("winner", |m| match m.alliances.winner() {
        Some(color) => format!(
            "Match {} was won by the {} alliance.",
            m.key,
            color.as_str()
        ),
        None if m.alliances.red.score < 0 || m.alliances.blue.score < 0 => {
            format!("Match {} has not been played yet.", m.key)
        }
        None => format!("Match {} ended in a tie.", m.key),
    }),
];

/// Format one named data point of `record` as a sentence.
pub fn format_datum(record: &Record, name: &str) -> Result<String> {
    let sentence = match record {
        Record::Team(team) => lookup(TEAM_DATA, name).map(|f| f(team)),
        Record::Event(event) => lookup(EVENT_DATA, name).map(|f| f(event)),
        Record::Match(m) => lookup(MATCH_DATA, name).map(|f| f(m)),
    };

    sentence.ok_or_else(|| FrcError::UnknownField {
        kind: record.kind(),
        field: name.to_string(),
    })
}

/// Data point names accepted for `kind`, in table order.
pub fn recognized_data(kind: RecordKind) -> Vec<&'static str> {
    match kind {
        RecordKind::Team => names(TEAM_DATA),
        RecordKind::Event => names(EVENT_DATA),
        RecordKind::Match => names(MATCH_DATA),
    }
}

fn lookup<T>(table: &[(&'static str, Accessor<T>)], name: &str) -> Option<Accessor<T>> {
    let name = name.trim();
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, f)| *f)
}

fn names<T>(table: &[(&'static str, Accessor<T>)]) -> Vec<&'static str> {
    table.iter().map(|(key, _)| *key).collect()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn team_country(t: &Team) -> String {
    match present(&t.country) {
        Some(v) => format!("Team {} is from the following country: {}", t.team_number, v),
        None => team_missing(t, "country"),
    }
}

fn team_missing(t: &Team, what: &str) -> String {
    format!("Team {} has no {} listed.", t.team_number, what)
}

fn event_missing(e: &Event, what: &str) -> String {
    format!("{} has no {} listed.", e.name, what)
}

fn alliance_teams(m: &Match, color: AllianceColor, alliance: &Alliance) -> String {
    let teams: Vec<&str> = alliance
        .team_keys
        .iter()
        .map(|k| team_number_from_key(k))
        .collect();
    format!(
        "Match {}'s {} alliance: {}",
        m.key,
        color.as_str(),
        teams.join(" | ")
    )
}

fn alliance_score(m: &Match, color: AllianceColor, alliance: &Alliance) -> String {
    let color = color.as_str();
    if alliance.score < 0 {
        format!("Match {}'s {} alliance has no score yet.", m.key, color)
    } else {
        format!(
            "Match {}'s {} alliance scored {} points.",
            m.key, color, alliance.score
        )
    }
}

/// Check a data point name before anything is fetched.
pub fn validate_datum(kind: RecordKind, name: &str) -> Result<()> {
    let name = name.trim();
    if recognized_data(kind)
        .iter()
        .any(|known| known.eq_ignore_ascii_case(name))
    {
        Ok(())
    } else {
        Err(FrcError::UnknownField {
            kind,
            field: name.to_string(),
        })
    }
}
