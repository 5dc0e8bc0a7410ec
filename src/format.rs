//! Record formatting: full reports and single-datum sentences.
//!
//! Output here is plain structured text. Colors and layout belong to
//! [`crate::render`], which consumes a [`Report`] as-is.

use chrono::DateTime;
use serde::Serialize;
use std::fmt;

use crate::{
    keys::team_number_from_key,
    tba::types::{AllianceColor, Event, Match, Team},
    Result,
};

pub mod datum;


pub use datum::{format_datum, recognized_data, validate_datum};

/// Which kind of record is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Team,
    Event,
    Match,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordKind::Team => "team",
            RecordKind::Event => "event",
            RecordKind::Match => "match",
        };
        write!(f, "{}", s)
    }
}

/// A fetched record of any kind.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Record {
    Team(Team),
    Event(Event),
    Match(Match),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Team(_) => RecordKind::Team,
            Record::Event(_) => RecordKind::Event,
            Record::Match(_) => RecordKind::Match,
        }
    }
}

/// One labeled line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

/// One alliance of a match report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllianceLine {
    pub color: AllianceColor,
    /// Team numbers with the `frc` prefix removed, in API order.
    pub teams: Vec<String>,
    /// `None` until the match has been played.
    pub score: Option<i64>,
    pub winner: bool,
}

/// Fully formatted record, ready for the terminal renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub header: String,
    pub fields: Vec<Field>,
    /// Empty for teams and events; red then blue for matches.
    pub alliances: Vec<AllianceLine>,
}

impl Report {
    fn new(header: String) -> Self {
        Self {
            header,
            fields: Vec::new(),
            alliances: Vec::new(),
        }
    }

    /// Add a field, skipping it when the value is missing or blank.
    fn push(&mut self, label: &'static str, value: Option<String>) {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.fields.push(Field { label, value });
        }
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

pub fn format_full(record: &Record) -> Report {
    match record {
        Record::Team(team) => format_team(team),
        Record::Event(event) => format_event(event),
        Record::Match(m) => format_match(m),
    }
}

pub fn format_team(team: &Team) -> Report {
    let mut report = Report::new(format!("Team {}", team.team_number));

    report.push("Nickname", team.nickname.clone());
    report.push("Website", team.website.as_deref().map(strip_url_scheme));
    report.push("Locality", team.city.clone());
    report.push("Region", team.state_prov.clone());
    report.push("Rookie", team.rookie_year.map(|y| y.to_string()));
    report.push("Country", team.country.clone());
    report.push("Motto", team.motto.as_deref().map(quote_motto));

    report
}

pub fn format_event(event: &Event) -> Report {
    let mut report = Report::new(format!("{} {} ({})", event.year, event.name, event.key));

    let (label, dates) = event_dates(event);
    report.push(label, Some(dates));
    report.push("Timezone", event.timezone.clone());
    report.push("Website", event.website.as_deref().map(strip_url_scheme));
    report.push("Location", event.location());
    report.push("Venue", event.location_name.clone());
    report.push("Address", event.address.as_deref().map(flatten_address));
    report.push(
        "District",
        event
            .district
            .as_ref()
            .map(|d| format!("{} ({})", d.display_name, d.abbreviation.to_uppercase())),
    );
    report.push("Type", Some(event_type(event)));

    report
}

pub fn format_match(m: &Match) -> Report {
    let mut report = Report::new(match_header(m));

    report.push("Date/Time", m.scheduled_time().and_then(format_timestamp));

    let winner = m.alliances.winner();
    report.alliances = m
        .alliances
        .iter()
        .map(|(color, alliance)| AllianceLine {
            color,
            teams: alliance
                .team_keys
                .iter()
                .map(|k| team_number_from_key(k).to_string())
                .collect(),
            score: (alliance.score >= 0).then_some(alliance.score),
            winner: winner == Some(color),
        })
        .collect();

    report
}

/// Render a report (or datum) for whichever record the caller holds.
pub fn format_record(record: &Record, datum: Option<&str>) -> Result<Formatted> {
    match datum {
        Some(name) => Ok(Formatted::Datum(format_datum(record, name)?)),
        None => Ok(Formatted::Report(format_full(record))),
    }
}

/// Output of [`format_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    Report(Report),
    Datum(String),
}

pub(crate) fn match_header(m: &Match) -> String {
    let mut header = format!(
        "{} {} #{}",
        m.event_key.to_uppercase(),
        m.comp_level.display_name(),
        m.number()
    );
    if let Some(round) = m.round() {
        header.push_str(&format!(", Round {round}"));
    }
    header.push_str(&format!(" ({})", m.key));
    header
}

/// `("Date", "2024/03/09")` for one-day events, `("Dates", "a - b")` otherwise.
pub(crate) fn event_dates(event: &Event) -> (&'static str, String) {
    let start = slash_date(&event.start_date);
    let end = slash_date(&event.end_date);
    if start == end {
        ("Date", start)
    } else {
        ("Dates", format!("{start} - {end}"))
    }
}

pub(crate) fn event_type(event: &Event) -> String {
    match &event.event_type_string {
        Some(s) if !s.is_empty() => format!("{} (ID {})", s, event.event_type),
        _ => format!("ID {}", event.event_type),
    }
}

/// Drop a leading `http://` or `https://`.
pub fn strip_url_scheme(url: &str) -> String {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
        .to_string()
}

/// `2024-03-09` becomes `2024/03/09`.
pub fn slash_date(date: &str) -> String {
    date.replace('-', "/")
}

/// Join a multi-line address into one comma-separated line.
pub fn flatten_address(address: &str) -> String {
    address
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Wrap a motto in quotes unless the team already did.
pub fn quote_motto(motto: &str) -> String {
    if motto.starts_with('"') {
        motto.to_string()
    } else {
        format!("\"{motto}\"")
    }
}

/// Unix seconds as `YYYY/MM/DD at HH:MM UTC`.
pub fn format_timestamp(secs: i64) -> Option<String> {
    DateTime::from_timestamp(secs, 0).map(|t| t.format("%Y/%m/%d at %H:%M UTC").to_string())
}
