use crate::cli::types::CompLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
mod tests;

/// Team record from `/team/{team_key}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Team {
    pub key: String,
    pub team_number: u32,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Official name, usually the full sponsor list.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_prov: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rookie_year: Option<i32>,
    #[serde(default)]
    pub motto: Option<String>,
}

impl Team {
    /// `City, State, Country`, skipping the parts the API left empty.
    pub fn location(&self) -> Option<String> {
        join_present(&[&self.city, &self.state_prov, &self.country])
    }
}

/// District an event belongs to.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct District {
    pub abbreviation: String,
    pub display_name: String,
    pub key: String,
    pub year: i32,
}

/// Event record from `/event/{event_key}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Event {
    pub key: String,
    pub name: String,
    pub event_code: String,
    pub event_type: i32,
    #[serde(default)]
    pub event_type_string: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub district: Option<District>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_prov: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
    pub year: i32,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Event {
    pub fn location(&self) -> Option<String> {
        join_present(&[&self.city, &self.state_prov, &self.country])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AllianceColor {
    Red,
    Blue,
}

impl AllianceColor {
    /// Lowercase name, as the API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            AllianceColor::Red => "red",
            AllianceColor::Blue => "blue",
        }
    }
}

impl fmt::Display for AllianceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AllianceColor::Red => "Red",
            AllianceColor::Blue => "Blue",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Alliance {
    /// `-1` until the match has been played.
    pub score: i64,
    pub team_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Alliances {
    pub red: Alliance,
    pub blue: Alliance,
}

impl Alliances {
    /// Red first, then blue.
    pub fn iter(&self) -> impl Iterator<Item = (AllianceColor, &Alliance)> {
        [
            (AllianceColor::Red, &self.red),
            (AllianceColor::Blue, &self.blue),
        ]
        .into_iter()
    }

    /// Alliance with the strictly greater score; `None` on ties or unplayed matches.
    pub fn winner(&self) -> Option<AllianceColor> {
        if self.red.score < 0 || self.blue.score < 0 {
            return None;
        }
        match self.red.score.cmp(&self.blue.score) {
            std::cmp::Ordering::Greater => Some(AllianceColor::Red),
            std::cmp::Ordering::Less => Some(AllianceColor::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Match record from `/match/{match_key}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Match {
    pub key: String,
    pub comp_level: CompLevel,
    pub set_number: u32,
    pub match_number: u32,
    pub alliances: Alliances,
    pub event_key: String,
    /// Scheduled start, Unix seconds. `None` or `0` means unscheduled.
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub actual_time: Option<i64>,
    #[serde(default)]
    pub predicted_time: Option<i64>,
}

impl Match {
    /// Number shown to users: the match number for qualifiers, the set for playoffs.
    pub fn number(&self) -> u32 {
        if self.comp_level.is_playoff() {
            self.set_number
        } else {
            self.match_number
        }
    }

    /// Match within the set; only meaningful for playoffs.
    pub fn round(&self) -> Option<u32> {
        self.comp_level.is_playoff().then_some(self.match_number)
    }

    pub fn scheduled_time(&self) -> Option<i64> {
        self.time.filter(|t| *t != 0)
    }
}

fn join_present(parts: &[&Option<String>]) -> Option<String> {
    let present: Vec<&str> = parts
        .iter()
        .filter_map(|p| p.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if present.is_empty() {
        None
    } else {
        Some(present.join(", "))
    }
}
