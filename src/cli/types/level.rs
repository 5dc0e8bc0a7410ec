//! Competition level codes used by FRC match keys.

use crate::error::FrcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phase of the competition a match belongs to.
///
/// Match keys carry the lowercase code (`qm`, `qf`, `sf`, `f`); reports show
/// the display name instead.
///
/// # Examples
///
/// ```rust
/// use frc_cli::CompLevel;
///
/// let level: CompLevel = "QF".parse().unwrap();
/// assert_eq!(level, CompLevel::Quarterfinal);
/// assert_eq!(level.code(), "qf");
/// assert_eq!(level.display_name(), "Quarterfinal");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompLevel {
    #[serde(rename = "qm")]
    Qualifier,
    /// Only seen on historical records; not accepted as user input.
    #[serde(rename = "ef")]
    Octofinal,
    #[serde(rename = "qf")]
    Quarterfinal,
    #[serde(rename = "sf")]
    Semifinal,
    #[serde(rename = "f")]
    Final,
}

impl CompLevel {
    /// Code as it appears inside a match key.
    pub fn code(&self) -> &'static str {
        match self {
            CompLevel::Qualifier => "qm",
            CompLevel::Octofinal => "ef",
            CompLevel::Quarterfinal => "qf",
            CompLevel::Semifinal => "sf",
            CompLevel::Final => "f",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CompLevel::Qualifier => "Qualifier",
            CompLevel::Octofinal => "Octofinal",
            CompLevel::Quarterfinal => "Quarterfinal",
            CompLevel::Semifinal => "Semifinal",
            CompLevel::Final => "Final",
        }
    }

    /// Playoff matches are grouped into sets, so their keys need a round suffix.
    pub fn is_playoff(&self) -> bool {
        !matches!(self, CompLevel::Qualifier)
    }
}

impl fmt::Display for CompLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CompLevel {
    type Err = FrcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "qm" => Ok(CompLevel::Qualifier),
            "qf" => Ok(CompLevel::Quarterfinal),
            "sf" => Ok(CompLevel::Semifinal),
            "f" => Ok(CompLevel::Final),
            _ => Err(FrcError::invalid(format!(
                "unrecognized competition level \"{s}\" (expected qm, qf, sf, or f)"
            ))),
        }
    }
}
