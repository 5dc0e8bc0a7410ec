//! Competition season year.

use crate::error::{FrcError, Result};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a competition year.
///
/// Defaults to the current calendar year on the local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Year(pub i32);

impl Year {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    pub fn current() -> Self {
        Self(Local::now().year())
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl Default for Year {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = FrcError;

    fn from_str(s: &str) -> Result<Self> {
        let year: i32 = s
            .trim()
            .parse()
            .map_err(|_| FrcError::invalid(format!("\"{s}\" is not a year")))?;
        if !(1000..=9999).contains(&year) {
            return Err(FrcError::invalid(format!(
                "year must have four digits, got {year}"
            )));
        }
        Ok(Self(year))
    }
}
