//! Canonical key types for The Blue Alliance API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Team key, e.g. `frc254`.
///
/// Built by [`crate::keys::resolve_team_key`], which guarantees a positive team number.
///
/// # Examples
///
/// ```rust
/// use frc_cli::keys::resolve_team_key;
///
/// let key = resolve_team_key(254).unwrap();
/// assert_eq!(key.to_string(), "frc254");
/// assert_eq!(key.number(), 254);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamKey(u32);

impl TeamKey {
    pub(crate) fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frc{}", self.0)
    }
}

/// Event key, e.g. `2024mo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventKey(String);

impl EventKey {
    pub(crate) fn new(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Match key, e.g. `2024mo_qm5` or `2024mo_qf3m1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchKey(String);

impl MatchKey {
    pub(crate) fn new(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
