//! Type-safe wrappers and enums for FRC identifiers.

pub mod ids;
pub mod level;
pub mod time;

pub use ids::{EventKey, MatchKey, TeamKey};
pub use level::CompLevel;
pub use time::Year;
