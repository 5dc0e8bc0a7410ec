//! The Blue Alliance API: record types and the HTTP client.

pub mod http;
pub mod types;

pub use http::{LazyClient, TbaApi, TbaClient, TBA_BASE_URL};
pub use types::{Alliance, AllianceColor, Alliances, District, Event, Match, Team};
